//! Module discovery and generation of the translated `.pgo_gen` tree.
mod generate;
mod naming;
mod root;
mod types;

/// Directory under the module root that receives the generated Go module.
pub const GENERATED_DIR_NAME: &str = ".pgo_gen";

pub use generate::{
    clean,
    generate,
    generated_dir,
};
pub use naming::{
    GENERATED_SUFFIX,
    LOCALIZED_SUFFIX,
    is_localized_source,
    localized_output_name,
    map_args_for_generated,
    should_include_localized,
};
pub use root::find_module_root;
pub use types::{
    GenerateSummary,
    WorkspaceError,
};
