//! Lexical translation between localized source and Go.
//!
//! Every function here works on byte buffers only and keeps no state between calls.
mod bidirectional;
mod compact;
mod direction;
mod header;
mod localized;
mod mangle;
mod types;

pub use bidirectional::transpile_file;
pub use compact::compact_commas_in_braces;
pub use direction::{
    contains_localized_keywords,
    detect_direction,
};
pub use header::{
    build_tag_prefix_len,
    split_header,
};
pub use localized::{
    chan_should_be_dropped,
    transpile_file_localized_to_host,
};
pub use mangle::{
    MANGLE_PREFIX,
    host_safe,
    mangle_ident,
};
pub use types::{
    Direction,
    TranspileError,
};
