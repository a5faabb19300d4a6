//! Keyword maps: localized spelling ⇄ Go keyword / predeclared identifier.
pub mod embedded;
mod maps;
mod types;

pub use maps::Maps;
pub use types::{
    KeymapError,
    KeywordMapping,
};
