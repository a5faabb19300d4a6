use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// On-disk keyword map: two dictionaries from localized spelling to Go name.
///
/// `BTreeMap` keeps iteration in ascending key order so that table construction is
/// deterministic regardless of the order keys appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordMapping {
    /// Localized keyword to Go keyword (`"si": "if"`).
    pub keywords: BTreeMap<String, String>,
    /// Localized name to Go predeclared identifier (`"nulo": "nil"`).
    pub predeclared: BTreeMap<String, String>,
}

/// Errors raised while building [`super::Maps`].
#[derive(Error, Debug)]
pub enum KeymapError {
    /// The data is not a keyword map JSON object.
    #[error("Failed to parse keyword map: {0}")]
    Parse(#[from] serde_json::Error),

    /// A localized spelling appears in both dictionaries.
    #[error("Localized name '{key}' is mapped both as a keyword and as a predeclared identifier")]
    ConflictingKey {
        /// Localized spelling present in both dictionaries.
        key: String,
    },

    /// A value is not a valid Go identifier.
    #[error("Localized name '{key}' maps to '{value}', which is not a valid Go identifier")]
    InvalidHostName {
        /// Localized spelling.
        key: String,
        /// The rejected Go name.
        value: String,
    },
}
