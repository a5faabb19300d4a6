use thiserror::Error;

use crate::syntax::InvalidUtf8;

/// Which way a file is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Localized spelling to Go.
    LocalToHost,
    /// Go to localized spelling.
    HostToLocal,
}

/// Errors of a single-file translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranspileError {
    /// Code outside comments and literals is not valid UTF-8.
    #[error("Invalid UTF-8 at byte {offset}")]
    Encoding {
        /// Byte offset from the start of the file.
        offset: usize,
    },

    /// A Go keyword or predeclared name written as is in localized source.
    #[error("Go name '{ident}' is not allowed in localized source; use the localized spelling")]
    DisallowedHostKeyword {
        /// The offending identifier.
        ident: String,
    },
}

impl From<InvalidUtf8> for TranspileError {
    fn from(err: InvalidUtf8) -> Self {
        Self::Encoding { offset: err.offset }
    }
}
