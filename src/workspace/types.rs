use std::path::PathBuf;

use thiserror::Error;

use crate::transpile::TranspileError;

/// Errors of module discovery and generation.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// No `go.mod` in the start directory or its ancestors.
    #[error("go.mod not found in {} or any parent directory", start.display())]
    ModuleRootNotFound {
        /// Directory the search started from.
        start: PathBuf,
    },

    /// A file or directory operation failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// Path the operation was on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Walking the module tree failed.
    #[error("Failed to walk module: {0}")]
    Walk(#[from] ignore::Error),

    /// A `.p.go` file could not be translated.
    #[error("Failed to transpile {}: {source}", path.display())]
    Transpile {
        /// Path relative to the module root.
        path: PathBuf,
        /// Translation error.
        #[source]
        source: TranspileError,
    },

    /// A plain `.go` file contains localized keywords.
    #[error(
        "Localized keywords found in {}; rename the file to *.p.go so it can be transpiled",
        path.display()
    )]
    LocalizedKeywordsInHostFile {
        /// Path relative to the module root.
        path: PathBuf,
    },
}

impl WorkspaceError {
    /// Maps an I/O error on `path` to [`WorkspaceError::Io`].
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Counts reported by a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// `.p.go` files translated to Go.
    pub translated: usize,
    /// Files copied unchanged, Go sources included.
    pub copied: usize,
    /// `.p.go` files left out by the locale filter.
    pub skipped: usize,
}
