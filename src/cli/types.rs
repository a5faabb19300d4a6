use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::transpile::TranspileError;
use crate::workspace::WorkspaceError;

/// Errors reported by the `pgo` command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Locale or keyword map could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Module discovery or generation failed.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// `translate` could not translate the file.
    #[error("Failed to transpile {}: {source}", path.display())]
    Transpile {
        /// File given to `translate`.
        path: PathBuf,
        /// Translation error.
        #[source]
        source: TranspileError,
    },

    /// Reading or writing the file given to `translate` failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// File given to `translate`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `go` could not be started.
    #[error("Failed to run go: {0}")]
    Go(#[source] std::io::Error),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
