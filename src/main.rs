//! Entry point for the `pgo` command.

use std::process::ExitCode;

use clap::Parser;
use poly_go::cli::{
    self,
    Cli,
};
use tracing_subscriber::EnvFilter;

/// Runs `pgo` and maps failures to exit status 1.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            tracing::error!("Failed to get current directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run(cli, &cwd, &mut std::io::stdout()).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
