//! `pgo` command line interface.
mod commands;
mod types;

use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};

pub use commands::run;
pub use types::CliError;

use crate::config::LocaleSettings;

/// Command line of `pgo`.
#[derive(Parser, Debug)]
#[command(name = "pgo")]
#[command(version)]
#[command(about = "Write Go with keywords in your own language")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Locale selection flags shared by the generating commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleArgs {
    /// Locale override (e.g. bn, es, jp, zh)
    #[arg(long, value_name = "LOCALE")]
    pub lang: Option<String>,

    /// Custom keyword map path
    #[arg(long, value_name = "PATH")]
    pub map: Option<PathBuf>,

    /// Allow Go keywords in .p.go files
    #[arg(long = "allow-go")]
    pub allow_go: bool,
}

impl From<LocaleArgs> for LocaleSettings {
    fn from(args: LocaleArgs) -> Self {
        Self { lang: args.lang, map_path: args.map, allow_host_keywords: args.allow_go }
    }
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate .pgo_gen
    Gen {
        /// Locale selection.
        #[command(flatten)]
        locale: LocaleArgs,
    },

    /// Build the module via .pgo_gen
    Build {
        /// Locale selection.
        #[command(flatten)]
        locale: LocaleArgs,

        /// Arguments passed to `go build`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run the module or files via .pgo_gen
    Run {
        /// Locale selection.
        #[command(flatten)]
        locale: LocaleArgs,

        /// Arguments passed to `go run`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Test the module via .pgo_gen
    Test {
        /// Locale selection.
        #[command(flatten)]
        locale: LocaleArgs,

        /// Arguments passed to `go test`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Remove .pgo_gen
    Clean,

    /// Set the default locale in .pgo_lang
    Set {
        /// Locale name (e.g. bn, es, jp, zh)
        lang: String,
    },

    /// Translate one file between Go and its localized form
    Translate {
        /// File to translate
        file: PathBuf,

        /// Locale selection.
        #[command(flatten)]
        locale: LocaleArgs,

        /// Rewrite the file in place instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Print version
    Version,
}
