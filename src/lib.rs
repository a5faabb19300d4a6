//! poly-go
//!
//! 各国語のキーワードで書かれた Go ソース (`*.p.go`) を Go に変換するトランスパイラと `pgo` コマンド

pub mod cli;
pub mod config;
pub mod keymap;
pub mod syntax;
pub mod transpile;
pub mod workspace;

mod test_utils;

pub use keymap::Maps;
pub use transpile::{
    TranspileError,
    transpile_file,
    transpile_file_localized_to_host,
};
