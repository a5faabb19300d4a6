use std::path::PathBuf;

use thiserror::Error;

use crate::keymap::KeymapError;

/// Environment variables consulted for the locale, in priority order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["PGO_LANG", "POLYGO_LANG", "BGO_LANG"];

/// File at the module root holding the default locale.
pub const DEFAULT_LOCALE_FILE: &str = ".pgo_lang";

/// Directory at the module root holding per-locale maps (`lang/<locale>.json`).
pub const LOCALE_DIR: &str = "lang";

/// Module-level keyword map used when no locale is selected.
pub const MODULE_KEYWORDS_FILE: &str = "keywords.json";

/// Errors of locale resolution and keyword map loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `.pgo_lang` または キーワードマップの読み書きエラー
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// 対象ファイル
        path: PathBuf,
        /// I/O エラー
        #[source]
        source: std::io::Error,
    },

    /// キーワードマップの内容が不正
    #[error("Invalid keyword map: {0}")]
    Keymap(#[from] KeymapError),

    /// 選択されたロケールのマップがない
    #[error("Keyword map for locale '{locale}' not found (module lang/ directory or embedded)")]
    LocaleNotFound {
        /// ロケール名
        locale: String,
    },

    /// `set` で指定されたロケールが利用できない
    #[error("Unknown locale '{locale}' (no module lang/ file or embedded map)")]
    UnknownLocale {
        /// ロケール名
        locale: String,
    },

    /// デフォルトロケールの同梱マップがない
    #[error("No embedded keyword maps found")]
    NoEmbeddedMaps,
}

/// Locale selection for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Selected locale. `None` means the module's `keywords.json` or the default
    /// embedded map, with no locale filtering during generation.
    pub lang: Option<String>,

    /// Explicit keyword map file; takes precedence over `lang` for loading maps.
    pub map_path: Option<PathBuf>,

    /// Accept bare Go keywords in localized sources.
    pub allow_host_keywords: bool,
}
