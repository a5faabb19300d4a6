//! Locale resolution and keyword-map loading.
mod loader;
mod manager;
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    DEFAULT_LOCALE_FILE,
    LOCALE_DIR,
    LOCALE_ENV_VARS,
    LocaleSettings,
    MODULE_KEYWORDS_FILE,
};
