//! ロケールとキーワードマップの読み込み関数

use std::borrow::Cow;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    DEFAULT_LOCALE_FILE,
    LOCALE_DIR,
    LOCALE_ENV_VARS,
    MODULE_KEYWORDS_FILE,
};
use crate::keymap::embedded;

/// ファイルを読み込む。存在しない場合は `Ok(None)`
fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, ConfigError> {
    match std::fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source }),
    }
}

/// 前後の空白を除き、空なら `None`
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// モジュールの `lang/<locale>.json` のパス
fn locale_map_path(module_root: &Path, locale: &str) -> PathBuf {
    module_root.join(LOCALE_DIR).join(format!("{locale}.json"))
}

/// 使用するロケールを決定する
///
/// 優先順位: `--lang` フラグ、環境変数 (`PGO_LANG`, `POLYGO_LANG`, `BGO_LANG`)、
/// モジュールルートの `.pgo_lang` ファイル
///
/// # Arguments
/// * `flag` - コマンドラインで指定されたロケール
/// * `module_root` - モジュールのルートパス
/// * `env` - 環境変数の参照関数
///
/// # Returns
/// - `Ok(Some(locale))`: ロケールが見つかった
/// - `Ok(None)`: どこにも指定されていない
pub(super) fn resolve_locale(
    flag: Option<&str>,
    module_root: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Option<String>, ConfigError> {
    if let Some(flag) = flag.filter(|flag| !flag.is_empty()) {
        return Ok(Some(flag.to_string()));
    }

    if let Some(locale) = LOCALE_ENV_VARS.iter().find_map(|&name| env(name).as_deref().and_then(non_empty)) {
        tracing::debug!("Locale from environment: {}", locale);
        return Ok(Some(locale));
    }

    let path = module_root.join(DEFAULT_LOCALE_FILE);
    let locale = read_optional(&path)?.and_then(|data| non_empty(&String::from_utf8_lossy(&data)));
    if let Some(locale) = &locale {
        tracing::debug!("Locale from {:?}: {}", path, locale);
    }
    Ok(locale)
}

/// キーワードマップの JSON を取得する
///
/// ロケールが指定されている場合は `<root>/lang/<locale>.json`、なければ同梱マップ。
/// ロケールがない場合は `<root>/keywords.json`、なければ同梱のデフォルトロケール。
///
/// # Errors
/// - ファイル読み込みエラー
/// - ロケールに対応するマップが見つからない
pub(super) fn keyword_map_data(
    module_root: &Path,
    locale: Option<&str>,
) -> Result<Cow<'static, [u8]>, ConfigError> {
    if let Some(locale) = locale {
        if let Some(data) = read_optional(&locale_map_path(module_root, locale))? {
            tracing::debug!("Using module keyword map for locale: {}", locale);
            return Ok(Cow::Owned(data));
        }
        return embedded::keyword_map(locale)
            .map(|data| Cow::Borrowed(data.as_bytes()))
            .ok_or_else(|| ConfigError::LocaleNotFound { locale: locale.to_string() });
    }

    if let Some(data) = read_optional(&module_root.join(MODULE_KEYWORDS_FILE))? {
        tracing::debug!("Using module keywords.json");
        return Ok(Cow::Owned(data));
    }
    embedded::keyword_map(embedded::DEFAULT_LOCALE)
        .map(|data| Cow::Borrowed(data.as_bytes()))
        .ok_or(ConfigError::NoEmbeddedMaps)
}

/// `--map` で指定されたキーワードマップを読み込む
pub(super) fn read_map_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    std::fs::read(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

/// ロケールが利用可能か (モジュールの `lang/` または同梱マップ)
pub(super) fn locale_available(module_root: &Path, locale: &str) -> bool {
    !locale.is_empty()
        && (locale_map_path(module_root, locale).is_file() || embedded::keyword_map(locale).is_some())
}

/// デフォルトロケールを `.pgo_lang` に書き込む
pub(super) fn write_default_locale(module_root: &Path, locale: &str) -> Result<PathBuf, ConfigError> {
    let path = module_root.join(DEFAULT_LOCALE_FILE);
    std::fs::write(&path, format!("{}\n", locale.trim()))
        .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
    Ok(path)
}
