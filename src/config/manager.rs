//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    LocaleSettings,
    loader,
};
use crate::keymap::Maps;

/// モジュール単位のロケール設定を管理する
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: LocaleSettings,

    /// モジュールのルートパス (`go.mod` のあるディレクトリ)
    module_root: PathBuf,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new(module_root: PathBuf) -> Self {
        Self { current_settings: LocaleSettings::default(), module_root }
    }

    /// 設定を読み込む
    ///
    /// `overrides.lang` が空の場合は環境変数、`.pgo_lang` の順にロケールを解決する。
    ///
    /// # Arguments
    /// * `overrides` - コマンドラインで指定された設定
    ///
    /// # Errors
    /// - `.pgo_lang` の読み込みエラー
    pub fn load_settings(&mut self, overrides: LocaleSettings) -> Result<(), ConfigError> {
        self.load_settings_with_env(overrides, |name| std::env::var(name).ok())
    }

    /// 環境変数の参照関数を指定して設定を読み込む
    fn load_settings_with_env(
        &mut self,
        overrides: LocaleSettings,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for module: {:?}", self.module_root);

        let lang = loader::resolve_locale(overrides.lang.as_deref(), &self.module_root, env)?;
        self.current_settings = LocaleSettings { lang, ..overrides };
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定でキーワードマップを読み込む
    ///
    /// # Errors
    /// - マップファイルの読み込みエラー
    /// - ロケールに対応するマップが見つからない
    /// - マップの内容が不正
    pub fn load_maps(&self) -> Result<Maps, ConfigError> {
        let settings = &self.current_settings;
        let maps = if let Some(path) = &settings.map_path {
            tracing::debug!("Loading keyword map from: {:?}", path);
            Maps::load(&loader::read_map_file(path)?, settings.allow_host_keywords)?
        } else {
            let data = loader::keyword_map_data(&self.module_root, settings.lang.as_deref())?;
            Maps::load(&data, settings.allow_host_keywords)?
        };
        Ok(maps)
    }

    /// ロケールが利用可能か
    #[must_use]
    pub fn locale_available(&self, locale: &str) -> bool {
        loader::locale_available(&self.module_root, locale)
    }

    /// デフォルトロケールを `.pgo_lang` に保存する
    ///
    /// # Returns
    /// 書き込んだファイルのパス
    ///
    /// # Errors
    /// - ロケールが利用できない
    /// - ファイル書き込みエラー
    pub fn set_default_locale(&self, locale: &str) -> Result<PathBuf, ConfigError> {
        let locale = locale.trim();
        if !self.locale_available(locale) {
            return Err(ConfigError::UnknownLocale { locale: locale.to_string() });
        }
        loader::write_default_locale(&self.module_root, locale)
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &LocaleSettings {
        &self.current_settings
    }

    /// モジュールルートを取得
    #[must_use]
    pub fn module_root(&self) -> &Path {
        &self.module_root
    }
}
