//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use crate::keymap::{
    Maps,
    embedded,
};

/// 同梱のキーワードマップから `Maps` を作成する
///
/// # Arguments
/// * `locale` - ロケール名（例: "es", "zh"）
/// * `allow_host_keywords` - ローカライズ済みソースで Go のキーワードを許可するか
pub(crate) fn embedded_maps(locale: &str, allow_host_keywords: bool) -> Maps {
    let data = embedded::keyword_map(locale).unwrap();
    Maps::load(data.as_bytes(), allow_host_keywords).unwrap()
}

/// スペイン語の同梱マップ
pub(crate) fn spanish_maps() -> Maps {
    embedded_maps("es", false)
}

/// 中国語の同梱マップ
pub(crate) fn chinese_maps() -> Maps {
    embedded_maps("zh", false)
}

/// ベンガル語の同梱マップ
pub(crate) fn bengali_maps() -> Maps {
    embedded_maps("bn", false)
}

/// 出力バイト列を文字列に変換する
pub(crate) fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}
