//! バイナリに同梱されたロケール別のキーワードマップ

use std::collections::HashMap;
use std::sync::LazyLock;

/// ロケール未指定時に使うロケール
pub const DEFAULT_LOCALE: &str = "bn";

/// ロケール名から同梱 JSON へのマップ
static KEYWORD_MAPS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("bn", include_str!("../../lang/bn.json")),
        ("es", include_str!("../../lang/es.json")),
        ("jp", include_str!("../../lang/jp.json")),
        ("zh", include_str!("../../lang/zh.json")),
    ]
    .into_iter()
    .collect()
});

/// 同梱されたキーワードマップの JSON を取得する
///
/// 空文字列は [`DEFAULT_LOCALE`] として扱う。
#[must_use]
pub fn keyword_map(locale: &str) -> Option<&'static str> {
    let locale = if locale.is_empty() { DEFAULT_LOCALE } else { locale };
    KEYWORD_MAPS.get(locale).copied()
}

/// 同梱されたロケール名をソートして返す
#[must_use]
pub fn locales() -> Vec<&'static str> {
    let mut names: Vec<_> = KEYWORD_MAPS.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::keymap::Maps;

    /// locales: ロケール名の昇順
    #[rstest]
    fn test_locales_are_sorted() {
        assert_eq!(locales(), vec!["bn", "es", "jp", "zh"]);
    }

    /// keyword_map: 空のロケールはデフォルト
    #[rstest]
    fn test_empty_locale_falls_back_to_default() {
        assert_that!(keyword_map(""), eq(keyword_map(DEFAULT_LOCALE)));
        assert_that!(keyword_map("").is_some(), eq(true));
    }

    /// keyword_map: 未知のロケール
    #[rstest]
    fn test_unknown_locale() {
        assert_that!(keyword_map("xx"), none());
    }

    /// 同梱マップはすべて読み込めて、`chan` の訳語を持つ
    #[rstest]
    #[case::bengali("bn", "চ্যানেল")]
    #[case::spanish("es", "canal")]
    #[case::japanese("jp", "チャネル")]
    #[case::chinese("zh", "通道")]
    fn test_embedded_maps_load(#[case] locale: &str, #[case] channel: &str) {
        let maps = Maps::load(keyword_map(locale).unwrap().as_bytes(), false).unwrap();

        assert_that!(maps.channel_keyword(), some(eq(channel)));
        assert_that!(maps.local_keyword("si").is_some(), eq(locale == "es"));
    }
}
