//! `testdata/` のゴールデンファイルによる変換テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use googletest::prelude::*;
use poly_go::keymap::{
    Maps,
    embedded,
};
use poly_go::{
    transpile_file,
    transpile_file_localized_to_host,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// リポジトリの `testdata/` ディレクトリ
fn testdata() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// 同梱のキーワードマップ
fn maps(locale: &str) -> Maps {
    Maps::load(embedded::keyword_map(locale).unwrap().as_bytes(), false).unwrap()
}

/// 行末の空白の違いは無視する
fn normalize(text: &[u8]) -> String {
    String::from_utf8(text.to_vec())
        .unwrap()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// ローカライズ版が期待する Go に変換される
#[rstest]
#[case::bengali("bn")]
#[case::spanish("es")]
#[case::japanese("jp")]
#[case::chinese("zh")]
fn test_feature_matches_expected(#[case] locale: &str) {
    let dir = testdata().join("features").join(locale);
    let src = fs::read(dir.join("main.p.go")).unwrap();
    let expected = fs::read(dir.join(".expected/main_p.go")).unwrap();
    let maps = maps(locale);

    let out = transpile_file(&dir.join("main.p.go"), &src, &maps).unwrap();
    assert_eq!(normalize(&out), normalize(&expected));

    let strict = transpile_file_localized_to_host(&dir.join("main.p.go"), &src, &maps).unwrap();
    assert_eq!(normalize(&strict), normalize(&expected));
}

/// Go -> ローカライズ -> Go で元に戻る
#[rstest]
#[case::bengali("bn")]
#[case::spanish("es")]
#[case::japanese("jp")]
#[case::chinese("zh")]
fn test_template_round_trip(#[case] locale: &str) {
    let path = testdata().join("template.go");
    let template = fs::read(&path).unwrap();
    let maps = maps(locale);

    let localized = transpile_file(&path, &template, &maps).unwrap();
    let localized_text = String::from_utf8(localized.clone()).unwrap();
    let back = transpile_file(&path, &localized, &maps).unwrap();

    assert_that!(localized_text.as_str(), not(contains_substring("func main")));
    assert_eq!(normalize(&back), normalize(&template));
}

/// 同梱ロケールごとに `testdata/features/<locale>` がある
#[rstest]
fn test_every_embedded_locale_has_a_feature() {
    let features: Vec<String> = fs::read_dir(testdata().join("features"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();

    assert_eq!(features, embedded::locales());
}

/// ローカライズ -> Go -> ローカライズで元に戻る
#[rstest]
#[case::bengali("bn")]
#[case::spanish("es")]
#[case::japanese("jp")]
#[case::chinese("zh")]
fn test_feature_round_trip(#[case] locale: &str) {
    let path = testdata().join("features").join(locale).join("main.p.go");
    let src = fs::read(&path).unwrap();
    let maps = maps(locale);

    let host = transpile_file(&path, &src, &maps).unwrap();
    let back = transpile_file(&path, &host, &maps).unwrap();

    assert_eq!(normalize(&back), normalize(&src));
}

/// `testdata/features/<locale>` は `testdata/template.go` から生成されたものと一致する
///
/// `PGO_REGENERATE_FEATURES` を設定して実行すると、テンプレートから書き直す。
#[rstest]
#[case::bengali("bn")]
#[case::spanish("es")]
#[case::japanese("jp")]
#[case::chinese("zh")]
fn test_features_are_generated_from_template(#[case] locale: &str) {
    let template_path = testdata().join("template.go");
    let template = fs::read(&template_path).unwrap();
    let localized = transpile_file(&template_path, &template, &maps(locale)).unwrap();
    let dir = testdata().join("features").join(locale);

    if std::env::var_os("PGO_REGENERATE_FEATURES").is_some() {
        fs::create_dir_all(dir.join(".expected")).unwrap();
        fs::write(dir.join("main.p.go"), &localized).unwrap();
        fs::write(dir.join(".expected/main_p.go"), &template).unwrap();
    }

    assert_eq!(normalize(&fs::read(dir.join("main.p.go")).unwrap()), normalize(&localized));
    assert_eq!(normalize(&fs::read(dir.join(".expected/main_p.go")).unwrap()), normalize(&template));
}
