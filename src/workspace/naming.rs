//! ファイル名の規約
//!
//! ローカライズされたソースは `*.p.go`、生成される Go ファイルは `*_p.go`。

use std::ffi::OsStr;
use std::path::{
    Component,
    Path,
    PathBuf,
};

/// ローカライズされたソースの拡張子
pub const LOCALIZED_SUFFIX: &str = ".p.go";

/// 生成された Go ファイルの接尾辞
pub const GENERATED_SUFFIX: &str = "_p.go";

/// ロケールで絞り込む対象のディレクトリ名
const SAMPLE_DIRS: [&str; 2] = ["examples", "testdata"];

/// パスのファイル名 (UTF-8 でない場合は `None`)
fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(OsStr::to_str)
}

/// `*.p.go` ファイルか
#[must_use]
pub fn is_localized_source(path: &Path) -> bool {
    file_name(path).is_some_and(|name| name.ends_with(LOCALIZED_SUFFIX))
}

/// `foo.p.go` を `foo_p.go` に置き換えたパスを返す
#[must_use]
pub fn localized_output_name(rel: &Path) -> PathBuf {
    match file_name(rel).and_then(|name| name.strip_suffix(LOCALIZED_SUFFIX)) {
        Some(stem) => rel.with_file_name(format!("{stem}{GENERATED_SUFFIX}")),
        None => rel.to_path_buf(),
    }
}

/// `go` コマンドに渡す引数の `*.p.go` を生成後の名前に置き換える
#[must_use]
pub fn map_args_for_generated(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            arg.strip_suffix(LOCALIZED_SUFFIX)
                .map_or_else(|| arg.clone(), |stem| format!("{stem}{GENERATED_SUFFIX}"))
        })
        .collect()
}

/// ロケール指定時に `*.p.go` を生成対象に含めるか
///
/// `examples/` と `testdata/` の下では、パスにロケール名のディレクトリを含むか、
/// ファイル名が `<locale>.` または `<locale>_` で始まるものだけを含める。
/// それ以外の場所のファイルは常に含める。
#[must_use]
pub fn should_include_localized(rel: &Path, locale: Option<&str>) -> bool {
    let Some(locale) = locale.filter(|locale| !locale.is_empty()) else {
        return true;
    };

    let mut in_samples = false;
    for component in rel.components() {
        let Component::Normal(part) = component else {
            continue;
        };
        if part == locale {
            return true;
        }
        if SAMPLE_DIRS.iter().any(|dir| part == *dir) {
            in_samples = true;
        }
    }
    if !in_samples {
        return true;
    }

    file_name(rel).and_then(|name| name.strip_prefix(locale)).is_some_and(|rest| {
        rest.starts_with('.') || rest.starts_with('_')
    })
}
