//! 生成ディレクトリ (`.pgo_gen`) の構築

use std::path::{
    Path,
    PathBuf,
};

use futures::{
    StreamExt,
    TryStreamExt,
    stream,
};
use ignore::WalkBuilder;

use super::naming::{
    is_localized_source,
    localized_output_name,
    should_include_localized,
};
use super::{
    GENERATED_DIR_NAME,
    GenerateSummary,
    WorkspaceError,
};
use crate::keymap::Maps;
use crate::transpile::{
    contains_localized_keywords,
    transpile_file_localized_to_host,
};

/// 走査しないディレクトリ
const SKIPPED_DIRS: [&str; 3] = [GENERATED_DIR_NAME, ".git", "vendor"];

/// 生成ディレクトリのルートにだけコピーするファイル
const MODULE_FILES: [&str; 2] = ["go.mod", "go.sum"];

/// 生成ディレクトリへの持ち込み方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    /// `*.p.go`
    Localized,
    /// `*.go`
    Host,
    /// その他 (そのままコピー)
    Other,
}

/// 生成ディレクトリに持ち込む 1 ファイル
#[derive(Debug)]
struct FileJob {
    /// 元ファイルのパス
    source: PathBuf,
    /// モジュールルートからの相対パス
    rel: PathBuf,
    /// ファイル名から決めた種別
    kind: FileKind,
}

/// 生成ディレクトリのパス
#[must_use]
pub fn generated_dir(module_root: &Path) -> PathBuf {
    module_root.join(GENERATED_DIR_NAME)
}

/// モジュールを `.pgo_gen` に生成する
///
/// 既存の `.pgo_gen` は削除して作り直す。`*.p.go` は Go に変換して `*_p.go` として、
/// それ以外のファイルはそのままコピーする。
///
/// # Arguments
/// * `module_root` - モジュールのルートパス
/// * `maps` - キーワードマップ
/// * `locale` - `examples/` と `testdata/` の絞り込みに使うロケール
///
/// # Errors
/// - ファイル操作エラー
/// - 変換エラー (最初に失敗したファイル)
/// - `*.go` ファイルにローカライズされたキーワードが含まれる
pub async fn generate(
    module_root: &Path,
    maps: &Maps,
    locale: Option<&str>,
) -> Result<GenerateSummary, WorkspaceError> {
    let gen_dir = generated_dir(module_root);
    tracing::debug!(module_root = %module_root.display(), ?locale, "Generating module");

    remove_dir_if_exists(&gen_dir).await?;
    tokio::fs::create_dir_all(&gen_dir).await.map_err(WorkspaceError::io(&gen_dir))?;

    for name in MODULE_FILES {
        copy_if_exists(&module_root.join(name), &gen_dir.join(name)).await?;
    }

    let mut summary = GenerateSummary::default();
    let mut jobs = Vec::new();
    for job in find_files(module_root)? {
        if job.kind == FileKind::Localized && !should_include_localized(&job.rel, locale) {
            tracing::debug!("Skipping {:?} for locale {:?}", job.rel, locale);
            summary.skipped += 1;
            continue;
        }
        jobs.push(job);
    }

    let kinds: Vec<FileKind> = stream::iter(jobs)
        .map(|job| process_file(job, &gen_dir, maps))
        .buffer_unordered(num_cpus::get().max(1))
        .try_collect()
        .await?;

    for kind in kinds {
        if kind == FileKind::Localized {
            summary.translated += 1;
        } else {
            summary.copied += 1;
        }
    }
    tracing::debug!(?summary, "Module generated");
    Ok(summary)
}

/// `.pgo_gen` を削除する
///
/// # Returns
/// 削除した場合は `true`、存在しなかった場合は `false`
pub async fn clean(module_root: &Path) -> Result<bool, WorkspaceError> {
    remove_dir_if_exists(&generated_dir(module_root)).await
}

/// モジュール内の持ち込み対象ファイルをパス順に列挙する
///
/// `.git`、`vendor`、`.pgo_gen` は走査せず、`go.mod` / `go.sum` はルート以外も含めて除外する。
fn find_files(module_root: &Path) -> Result<Vec<FileJob>, WorkspaceError> {
    let walker = WalkBuilder::new(module_root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            entry.depth() == 0
                || !is_dir
                || !SKIPPED_DIRS.iter().any(|name| entry.file_name() == *name)
        })
        .build();

    let mut jobs = Vec::new();
    for result in walker {
        let entry = result?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if MODULE_FILES.iter().any(|name| entry.file_name() == *name) {
            continue;
        }

        let source = entry.into_path();
        let Ok(rel) = source.strip_prefix(module_root).map(Path::to_path_buf) else {
            continue;
        };
        let kind = if is_localized_source(&rel) {
            FileKind::Localized
        } else if rel.extension().is_some_and(|ext| ext == "go") {
            FileKind::Host
        } else {
            FileKind::Other
        };
        jobs.push(FileJob { source, rel, kind });
    }
    Ok(jobs)
}

/// 1 ファイルを変換またはコピーする
async fn process_file(job: FileJob, gen_dir: &Path, maps: &Maps) -> Result<FileKind, WorkspaceError> {
    match job.kind {
        FileKind::Localized => {
            let src = tokio::fs::read(&job.source).await.map_err(WorkspaceError::io(&job.source))?;
            let out = transpile_file_localized_to_host(&job.rel, &src, maps)
                .map_err(|source| WorkspaceError::Transpile { path: job.rel.clone(), source })?;
            let dest = gen_dir.join(localized_output_name(&job.rel));
            create_parent(&dest).await?;
            tokio::fs::write(&dest, out).await.map_err(WorkspaceError::io(&dest))?;
            tracing::debug!("Transpiled {:?} -> {:?}", job.rel, dest);
        }
        FileKind::Host => {
            let src = tokio::fs::read(&job.source).await.map_err(WorkspaceError::io(&job.source))?;
            if contains_localized_keywords(&src, maps) {
                return Err(WorkspaceError::LocalizedKeywordsInHostFile { path: job.rel });
            }
            copy_file(&job.source, &gen_dir.join(&job.rel)).await?;
        }
        FileKind::Other => copy_file(&job.source, &gen_dir.join(&job.rel)).await?,
    }
    Ok(job.kind)
}

/// ディレクトリを削除する。存在しなかった場合は `false`
async fn remove_dir_if_exists(dir: &Path) -> Result<bool, WorkspaceError> {
    match tokio::fs::remove_dir_all(dir).await {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(WorkspaceError::Io { path: dir.to_path_buf(), source }),
    }
}

/// 親ディレクトリを作成する
async fn create_parent(path: &Path) -> Result<(), WorkspaceError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(WorkspaceError::io(parent))?;
    }
    Ok(())
}

/// ファイルをコピーする (パーミッションも引き継ぐ)
async fn copy_file(source: &Path, dest: &Path) -> Result<(), WorkspaceError> {
    create_parent(dest).await?;
    tokio::fs::copy(source, dest).await.map_err(WorkspaceError::io(source))?;
    Ok(())
}

/// 存在する場合だけコピーする
async fn copy_if_exists(source: &Path, dest: &Path) -> Result<(), WorkspaceError> {
    if tokio::fs::try_exists(source).await.map_err(WorkspaceError::io(source))? {
        copy_file(source, dest).await?;
    }
    Ok(())
}
