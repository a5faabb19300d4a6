//! サブコマンドの実行

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use super::{
    Cli,
    CliError,
    Commands,
    LocaleArgs,
};
use crate::config::ConfigManager;
use crate::keymap::Maps;
use crate::transpile::transpile_file;
use crate::workspace::{
    self,
    find_module_root,
    generated_dir,
    map_args_for_generated,
};

/// コマンドを実行する
///
/// # Arguments
/// * `cli` - パース済みのコマンドライン
/// * `cwd` - カレントディレクトリ (モジュールルートの探索起点)
/// * `out` - 標準出力への書き込み先
///
/// # Returns
/// プロセスの終了コード。`go` サブコマンドの場合は `go` の終了コードをそのまま返す
///
/// # Errors
/// - モジュールルートが見つからない
/// - 設定・キーワードマップの読み込みエラー
/// - 生成・変換エラー
/// - `go` の起動に失敗
pub async fn run(cli: Cli, cwd: &Path, out: &mut impl Write) -> Result<ExitCode, CliError> {
    match cli.command {
        Commands::Gen { locale } => {
            let module_root = find_module_root(cwd)?;
            generate(&module_root, locale).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Build { locale, args } => run_go("build", cwd, locale, &args).await,
        Commands::Run { locale, args } => run_go("run", cwd, locale, &args).await,
        Commands::Test { locale, args } => run_go("test", cwd, locale, &args).await,
        Commands::Clean => {
            let module_root = find_module_root(cwd)?;
            if workspace::clean(&module_root).await? {
                tracing::info!("Removed {}", generated_dir(&module_root).display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Set { lang } => {
            let module_root = find_module_root(cwd)?;
            let path = ConfigManager::new(module_root).set_default_locale(&lang)?;
            writeln!(out, "Default locale set to {} in {}", lang.trim(), path.display())
                .map_err(CliError::Output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Translate { file, locale, write } => {
            translate(&cwd.join(file), cwd, locale, write, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            writeln!(out, "pgo {}", env!("CARGO_PKG_VERSION")).map_err(CliError::Output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 設定を解決してキーワードマップを読み込む
fn load_maps(module_root: PathBuf, locale: LocaleArgs) -> Result<(ConfigManager, Maps), CliError> {
    let mut manager = ConfigManager::new(module_root);
    manager.load_settings(locale.into())?;
    let maps = manager.load_maps()?;
    Ok((manager, maps))
}

/// `.pgo_gen` を生成する
///
/// # Returns
/// 生成ディレクトリのパス
async fn generate(module_root: &Path, locale: LocaleArgs) -> Result<PathBuf, CliError> {
    let (manager, maps) = load_maps(module_root.to_path_buf(), locale)?;
    let lang = manager.get_settings().lang.as_deref();

    let summary = workspace::generate(module_root, &maps, lang).await?;
    tracing::info!(
        translated = summary.translated,
        copied = summary.copied,
        skipped = summary.skipped,
        "Generated {}",
        generated_dir(module_root).display()
    );
    Ok(generated_dir(module_root))
}

/// `.pgo_gen` を生成し、その中で `go <subcommand>` を実行する
async fn run_go(subcommand: &str, cwd: &Path, locale: LocaleArgs, args: &[String]) -> Result<ExitCode, CliError> {
    let module_root = find_module_root(cwd)?;
    let gen_dir = generate(&module_root, locale).await?;
    let args = map_args_for_generated(args);
    tracing::debug!("Running go {} {:?} in {:?}", subcommand, args, gen_dir);

    let status = tokio::process::Command::new("go")
        .arg(subcommand)
        .args(&args)
        .current_dir(&gen_dir)
        .status()
        .await
        .map_err(CliError::Go)?;

    Ok(status.code().and_then(|code| u8::try_from(code).ok()).map_or(ExitCode::FAILURE, ExitCode::from))
}

/// 1 ファイルを変換して出力する (`write` の場合はファイルを上書きする)
///
/// キーワードマップはファイルを含むモジュールの設定で解決する。モジュール外のファイルは
/// カレントディレクトリの設定を使う。
fn translate(
    path: &Path,
    cwd: &Path,
    locale: LocaleArgs,
    write: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let module_root = path.parent().and_then(|dir| find_module_root(dir).ok()).unwrap_or_else(|| cwd.to_path_buf());
    let (_, maps) = load_maps(module_root, locale)?;

    let src = std::fs::read(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    let translated = transpile_file(path, &src, &maps)
        .map_err(|source| CliError::Transpile { path: path.to_path_buf(), source })?;

    if write {
        std::fs::write(path, translated).map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
        tracing::info!("Translated {}", path.display());
        return Ok(());
    }
    out.write_all(&translated).map_err(CliError::Output)
}
