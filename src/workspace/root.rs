//! Module root discovery.

use std::path::{
    Path,
    PathBuf,
};

use super::WorkspaceError;

/// Returns the nearest ancestor of `start` (itself included) containing `go.mod`.
pub fn find_module_root(start: &Path) -> Result<PathBuf, WorkspaceError> {
    start
        .ancestors()
        .find(|dir| dir.join("go.mod").exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| WorkspaceError::ModuleRootNotFound { start: start.to_path_buf() })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// find_module_root: 深い階層から探す
    #[rstest]
    fn test_find_module_root_from_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("go.mod"), "module example.com/demo\n").unwrap();
        let nested = temp_dir.path().join("cmd/app");
        fs::create_dir_all(&nested).unwrap();

        let root = find_module_root(&nested).unwrap();

        assert_eq!(root, temp_dir.path());
    }

    /// find_module_root: 最も近い `go.mod` を選ぶ
    #[rstest]
    fn test_find_module_root_prefers_nearest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("go.mod"), "module outer\n").unwrap();
        let inner = temp_dir.path().join("inner");
        fs::create_dir(&inner).unwrap();
        fs::write(inner.join("go.mod"), "module inner\n").unwrap();

        assert_eq!(find_module_root(&inner).unwrap(), inner);
    }

    /// find_module_root: 見つからない場合
    #[rstest]
    fn test_find_module_root_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("no_module");
        fs::create_dir(&dir).unwrap();

        // A go.mod above the temp dir would be found; only assert the error shape otherwise.
        if let Err(err) = find_module_root(&dir) {
            assert!(matches!(err, WorkspaceError::ModuleRootNotFound { start } if start == dir));
        }
    }
}
