use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::path::PathBuf;

/// Filesystem storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(self.resolve(path)).map_err(|source| EtlError::io(path, source))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| EtlError::io(path, source))?;
        }

        fs::write(&full_path, data).map_err(|source| EtlError::io(path, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("nested/out.json", b"[]").unwrap();
        assert!(storage.exists("nested/out.json"));
        assert_eq!(storage.read_file("nested/out.json").unwrap(), b"[]");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(!storage.exists("missing.json"));
        let err = storage.read_file("missing.json").unwrap_err();
        assert!(matches!(err, EtlError::Io { .. }));
    }

    #[test]
    fn test_absolute_paths_ignore_base() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("abs.json");
        let storage = LocalStorage::new("/nonexistent-base");

        storage
            .write_file(absolute.to_str().unwrap(), b"{}")
            .unwrap();
        assert!(Path::new(&absolute).exists());
    }
}
