// src/storage/file_store.rs
//
// File-backed key-value store
//
// Each key maps to `{root}/{key}.json`. The root directory is created on
// construction.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::KeyValueStore;
use crate::error::{AppError, AppResult};

pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys are restricted to `[A-Za-z0-9_-]` so they cannot escape the root
    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(AppError::Storage(format!("Invalid storage key `{}`", key)));
        }

        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!("Read {} bytes from {}", value.len(), path.display());
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        // Write then rename so a crash never leaves a truncated value behind
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(store.get_item("rockets-data").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_and_survives_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let store = FileKeyValueStore::open(dir.path()).unwrap();
            store.set_item("rockets-data", "[1]").unwrap();
            store.set_item("rockets-data", "[2]").unwrap();
        }

        let reopened = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get_item("rockets-data").unwrap().as_deref(), Some("[2]"));
        assert!(dir.path().join("rockets-data.json").exists());
        assert!(!dir.path().join("rockets-data.json.tmp").exists());
    }

    #[test]
    fn test_open_creates_nested_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("a").join("b");
        let store = FileKeyValueStore::open(&root).unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn test_path_traversal_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set_item("../escape", "x"),
            Err(AppError::Storage(_))
        ));
        assert!(store.get_item("").is_err());
    }
}
