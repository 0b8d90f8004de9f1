//! Durable named-entry storage backing the watchlist.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Synchronous key/value storage for small serialized entries.
pub trait Storage: Send + Sync {
    /// Read the raw value for `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the raw value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each entry as `<key>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the entries.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;

        // Entries are replaced atomically.
        let path = self.entry_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Process-local storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory storage pre-seeded with one raw entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("coindeck-storage-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "[\"bitcoin\"]").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("[\"bitcoin\"]"));
    }

    #[test]
    fn test_file_storage_missing_entry() {
        let storage = FileStorage::new(temp_root("missing"));
        assert_eq!(storage.get("starredCoins").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let root = temp_root("create").join("nested");
        let storage = FileStorage::new(&root);

        storage.set("starredCoins", "[]").unwrap();
        assert!(root.join("starredCoins.json").exists());
        assert_eq!(storage.get("starredCoins").unwrap().as_deref(), Some("[]"));

        std::fs::remove_dir_all(temp_root("create")).ok();
    }

    #[test]
    fn test_file_storage_overwrites() {
        let root = temp_root("overwrite");
        let storage = FileStorage::new(&root);

        storage.set("starredCoins", "[\"a\"]").unwrap();
        storage.set("starredCoins", "[\"b\"]").unwrap();
        assert_eq!(storage.get("starredCoins").unwrap().as_deref(), Some("[\"b\"]"));

        std::fs::remove_dir_all(&root).ok();
    }
}
