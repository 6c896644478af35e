//! Key-value stores backing the persistence gateway
//!
//! The gateway only needs get/set/remove of string values under a key, so
//! any durable store can sit behind it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{SplitError, SplitResult};

use super::file_io::{read_text, remove_file_if_exists, write_text_atomic};

/// A durable string store addressed by key
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> SplitResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> SplitResult<()>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> SplitResult<()>;
}

/// Stores each key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the store's files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SplitResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> SplitResult<()> {
        write_text_atomic(self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> SplitResult<()> {
        remove_file_if_exists(self.path_for(key))
    }
}

/// In-process store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held
    pub fn len(&self) -> SplitResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.len())
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> SplitResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SplitResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SplitResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SplitResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("budget").unwrap(), None);

        store.set("budget", "one").unwrap();
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("one"));

        store.set("budget", "two").unwrap();
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("two"));

        store.remove("budget").unwrap();
        assert_eq!(store.get("budget").unwrap(), None);

        store.remove("budget").unwrap();
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        exercise(&store);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));
        exercise(&store);
    }

    #[test]
    fn test_file_store_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.set("budget-app-data", "{}").unwrap();
        assert!(temp_dir.path().join("budget-app-data.json").exists());
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
