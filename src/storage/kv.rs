//! Key/value persistence backends
//!
//! The record stores only need a durable map from a fixed key to a string.
//! `MemoryStore` keeps it in process; `FileStore` keeps one JSON file per key.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CoinwiseError, CoinwiseResult};

use super::file_io::{read_text, write_text_atomic};

/// A durable key/string-value store
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if nothing was stored yet
    fn get(&self, key: &str) -> CoinwiseResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> CoinwiseResult<()>;
}

/// In-memory store, useful for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CoinwiseResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| CoinwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoinwiseResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| CoinwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: each key maps to `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> CoinwiseResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CoinwiseError::Storage(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CoinwiseResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> CoinwiseResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }
}
