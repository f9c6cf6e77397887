use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{CoinwiseError, CoinwiseResult};
use crate::storage::file_io::read_text;

use super::entry::AuditEntry;

/// Append-only JSONL journal shared by every collection
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line
    pub fn append<T: Serialize>(&self, entry: &AuditEntry<T>) -> CoinwiseResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                CoinwiseError::Io(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        file.write_all(line.as_bytes())
            .map_err(|e| CoinwiseError::Io(format!("Failed to append audit entry: {}", e)))
    }

    /// Entries recorded for `collection`, oldest first
    pub fn entries<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> CoinwiseResult<Vec<AuditEntry<T>>> {
        let Some(text) = read_text(&self.path)? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let value: Value = serde_json::from_str(line).map_err(|e| {
                CoinwiseError::Storage(format!("Bad audit line {}: {}", index + 1, e))
            })?;
            if value["collection"] != collection {
                continue;
            }

            let entry = serde_json::from_value(value).map_err(|e| {
                CoinwiseError::Storage(format!("Bad audit line {}: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }
}
