//! Key-value storage for user record lists.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::UserRecord;

/// Failures reading or writing a key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The backing file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The stored list is not valid JSON for user records.
    #[error("malformed records in {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be encoded.
    #[error("failed to encode records for '{key}': {source}")]
    Encode {
        /// Key being written.
        key: String,
        /// Underlying encode error.
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed store of user record lists.
///
/// Missing keys read as an empty list.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Loads the list stored under `key`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Vec<UserRecord>, StoreError>;

    /// Replaces the list stored under `key`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn put(&mut self, key: &str, records: Vec<UserRecord>) -> Result<(), StoreError>;
}

/// Process-local store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<UserRecord>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with `records` already under `key`.
    #[must_use]
    pub fn with_records(key: impl Into<String>, records: Vec<UserRecord>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), records);
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn put(&mut self, key: &str, records: Vec<UserRecord>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), records);
        Ok(())
    }
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// A store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file backing `key`. Characters outside `[A-Za-z0-9_-]` become `_`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{file_stem}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Vec<UserRecord>, StoreError> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored records yet");
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Parse { path, source })
    }

    fn put(&mut self, key: &str, records: Vec<UserRecord>) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let serialized = serde_json::to_string_pretty(&records).map_err(|source| {
            StoreError::Encode {
                key: key.to_string(),
                source,
            }
        })?;

        fs::create_dir_all(&self.root).map_err(|source| StoreError::Write {
            path: self.root.clone(),
            source,
        })?;
        fs::write(&path, serialized).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), count = records.len(), "stored records");
        Ok(())
    }
}
