//! Durable local snapshot store
//!
//! The browser original kept JSON blobs in local storage under fixed keys;
//! [`SnapshotRepository`] is that surface behind a trait so merge logic can
//! be tested against any backing. Reads and writes are individually atomic
//! but read-modify-write sequences are not: two concurrent updates race and
//! the later write wins. Acceptable for a single-user client; callers that
//! need more must serialize externally.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Storage key of the persisted profile snapshot
pub const PROFILE_KEY: &str = "profile";

/// Storage key of the session token
pub const TOKEN_KEY: &str = "token";

/// Snapshot storage failures
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Underlying file I/O failed
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    /// Stored blob is not valid JSON
    #[error("snapshot encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Key-value store of JSON blobs
pub trait SnapshotRepository: Send + Sync {
    /// Load the blob under `key`, if present
    ///
    /// # Errors
    /// Storage access or decoding failures.
    fn load(&self, key: &str) -> Result<Option<Value>, SnapshotError>;

    /// Store `value` under `key`, replacing any previous blob
    ///
    /// # Errors
    /// Storage access failures.
    fn store(&self, key: &str, value: &Value) -> Result<(), SnapshotError>;

    /// Remove the blob under `key` (absent keys are fine)
    ///
    /// # Errors
    /// Storage access failures.
    fn remove(&self, key: &str) -> Result<(), SnapshotError>;
}

/// In-memory repository for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct InMemorySnapshots {
    blobs: RwLock<HashMap<String, Value>>,
}

impl InMemorySnapshots {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for InMemorySnapshots {
    fn load(&self, key: &str) -> Result<Option<Value>, SnapshotError> {
        Ok(self.blobs.read().get(key).cloned())
    }

    fn store(&self, key: &str, value: &Value) -> Result<(), SnapshotError> {
        self.blobs.write().insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapshotError> {
        self.blobs.write().remove(key);
        Ok(())
    }
}

/// File-backed repository: one pretty-printed JSON file per key
#[derive(Debug)]
pub struct JsonFileSnapshots {
    dir: PathBuf,
}

impl JsonFileSnapshots {
    /// Create a repository rooted at `dir` (created on first store)
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotRepository for JsonFileSnapshots {
    fn load(&self, key: &str) -> Result<Option<Value>, SnapshotError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, key: &str, value: &Value) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapshotError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
