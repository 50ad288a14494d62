//! File-backed key-value store for native demos.
//!
//! All keys live in a single pretty-printed JSON object at
//! `<dir>/storage.json`, mirroring what the browser keeps in `localStorage`.
//! Every call re-reads the file, so two stores pointed at the same
//! directory observe each other's writes.
//!
//! Not suitable for production: no encryption at rest, no atomicity
//! guarantees, no protection against concurrent writers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::traits::{KeyValueStore, StorageError, StorageErrorCode, StorageResult};

const STORAGE_FILE: &str = "storage.json";

/// JSON-file implementation of [`KeyValueStore`].
pub struct FileStore {
    storage_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `storage_dir`. The directory is created on first write.
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing JSON document.
    pub fn data_path(&self) -> PathBuf {
        self.storage_dir.join(STORAGE_FILE)
    }

    fn load_data(&self) -> StorageResult<BTreeMap<String, String>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = std::fs::read_to_string(&path).map_err(|e| {
            StorageError::new(
                StorageErrorCode::ReadFailed,
                format!("Failed to read {}: {}", path.display(), e),
            )
        })?;
        serde_json::from_str(&json).map_err(|e| {
            StorageError::new(
                StorageErrorCode::ReadFailed,
                format!("Corrupt storage file {}: {}", path.display(), e),
            )
        })
    }

    fn save_data(&self, data: &BTreeMap<String, String>) -> StorageResult<()> {
        std::fs::create_dir_all(&self.storage_dir).map_err(|e| {
            StorageError::new(
                StorageErrorCode::Unavailable,
                format!("Failed to create {}: {}", self.storage_dir.display(), e),
            )
        })?;
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| StorageError::new(StorageErrorCode::Internal, e.to_string()))?;
        std::fs::write(self.data_path(), json).map_err(|e| {
            StorageError::new(
                StorageErrorCode::WriteFailed,
                format!("Failed to write {}: {}", self.data_path().display(), e),
            )
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.load_data()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut data = self.load_data()?;
        data.insert(key.to_string(), value.to_string());
        self.save_data(&data)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut data = self.load_data()?;
        if data.remove(key).is_some() {
            self.save_data(&data)?;
        }
        Ok(())
    }
}
