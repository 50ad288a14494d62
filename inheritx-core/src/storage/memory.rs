//! In-memory key-value store.
//!
//! Used by tests and for sessions that should not outlive the process.
//! Lock poisoning is reported as an error rather than a panic.

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::{KeyValueStore, StorageError, StorageErrorCode, StorageResult};

fn lock_error(context: &str) -> StorageError {
    StorageError::new(
        StorageErrorCode::Internal,
        format!("MemoryStore: lock poisoned during {}", context),
    )
}

/// In-memory implementation of [`KeyValueStore`].
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the store is empty. Returns true if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|e| e.contains_key(key))
            .unwrap_or(false)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| lock_error("get"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_error("set"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_error("remove"))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KeyValueStoreExt;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        email: String,
    }

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("inheritx_wallet_id", "albedo").unwrap();
        assert_eq!(
            store.get("inheritx_wallet_id").unwrap(),
            Some("albedo".to_string())
        );
        assert_eq!(store.len(), 1);

        store.remove("inheritx_wallet_id").unwrap();
        assert_eq!(store.get("inheritx_wallet_id").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("never-written").is_ok());
        assert!(store.remove("never-written").is_ok());
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        let profile = Profile {
            email: "a@b.com".to_string(),
        };
        store.set_json("adminAuth", &profile).unwrap();

        assert_eq!(
            store.get("adminAuth").unwrap().as_deref(),
            Some(r#"{"email":"a@b.com"}"#)
        );
        let loaded: Option<Profile> = store.get_json("adminAuth").unwrap();
        assert_eq!(loaded, Some(profile));
    }

    #[test]
    fn test_get_json_rejects_garbage() {
        let store = MemoryStore::with_entries([("adminAuth", "not json")]);
        let loaded: crate::Result<Option<Profile>> = store.get_json("adminAuth");
        assert!(loaded.is_err());
    }
}
