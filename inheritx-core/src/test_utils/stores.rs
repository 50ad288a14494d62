//! Key-value stores that misbehave on purpose.

use crate::storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};

/// A store whose operations fail, like `localStorage` in a locked-down browser.
#[derive(Debug, Default)]
pub struct FailingStore {
    reads_ok: bool,
}

impl FailingStore {
    /// Store where every operation fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads succeed (always empty); writes and removals still fail.
    pub fn fail_writes_only(mut self) -> Self {
        self.reads_ok = true;
        self
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.reads_ok {
            Ok(None)
        } else {
            Err(StorageError::read_failed(key))
        }
    }

    fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::write_failed(key))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Err(StorageError::remove_failed(key))
    }
}

/// A store that keeps its seeded entries and refuses new writes.
///
/// Reads and removals go to an in-memory map, so a caller that clears keys
/// after a failed write can be observed doing so.
#[derive(Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    /// Store seeded with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inner: MemoryStore::with_entries(entries),
        }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::write_failed(key))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }
}
