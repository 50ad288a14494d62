//! Core traits for key-value persistence.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Error codes for storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StorageErrorCode {
    /// Backing store cannot be reached (no window, no localStorage, ...)
    Unavailable = 1000,
    /// Reading a key failed
    ReadFailed = 2000,
    /// Writing a key failed
    WriteFailed = 2001,
    /// Removing a key failed
    RemoveFailed = 2002,
    /// Storage quota exceeded
    QuotaExceeded = 3000,
    /// Internal error
    Internal = 9999,
}

/// Error type for storage operations.
#[derive(Debug)]
pub struct StorageError {
    /// Error code
    pub code: StorageErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Key related to the error (if applicable)
    pub key: Option<String>,
}

impl StorageError {
    /// Create a new error.
    pub fn new(code: StorageErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            key: None,
        }
    }

    /// Create a new error with the key it relates to.
    pub fn with_key(
        code: StorageErrorCode,
        message: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Create an "unavailable" error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(StorageErrorCode::Unavailable, reason)
    }

    /// Create a "read failed" error for a key.
    pub fn read_failed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            code: StorageErrorCode::ReadFailed,
            message: format!("Failed to read {}", key),
            key: Some(key),
        }
    }

    /// Create a "write failed" error for a key.
    pub fn write_failed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            code: StorageErrorCode::WriteFailed,
            message: format!("Failed to write {}", key),
            key: Some(key),
        }
    }

    /// Create a "remove failed" error for a key.
    pub fn remove_failed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            code: StorageErrorCode::RemoveFailed,
            message: format!("Failed to remove {}", key),
            key: Some(key),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.key {
            write!(f, "{} (key: {})", self.message, key)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Flat string → string persistence, shaped after browser `localStorage`.
///
/// Calls are synchronous and assumed non-blocking. Removing a key that does
/// not exist is not an error.
pub trait KeyValueStore {
    /// Read a value; `None` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Extension trait for JSON-encoded values.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and decode a JSON value.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> crate::Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode and write a JSON value.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> crate::Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)?;
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
