//! Key-value persistence for session state.
//!
//! The front-end keeps everything it persists in a flat string → string
//! store (browser `localStorage`). This module abstracts that store so the
//! session managers can be exercised without a browser:
//!
//! - [`MemoryStore`] for tests and ephemeral sessions
//! - [`FileStore`] for native demos (one JSON document on disk)
//! - `BrowserStorage` in the `inheritx-web` crate for `window.localStorage`
//!
//! ## Usage
//!
//! ```
//! use inheritx_core::storage::{KeyValueStore, KeyValueStoreExt, MemoryStore};
//! use serde_json::json;
//!
//! let store = MemoryStore::new();
//! store.set("inheritx_wallet_id", "freighter").unwrap();
//! store.set_json("adminAuth", &json!({"email": "a@b.com"})).unwrap();
//!
//! assert_eq!(store.get("inheritx_wallet_id").unwrap().as_deref(), Some("freighter"));
//! ```

mod memory;
mod traits;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStore;
pub use traits::{KeyValueStore, KeyValueStoreExt, StorageError, StorageErrorCode, StorageResult};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
