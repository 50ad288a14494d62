//! `window.localStorage` as a [`KeyValueStore`].

use inheritx_core::storage::{KeyValueStore, StorageError, StorageErrorCode, StorageResult};
use inheritx_core::{ADMIN_AUTH_KEY, WALLET_ADDRESS_KEY, WALLET_ID_KEY};
use wasm_bindgen::prelude::*;
use web_sys::{Storage, Window};

use crate::utils;

/// Get browser's localStorage
fn get_local_storage() -> StorageResult<Storage> {
    let window: Window =
        web_sys::window().ok_or_else(|| StorageError::unavailable("No window object"))?;
    window
        .local_storage()
        .map_err(|_| StorageError::unavailable("Could not access localStorage"))?
        .ok_or_else(|| StorageError::unavailable("localStorage is not available"))
}

fn write_error(key: &str, err: &JsValue) -> StorageError {
    let name = js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|n| n.as_string());
    if name.as_deref() == Some("QuotaExceededError") {
        StorageError::with_key(
            StorageErrorCode::QuotaExceeded,
            "localStorage quota exceeded",
            key,
        )
    } else {
        StorageError::write_failed(key)
    }
}

/// Storage manager for browser localStorage
///
/// Looks up `localStorage` on every call, so a page whose storage becomes
/// unavailable (private mode, quota, policy) reports errors instead of
/// failing at construction.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[wasm_bindgen]
impl BrowserStorage {
    /// Create a new browser storage manager
    #[wasm_bindgen(constructor)]
    pub fn new() -> BrowserStorage {
        BrowserStorage
    }

    /// Whether localStorage can be reached at all
    #[wasm_bindgen(js_name = isAvailable)]
    pub fn is_available(&self) -> bool {
        get_local_storage().is_ok()
    }

    /// Remove every key the InheritX sessions persist
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&self) -> Result<(), JsValue> {
        for key in [ADMIN_AUTH_KEY, WALLET_ADDRESS_KEY, WALLET_ID_KEY] {
            self.remove(key)
                .map_err(|e| utils::js_error(&e.to_string()))?;
        }
        Ok(())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        get_local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::read_failed(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| write_error(key, &e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::remove_failed(key))
    }
}
