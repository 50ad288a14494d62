#![cfg(target_arch = "wasm32")]
//! InheritX Web - WebAssembly bindings
//!
//! This crate exposes the `inheritx-core` session managers to the browser
//! front-end: wallet connection through `@creit.tech/stellar-wallets-kit`,
//! the admin login stub and route guard, and the plan table filter. State
//! is persisted in `window.localStorage`.

use inheritx_core::{InheritxConfig, Route};
use wasm_bindgen::prelude::*;

mod admin;
mod kit;
mod navigator;
mod plans;
mod storage;
mod timer;
mod utils;
mod wallet;

pub use admin::WasmAdminSession;
pub use kit::{kit_error, StellarWalletsKit};
pub use navigator::{current_route, HistoryNavigator};
pub use plans::WasmPlanListView;
pub use storage::BrowserStorage;
pub use timer::TimeoutTimer;
pub use wallet::WasmWalletSession;

/// Initialize the WASM module
///
/// This should be called once when the module is loaded.
#[wasm_bindgen(start)]
pub fn init() {
    utils::log("InheritX WASM module initialized");
}

/// Get the version of the InheritX WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Shorten an address to `GABC...WXYZ`.
#[wasm_bindgen(js_name = formatAddress)]
pub fn format_address(address: &str) -> String {
    inheritx_core::format_address(address)
}

/// Whether `path` is an admin-only page.
#[wasm_bindgen(js_name = routeRequiresAdmin)]
pub fn route_requires_admin(path: &str) -> bool {
    Route::from_path(path).is_some_and(|r| r.requires_admin())
}

/// Parse the optional JS config object; `undefined`/`null` mean defaults.
pub(crate) fn parse_config(config: JsValue) -> Result<InheritxConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(InheritxConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| utils::js_error(&format!("Invalid config: {}", e)))
}
