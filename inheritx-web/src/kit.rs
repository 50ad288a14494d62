//! Binding to the `@creit.tech/stellar-wallets-kit` npm package.
//!
//! The kit owns every wallet-specific detail (extension popups, Albedo's web
//! flow, ...). We only create it, pick the active module and ask for the
//! account address.

use async_trait::async_trait;
use inheritx_core::wallet::{ModuleSelection, WalletKit, WalletKitConfig, WalletKitError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "@creit.tech/stellar-wallets-kit")]
extern "C" {
    #[wasm_bindgen(js_name = StellarWalletsKit)]
    type JsStellarWalletsKit;

    #[wasm_bindgen(constructor, catch, js_class = "StellarWalletsKit")]
    fn new(params: &JsValue) -> Result<JsStellarWalletsKit, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setWallet)]
    fn set_wallet(this: &JsStellarWalletsKit, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = getAddress)]
    async fn get_address(this: &JsStellarWalletsKit) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = allowAllModules)]
    fn allow_all_modules() -> js_sys::Array;
}

fn get_field(target: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Convert whatever the kit threw into a [`WalletKitError`].
///
/// The kit rejects with `Error` instances or plain `{ code, message }`
/// objects depending on the wallet module.
pub fn kit_error(value: JsValue) -> WalletKitError {
    if let Some(message) = value.as_string() {
        return WalletKitError::new(message);
    }

    let message = get_field(&value, "message")
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "Unknown wallet error".to_string());
    match get_field(&value, "code").and_then(|c| c.as_f64()) {
        Some(code) => WalletKitError::with_code(code as i32, message),
        None => WalletKitError::new(message),
    }
}

fn modules_for(selection: &ModuleSelection) -> js_sys::Array {
    let all = allow_all_modules();
    match selection {
        ModuleSelection::AllowAll => all,
        ModuleSelection::Only(_) => all
            .iter()
            .filter(|module| {
                get_field(module, "productId")
                    .and_then(|id| id.as_string())
                    .is_some_and(|id| selection.includes(&id))
            })
            .collect(),
    }
}

fn kit_params(config: &WalletKitConfig) -> Result<JsValue, JsValue> {
    let params = js_sys::Object::new();
    js_sys::Reflect::set(
        &params,
        &JsValue::from_str("network"),
        &JsValue::from_str(config.network.passphrase()),
    )?;
    js_sys::Reflect::set(
        &params,
        &JsValue::from_str("selectedWalletId"),
        &JsValue::from_str(&config.selected_wallet_id),
    )?;
    js_sys::Reflect::set(
        &params,
        &JsValue::from_str("modules"),
        &modules_for(&config.modules),
    )?;
    Ok(params.into())
}

/// [`WalletKit`] backed by a `StellarWalletsKit` instance.
pub struct StellarWalletsKit {
    inner: JsStellarWalletsKit,
}

impl StellarWalletsKit {
    /// Create the kit. Fails if the npm module throws during construction.
    pub fn new(config: &WalletKitConfig) -> Result<Self, JsValue> {
        let params = kit_params(config)?;
        let inner = JsStellarWalletsKit::new(&params)?;
        Ok(Self { inner })
    }
}

#[async_trait(?Send)]
impl WalletKit for StellarWalletsKit {
    fn set_active_connector(&self, connector_id: &str) -> Result<(), WalletKitError> {
        self.inner.set_wallet(connector_id).map_err(kit_error)
    }

    async fn request_address(&self) -> Result<String, WalletKitError> {
        let response = self.inner.get_address().await.map_err(kit_error)?;
        get_field(&response, "address")
            .and_then(|a| a.as_string())
            .ok_or_else(|| WalletKitError::new("wallet returned no address"))
    }
}
