//! Wallet session bindings.
//!
//! Wraps the core [`WalletSession`] and its selection modal for the page's
//! connect button, modal component and header address chip.

use std::rc::Rc;

use inheritx_core::wallet::{WalletKit, WalletModal, WalletSession};
use inheritx_core::{KeyValueStore, Navigator};
use wasm_bindgen::prelude::*;

use crate::kit::StellarWalletsKit;
use crate::navigator::HistoryNavigator;
use crate::storage::BrowserStorage;
use crate::utils;

/// Wallet connection state shared by every component on the page.
///
/// # Examples
///
/// ```ignore
/// const wallet = new WasmWalletSession({ wallet: { network: "TESTNET" } });
/// wallet.openModal();
/// wallet.selectWallet("freighter");
/// const address = await wallet.confirm();
/// ```
#[wasm_bindgen]
pub struct WasmWalletSession {
    session: Rc<WalletSession>,
    modal: WalletModal,
}

impl WasmWalletSession {
    /// Build from explicit collaborators.
    pub fn with_parts(
        store: Rc<dyn KeyValueStore>,
        kit: Rc<dyn WalletKit>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let session = Rc::new(WalletSession::new(store, kit, navigator));
        let modal = WalletModal::new(Rc::clone(&session));
        Self { session, modal }
    }
}

#[wasm_bindgen]
impl WasmWalletSession {
    /// Create the session with the browser wallet kit, `localStorage` and
    /// History API navigation. `config` may be `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmWalletSession, JsValue> {
        let config = crate::parse_config(config)?;
        let kit = StellarWalletsKit::new(&config.wallet)?;
        Ok(Self::with_parts(
            Rc::new(BrowserStorage),
            Rc::new(kit),
            Rc::new(HistoryNavigator),
        ))
    }

    /// Current state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        utils::to_js(&self.session.state())
    }

    /// Connected address, if any.
    pub fn address(&self) -> Option<String> {
        self.session.address()
    }

    #[wasm_bindgen(js_name = displayAddress)]
    pub fn display_address(&self) -> String {
        self.session.display_address()
    }

    #[wasm_bindgen(js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        self.session.is_connected()
    }

    #[wasm_bindgen(js_name = isConnecting)]
    pub fn is_connecting(&self) -> bool {
        self.session.is_connecting()
    }

    /// False while the address is a restored, unchecked value.
    #[wasm_bindgen(js_name = isVerified)]
    pub fn is_verified(&self) -> bool {
        self.session.is_verified()
    }

    #[wasm_bindgen(js_name = selectedWalletId)]
    pub fn selected_wallet_id(&self) -> Option<String> {
        self.session.selected_connector_id()
    }

    /// `[{ id, display_name, icon }]` in display order.
    #[wasm_bindgen(js_name = supportedWallets)]
    pub fn supported_wallets(&self) -> Result<JsValue, JsValue> {
        utils::to_js(self.session.supported_wallets())
    }

    #[wasm_bindgen(js_name = isModalOpen)]
    pub fn is_modal_open(&self) -> bool {
        self.session.is_modal_open()
    }

    #[wasm_bindgen(js_name = openModal)]
    pub fn open_modal(&self) {
        self.modal.open();
    }

    #[wasm_bindgen(js_name = closeModal)]
    pub fn close_modal(&self) {
        self.modal.close();
    }

    /// Radio selection in the modal.
    #[wasm_bindgen(js_name = selectWallet)]
    pub fn select_wallet(&self, connector_id: &str) -> Result<(), JsValue> {
        self.modal.select(connector_id).map_err(utils::to_js_error)
    }

    #[wasm_bindgen(js_name = modalSelection)]
    pub fn modal_selection(&self) -> Option<String> {
        self.modal.selection()
    }

    #[wasm_bindgen(js_name = canConfirm)]
    pub fn can_confirm(&self) -> bool {
        self.modal.can_confirm()
    }

    /// Connect with the modal selection. Rejects with the wallet's own error
    /// when the user declines.
    pub async fn confirm(&self) -> Result<String, JsValue> {
        self.modal.confirm().await.map_err(|e| {
            utils::error(&format!("Connection failed: {}", e));
            utils::to_js_error(e)
        })
    }

    /// Connect directly through `connector_id`, bypassing the modal.
    pub async fn connect(&self, connector_id: String) -> Result<String, JsValue> {
        self.session.connect(&connector_id).await.map_err(|e| {
            utils::error(&format!("Connection failed: {}", e));
            utils::to_js_error(e)
        })
    }

    pub fn disconnect(&self) {
        self.session.disconnect();
    }

    /// Call `callback(state)` after every change. Returns an id for
    /// [`WasmWalletSession::unsubscribe`].
    pub fn subscribe(&self, callback: js_sys::Function) -> Result<f64, JsValue> {
        let id = self
            .session
            .subscribe(move |state| utils::notify_js(&callback, state));
        utils::subscription_to_js(id).inspect_err(|_| {
            self.session.unsubscribe(id);
        })
    }

    pub fn unsubscribe(&self, id: f64) -> bool {
        utils::subscription_from_js(id).is_some_and(|id| self.session.unsubscribe(id))
    }
}
