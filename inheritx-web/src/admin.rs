//! Admin session bindings for the login form, sidebar and guarded pages.

use std::rc::Rc;

use inheritx_core::admin::{AdminAuthenticator, AdminGate, AdminSession, DemoAuthenticator};
use inheritx_core::{KeyValueStore, Navigator, Route};
use wasm_bindgen::prelude::*;

use crate::navigator::{current_route, HistoryNavigator};
use crate::storage::BrowserStorage;
use crate::timer::TimeoutTimer;
use crate::utils;

/// Admin login state plus the guard for `/admin` pages.
#[wasm_bindgen]
pub struct WasmAdminSession {
    session: Rc<AdminSession>,
    gate: Rc<AdminGate>,
}

impl WasmAdminSession {
    /// Build from explicit collaborators.
    pub fn with_parts(
        store: Rc<dyn KeyValueStore>,
        authenticator: Rc<dyn AdminAuthenticator>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let gate = AdminGate::new(Rc::clone(&navigator));
        Self {
            session: Rc::new(AdminSession::new(store, authenticator, navigator)),
            gate,
        }
    }
}

#[wasm_bindgen]
impl WasmAdminSession {
    /// Create the session with `localStorage`, the demo authenticator and
    /// History API navigation. Call `restore()` once mounted.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmAdminSession, JsValue> {
        let config = crate::parse_config(config)?;
        let authenticator = DemoAuthenticator::from_config(Rc::new(TimeoutTimer), &config.admin);
        Ok(Self::with_parts(
            Rc::new(BrowserStorage),
            Rc::new(authenticator),
            Rc::new(HistoryNavigator),
        ))
    }

    /// Read the persisted login. Only the first call does anything.
    pub fn restore(&self) {
        self.session.restore();
    }

    /// Current state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        utils::to_js(&self.session.state())
    }

    #[wasm_bindgen(js_name = isAuthenticated)]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    #[wasm_bindgen(js_name = adminEmail)]
    pub fn admin_email(&self) -> Option<String> {
        self.session.admin().map(|a| a.email)
    }

    /// Log in and go to `/admin`. Rejects with `"Email and password are
    /// required"` (code 1000) when a field is empty.
    pub async fn login(&self, email: String, password: String) -> Result<(), JsValue> {
        self.session
            .login(&email, &password)
            .await
            .map_err(utils::to_js_error)
    }

    /// Log out and go to `/`.
    pub fn logout(&self) {
        self.session.logout();
    }

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

    /// Guard the current page and return `"loading"`, `"redirecting"` or
    /// `"authorized"`. Call on every render of the layout; the redirect to
    /// `/admin/login` fires once per transition. Pages that are not
    /// admin-only are always `"authorized"`.
    pub fn guard(&self) -> String {
        self.guard_route(current_route())
    }

    /// Guard a specific path instead of `location.pathname`.
    #[wasm_bindgen(js_name = guardPath)]
    pub fn guard_path(&self, path: &str) -> String {
        self.guard_route(Route::from_path(path))
    }

    fn guard_route(&self, route: Option<Route>) -> String {
        match route {
            Some(route) if route.requires_admin() => self
                .gate
                .evaluate(&self.session.state())
                .as_str()
                .to_string(),
            _ => {
                self.gate.reset();
                "authorized".to_string()
            }
        }
    }
}
