//! Client-side navigation through the History API.

use inheritx_core::{Navigator, Route};
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::utils;

/// Pushes routes onto `window.history` and fires `popstate` so the page's
/// router re-renders without a reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryNavigator;

impl HistoryNavigator {
    fn push(route: Route) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| utils::js_error("No window object"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(route.path()))?;
        window.dispatch_event(&Event::new("popstate")?)?;
        Ok(())
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        if let Err(e) = Self::push(route) {
            utils::error(&format!("navigation to {} failed: {:?}", route, e));
        }
    }
}

/// Route for `window.location.pathname`, if it is one we know.
pub fn current_route() -> Option<Route> {
    let path = web_sys::window()?.location().pathname().ok()?;
    Route::from_path(&path)
}
