//! Utility functions for WASM

use inheritx_core::observe::SubscriptionId;
use inheritx_core::InheritxError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Log a message to the browser console
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub fn error(s: &str);
}

/// Convert a JS error into a Result
pub fn js_error(msg: &str) -> JsValue {
    js_sys::Error::new(msg).into()
}

/// Convert an [`InheritxError`] into a JS `Error` carrying a numeric `code`.
pub fn to_js_error(err: InheritxError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    // Reflect::set only fails on frozen objects; a fresh Error is not frozen.
    let _ = js_sys::Reflect::set(
        &js_err,
        &JsValue::from_str("code"),
        &JsValue::from(err.code() as i32),
    );
    js_err.into()
}

/// Serialize a value for JavaScript with plain objects instead of `Map`s.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| js_error(&format!("Serialization error: {}", e)))
}

/// Call a JS listener with a serialized state snapshot, logging failures.
pub fn notify_js<T: Serialize>(callback: &js_sys::Function, state: &T) {
    let result = to_js(state).and_then(|value| callback.call1(&JsValue::NULL, &value));
    if let Err(e) = result {
        error(&format!("state listener failed: {:?}", e));
    }
}

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Hand a subscription id to JavaScript as a plain number.
pub fn subscription_to_js(id: SubscriptionId) -> Result<f64, JsValue> {
    let raw = id.as_u64();
    if raw > MAX_SAFE_INTEGER {
        return Err(js_error("subscription id out of range"));
    }
    Ok(raw as f64)
}

/// Read back a number produced by [`subscription_to_js`]. Anything else,
/// including fractions and `NaN`, is `None`.
pub fn subscription_from_js(raw: f64) -> Option<SubscriptionId> {
    if raw.fract() != 0.0 || !(0.0..=MAX_SAFE_INTEGER as f64).contains(&raw) {
        return None;
    }
    Some(SubscriptionId::from(raw as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_subscription_ids_round_trip_past_u32() {
        let big = SubscriptionId::from(u64::from(u32::MAX) + 7);
        let raw = subscription_to_js(big).unwrap();
        assert_eq!(raw, 4_294_967_302.0);
        assert_eq!(subscription_from_js(raw), Some(big));

        let max = SubscriptionId::from(MAX_SAFE_INTEGER);
        assert_eq!(subscription_from_js(subscription_to_js(max).unwrap()), Some(max));
        assert!(subscription_to_js(SubscriptionId::from(MAX_SAFE_INTEGER + 1)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_foreign_numbers_are_not_ids() {
        assert_eq!(subscription_from_js(1.5), None);
        assert_eq!(subscription_from_js(-1.0), None);
        assert_eq!(subscription_from_js(f64::NAN), None);
        assert_eq!(subscription_from_js(f64::INFINITY), None);
        assert_eq!(subscription_from_js(0.0), Some(SubscriptionId::from(0)));
    }
}
