//! `setTimeout`-backed [`Timer`].

use std::time::Duration;

use async_trait::async_trait;
use inheritx_core::timer::Timer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::utils;

/// Sleeps by awaiting a promise resolved from `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutTimer;

fn timeout_promise(duration: Duration) -> js_sys::Promise {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    js_sys::Promise::new(&mut |resolve, reject| {
        let scheduled = web_sys::window()
            .ok_or_else(|| utils::js_error("No window object"))
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            });
        if let Err(e) = scheduled {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    })
}

#[async_trait(?Send)]
impl Timer for TimeoutTimer {
    async fn sleep(&self, duration: Duration) {
        if let Err(e) = JsFuture::from(timeout_promise(duration)).await {
            utils::warn(&format!("timer unavailable, continuing immediately: {:?}", e));
        }
    }
}
