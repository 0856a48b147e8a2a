//! Routes the platform `window.alert` into the overlay toast.

use beastrealm_core::{OverlayStore, ToastKind};
use std::cell::Cell;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::dom;

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Replace `window.alert` with a call to [`OverlayStore::alert`].
///
/// Only the first successful call installs the override; later calls return
/// `false` and leave it untouched.
pub fn install_alert_override(overlay: &OverlayStore) -> bool {
    if INSTALLED.with(Cell::get) {
        return false;
    }
    let Some(window) = dom::window() else {
        return false;
    };
    let overlay = overlay.clone();
    let handler = Closure::<dyn Fn(JsValue)>::new(move |message: JsValue| {
        overlay.alert(alert_text(&message), ToastKind::Info);
    });
    match js_sys::Reflect::set(&window, &JsValue::from_str("alert"), handler.as_ref()) {
        Ok(_) => {
            handler.forget();
            INSTALLED.with(|installed| installed.set(true));
            log::debug!("window.alert now shows overlay toasts");
            true
        }
        Err(err) => {
            log::warn!(
                "could not override window.alert: {}",
                dom::js_error_message(&err)
            );
            false
        }
    }
}

/// Stringify an `alert` argument the way the platform would.
fn alert_text(value: &JsValue) -> String {
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .or_else(|| value.as_bool().map(|b| b.to_string()))
        .unwrap_or_else(|| dom::js_error_message(value))
}
