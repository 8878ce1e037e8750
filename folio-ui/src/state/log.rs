//! Console logging
//!
//! The browser has no tracing subscriber; messages go straight to the
//! developer console.

use wasm_bindgen::JsValue;

pub fn info(message: &str) {
    web_sys::console::info_1(&JsValue::from_str(message));
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

pub fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
