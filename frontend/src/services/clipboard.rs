//! Copy text through the asynchronous Clipboard API.
//!
//! Accessed via reflection so the build does not depend on web-sys's
//! clipboard bindings.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let navigator = gloo_utils::window().navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| format!("Clipboard unavailable: {:?}", e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("Clipboard unavailable".to_string());
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| format!("Clipboard unavailable: {:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "Clipboard cannot write text".to_string())?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("Copy failed: {:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "Copy failed: no promise returned".to_string())?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Copy failed: {:?}", e))
}
