//! Print size catalog bindings.

use printcrop_core::export::PRINT_SIZES;
use wasm_bindgen::prelude::*;

/// The print sizes as `[{ width, height, label }]`, portrait-first.
///
/// Indexes into this array are what `Cropper.generate` takes.
#[wasm_bindgen]
pub fn print_sizes() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PRINT_SIZES[..])
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
