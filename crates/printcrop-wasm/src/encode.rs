//! Image encoding WASM bindings.
//!
//! Most hosts export through `Cropper.generate`. These standalone encoders
//! serve hosts that compose their own output.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_from_image, encode_jpeg_from_image } from '@printcrop/wasm';
//!
//! const png = encode_png_from_image(image);
//! const jpeg = encode_jpeg_from_image(image, 90);
//! ```

use crate::types::JsDecodedImage;
use printcrop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image as PNG bytes.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the dimensions or
/// either dimension is zero.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    let image = image.to_decoded();
    encode::encode_png(&image.pixels, image.width, image.height)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as JPEG bytes at `quality` (1-100, clamped).
///
/// # Errors
///
/// Same conditions as [`encode_png_from_image`].
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let image = image.to_decoded();
    encode::encode_jpeg(&image.pixels, image.width, image.height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
