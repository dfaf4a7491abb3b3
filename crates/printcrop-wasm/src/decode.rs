//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, Cropper } from '@printcrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! cropper.load_image(image);
//! ```

use crate::types::JsDecodedImage;
use printcrop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a dropped JPEG or PNG file.
///
/// EXIF orientation is applied, so the pixels match what an `<img>` element
/// would show.
///
/// # Errors
///
/// Returns an error if the bytes are empty, not a supported format, or
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use printcrop_core::decode::DecodedImage;
    use printcrop_core::encode::encode_png;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_png() {
        let source = DecodedImage::filled(6, 4, [10, 20, 30]);
        let bytes = encode_png(&source.pixels, 6, 4).unwrap();

        let image = decode_image(&bytes).unwrap();
        assert_eq!(image.width(), 6);
        assert_eq!(image.height(), 4);
        assert_eq!(image.pixels(), source.pixels);
    }

    #[wasm_bindgen_test]
    fn test_decode_empty_fails() {
        assert!(decode_image(&[]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(&[1, 2, 3, 4, 5, 6, 7, 8]).is_err());
    }
}
