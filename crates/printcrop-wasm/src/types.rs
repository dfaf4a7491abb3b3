//! WASM-compatible wrapper types for image data.

use printcrop_core::decode::DecodedImage;
use printcrop_core::encode::{ExportFormat, DEFAULT_JPEG_QUALITY};
use wasm_bindgen::prelude::*;

/// A decoded RGB image held in WASM memory.
///
/// `pixels()` copies the buffer out to a JavaScript `Uint8Array`.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create an image from RGB pixel data (3 bytes per pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// RGB pixel data as a `Uint8Array` copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Release WASM memory now instead of waiting for the finalizer.
    pub fn free(self) {}
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// True for a non-empty image whose buffer holds exactly
    /// `width * height` RGB pixels.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() == self.width as usize * self.height as usize * 3
    }

    /// Clones the pixel data. The buffer is not checked here; the encoders
    /// and `Cropper::load_image` report a mismatch as an error.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Map the host's format name to an [`ExportFormat`].
///
/// `"jpeg"` and `"jpg"` select JPEG at `quality` (default 90); anything
/// else, including an empty string, selects PNG.
pub(crate) fn format_from_str(name: &str, quality: Option<u8>) -> ExportFormat {
    match name.trim().to_ascii_lowercase().as_str() {
        "jpeg" | "jpg" => ExportFormat::Jpeg {
            quality: quality.unwrap_or(DEFAULT_JPEG_QUALITY),
        },
        _ => ExportFormat::Png,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printcrop_core::encode::{encode_png, EncodeError};

    #[test]
    fn test_js_decoded_image_creation() {
        let img = JsDecodedImage::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_round_trip_through_core() {
        let decoded = DecodedImage::filled(4, 2, [1, 2, 3]);
        let js_img = JsDecodedImage::from_decoded(decoded.clone());
        assert_eq!(js_img.pixels(), decoded.pixels);
        assert_eq!(js_img.to_decoded(), decoded);
    }

    #[test]
    fn test_well_formed() {
        assert!(JsDecodedImage::new(2, 2, vec![0u8; 12]).is_well_formed());
        assert!(!JsDecodedImage::new(2, 2, vec![0u8; 11]).is_well_formed());
        assert!(!JsDecodedImage::new(0, 0, Vec::new()).is_well_formed());
    }

    #[test]
    fn test_malformed_buffer_reaches_encoder_error() {
        let decoded = JsDecodedImage::new(10, 10, vec![0u8; 12]).to_decoded();
        assert_eq!((decoded.width, decoded.height), (10, 10));

        assert!(matches!(
            encode_png(&decoded.pixels, decoded.width, decoded.height),
            Err(EncodeError::InvalidPixelData {
                expected: 300,
                actual: 12
            })
        ));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(format_from_str("png", None), ExportFormat::Png);
        assert_eq!(format_from_str("", Some(50)), ExportFormat::Png);
        assert_eq!(
            format_from_str(" JPG ", None),
            ExportFormat::Jpeg { quality: 90 }
        );
        assert_eq!(
            format_from_str("jpeg", Some(70)),
            ExportFormat::Jpeg { quality: 70 }
        );
    }
}
