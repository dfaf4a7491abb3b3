//! Printcrop WASM - WebAssembly bindings for the print cropper
//!
//! This crate exposes printcrop-core to the page. The page keeps the DOM,
//! file input and download link; everything else happens here.
//!
//! # Module Structure
//!
//! - `cropper` - The `Cropper` session: crop fields, pointer drag, preview, export
//! - `export` - Print size catalog
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings
//! - `encode` - PNG/JPEG encoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { Cropper, decode_image, print_sizes } from '@printcrop/wasm';
//!
//! await init();
//!
//! const cropper = new Cropper();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! cropper.load_image(decode_image(bytes));
//! ```

use wasm_bindgen::prelude::*;

mod cropper;
mod decode;
mod encode;
mod export;
mod types;

pub use cropper::Cropper;
pub use decode::decode_image;
pub use encode::{encode_jpeg_from_image, encode_png_from_image};
pub use export::print_sizes;
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load).
///
/// Routes panics and `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger is already installed; keep it.
        log::debug!("console logger already initialized");
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
