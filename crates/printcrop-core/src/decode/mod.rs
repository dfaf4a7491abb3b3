//! Image decoding and resampling.
//!
//! This module provides functionality for:
//! - Decoding dropped JPEG and PNG files into RGB pixel buffers
//! - Applying EXIF orientation so pixels match what the browser displays
//! - Resizing images for the preview viewport
//!
//! All operations are synchronous and single-threaded. The host awaits the
//! file read before handing bytes to [`decode_image`].

mod loader;
mod resize;
mod types;

pub use loader::{decode_image, get_orientation};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
