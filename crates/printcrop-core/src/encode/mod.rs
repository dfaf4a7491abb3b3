//! Encoding of exported images.
//!
//! The export button hands the composed image to one of these encoders and
//! offers the bytes as a download under a fixed name.
//!
//! # Examples
//!
//! ```ignore
//! use printcrop_core::encode::{encode, ExportFormat};
//!
//! let bytes = encode(&composed, ExportFormat::Png)?;
//! save(ExportFormat::Png.file_name(), &bytes);
//! ```

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodedImage;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Default JPEG quality when the host does not pick one.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur while encoding an export.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Raster format of the downloaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg { quality: u8 },
}

impl ExportFormat {
    /// Fixed filename offered to the browser download.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Png => "cropped.png",
            ExportFormat::Jpeg { .. } => "cropped.jpg",
        }
    }

    /// MIME type for the download blob.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg { .. } => "image/jpeg",
        }
    }
}

/// Encode an image in the requested format.
pub fn encode(image: &DecodedImage, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
    let bytes = match format {
        ExportFormat::Png => encode_png(&image.pixels, image.width, image.height)?,
        ExportFormat::Jpeg { quality } => {
            encode_jpeg(&image.pixels, image.width, image.height, quality)?
        }
    };
    log::debug!(
        "encoded {}x{} export as {} ({} bytes)",
        image.width,
        image.height,
        format.mime_type(),
        bytes.len()
    );
    Ok(bytes)
}

/// Check that an RGB buffer matches its declared dimensions.
fn validate_rgb(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
