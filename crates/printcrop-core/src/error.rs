//! Errors surfaced to the user when an export is refused or fails.
//!
//! The `Display` text of each variant is the message shown in the page.

use thiserror::Error;

use crate::encode::EncodeError;
use crate::geometry::AspectRatioError;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Export attempted before any image was dropped.
    #[error("Drop an image onto the canvas first")]
    NoImageLoaded,

    /// One or both crop fields are not positive numbers.
    #[error("Enter a positive number for both crop width and height")]
    InvalidAspectRatio(#[from] AspectRatioError),

    /// The crop rectangle is unset.
    #[error("Choose a crop aspect ratio first")]
    NoCropSelected,

    /// The padded print canvas would exceed the export pixel budget.
    #[error("The print canvas would be {width:.0}x{height:.0} pixels; enter larger crop width and height values")]
    CanvasTooLarge { width: f64, height: f64 },

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
