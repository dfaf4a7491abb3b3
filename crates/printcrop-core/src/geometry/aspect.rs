//! Crop aspect ratios entered by the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a pair of field values does not form an aspect ratio.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AspectRatioError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Aspect ratio sides must be positive finite numbers")]
    NotPositive,
}

/// A `width : height` ratio with both sides positive and finite.
///
/// The sides keep their units. Export treats them as the physical size of
/// the crop, so `4 x 6` on a `5 x 7` print leaves a half-unit border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    pub fn new(width: f64, height: f64) -> Result<Self, AspectRatioError> {
        if is_positive(width) && is_positive(height) {
            Ok(Self { width, height })
        } else {
            Err(AspectRatioError::NotPositive)
        }
    }

    /// Parse the two crop fields.
    ///
    /// Surrounding whitespace is ignored; anything else that does not parse
    /// as a number is rejected.
    pub fn parse(width: &str, height: &str) -> Result<Self, AspectRatioError> {
        Self::new(parse_side(width)?, parse_side(height)?)
    }

    /// `width / height`.
    pub fn ratio(self) -> f64 {
        self.width / self.height
    }

    /// True when wider than tall. Square is not landscape.
    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn parse_side(text: &str) -> Result<f64, AspectRatioError> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| AspectRatioError::NotANumber(text.to_string()))
}
