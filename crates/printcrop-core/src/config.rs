//! Tunable constants for a cropper session.
//!
//! The host passes these once when it creates a session. Every field has a
//! default, so a host can send a partial object (or nothing at all).

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;

/// Largest accepted viewport side. Keeps the preview surface allocation bounded.
pub const MAX_VIEWPORT_SIZE: u32 = 4096;

/// Largest padded export canvas, in pixels. A 20x30 print at 300 dpi is 54 MP.
pub const MAX_EXPORT_PIXELS: u64 = 100_000_000;

/// Neutral padding color used when exporting to a print size.
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropperConfig {
    /// Side length of the square preview canvas, in canvas pixels.
    pub viewport_size: u32,
    /// Canvas pixels per pointer unit.
    ///
    /// Pointer events arrive in CSS pixels. A host that sizes the canvas
    /// backing store by `devicePixelRatio` passes that ratio here.
    pub pointer_scale: f64,
    /// Filter used to scale the source into the preview.
    pub preview_filter: FilterType,
    pub overlay: OverlayStyle,
    /// RGB fill for print padding.
    pub background: [u8; 3],
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            viewport_size: 500,
            pointer_scale: 1.0,
            preview_filter: FilterType::Bilinear,
            overlay: OverlayStyle::default(),
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl CropperConfig {
    /// Replace out-of-range values with usable ones.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.viewport_size == 0 || self.viewport_size > MAX_VIEWPORT_SIZE {
            log::warn!(
                "viewport_size {} out of range, using {}",
                self.viewport_size,
                defaults.viewport_size
            );
            self.viewport_size = defaults.viewport_size;
        }
        if !(self.pointer_scale.is_finite() && self.pointer_scale > 0.0) {
            log::warn!("pointer_scale {} is invalid, using 1.0", self.pointer_scale);
            self.pointer_scale = defaults.pointer_scale;
        }
        if !(self.overlay.stroke_width.is_finite() && self.overlay.stroke_width >= 0.0) {
            self.overlay.stroke_width = defaults.overlay.stroke_width;
        }
        self
    }
}

/// Appearance of the crop overlay in the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// RGBA color of the crop border.
    pub stroke_color: [u8; 4],
    /// Border width in canvas pixels. The border is drawn inside the crop.
    pub stroke_width: f32,
    /// Opacity of the black fill dimming everything outside the crop.
    pub dim_alpha: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke_color: [0, 0, 0, 255],
            stroke_width: 4.0,
            dim_alpha: 128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CropperConfig::default();
        assert_eq!(config.viewport_size, 500);
        assert_eq!(config.pointer_scale, 1.0);
        assert_eq!(config.background, [255, 255, 255]);
        assert_eq!(config.overlay.stroke_width, 4.0);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let mut config = CropperConfig::default();
        config.viewport_size = 800;
        config.pointer_scale = 2.0;

        assert_eq!(config.clone().sanitized(), config);
    }

    #[test]
    fn test_sanitized_replaces_invalid_values() {
        let mut config = CropperConfig::default();
        config.viewport_size = 0;
        config.pointer_scale = f64::NAN;
        config.overlay.stroke_width = -3.0;

        let config = config.sanitized();
        assert_eq!(config.viewport_size, 500);
        assert_eq!(config.pointer_scale, 1.0);
        assert_eq!(config.overlay.stroke_width, 4.0);
    }

    #[test]
    fn test_sanitized_caps_viewport() {
        let mut config = CropperConfig::default();
        config.viewport_size = MAX_VIEWPORT_SIZE + 1;
        assert_eq!(config.sanitized().viewport_size, 500);
    }
}
