//! The crop rectangle and its unset state.

use serde::{Deserialize, Serialize};

use super::AspectRatio;

/// Axis-aligned rectangle in source-image pixels.
///
/// Coordinates are fractional: the largest rectangle of a given ratio
/// rarely lands on the pixel grid. [`CropRect::pixel_bounds`] snaps it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Integer rectangle on the source pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// The whole image.
    pub fn full(image_width: u32, image_height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: image_width as f64,
            height: image_height as f64,
        }
    }

    /// Largest rectangle of `aspect` that fits the image, centered.
    ///
    /// The limiting side is taken from the image exactly, so the result
    /// never exceeds the image through rounding.
    pub fn fit_aspect(image_width: u32, image_height: u32, aspect: AspectRatio) -> Self {
        let (iw, ih) = (image_width as f64, image_height as f64);
        let (width, height) = if iw / aspect.width <= ih / aspect.height {
            (iw, (iw * aspect.height / aspect.width).min(ih))
        } else {
            ((ih * aspect.width / aspect.height).min(iw), ih)
        };

        Self {
            x: (iw - width) / 2.0,
            y: (ih - height) / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Invariant check: positive size and fully inside `image_width x image_height`.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        const EPS: f64 = 1e-9;
        self.width > 0.0
            && self.height > 0.0
            && self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= image_width as f64 + EPS
            && self.bottom() <= image_height as f64 + EPS
    }

    /// Snap to the pixel grid of an `image_width x image_height` image.
    ///
    /// Origin and size are rounded to the nearest pixel, then the origin is
    /// pulled back so the result stays on the image. Both sides are at least
    /// one pixel.
    pub fn pixel_bounds(&self, image_width: u32, image_height: u32) -> PixelRect {
        let (x, width) = snap_span(self.x, self.width, image_width);
        let (y, height) = snap_span(self.y, self.height, image_height);
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

fn snap_span(start: f64, len: f64, limit: u32) -> (u32, u32) {
    let limit = limit.max(1);
    let len = (len.round().max(1.0) as u32).min(limit);
    let start = (start.round().max(0.0) as u32).min(limit - len);
    (start, len)
}

/// Crop selection state.
///
/// `Unset` means no valid aspect ratio has been supplied. It suppresses the
/// overlay and blocks export, and is distinct from a zero-size rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CropState {
    #[default]
    Unset,
    Set(CropRect),
}

impl CropState {
    pub fn is_set(&self) -> bool {
        matches!(self, CropState::Set(_))
    }

    pub fn rect(&self) -> Option<&CropRect> {
        match self {
            CropState::Set(rect) => Some(rect),
            CropState::Unset => None,
        }
    }
}
