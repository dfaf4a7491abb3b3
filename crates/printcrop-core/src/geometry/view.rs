//! Mapping between source-image pixels and the square preview canvas.

use super::CropRect;

/// Scale and offset that letterbox an image into a square viewport.
///
/// Derived on demand from the image size and viewport side; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl ViewTransform {
    /// Fit `image_width x image_height` inside a `viewport` square, centered.
    pub fn fit(image_width: u32, image_height: u32, viewport: u32) -> Self {
        let (iw, ih, side) = (image_width as f64, image_height as f64, viewport as f64);
        let scale = (side / iw).min(side / ih);

        Self {
            offset_x: (side - scale * iw) / 2.0,
            offset_y: (side - scale * ih) / 2.0,
            scale,
        }
    }

    /// Image coordinates to canvas coordinates.
    pub fn to_view(&self, x: f64, y: f64) -> (f64, f64) {
        (self.offset_x + x * self.scale, self.offset_y + y * self.scale)
    }

    /// Canvas coordinates to image coordinates.
    pub fn to_image(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.offset_x) / self.scale, (y - self.offset_y) / self.scale)
    }

    /// Project a crop rectangle onto the canvas.
    pub fn rect_to_view(&self, rect: &CropRect) -> CropRect {
        let (x, y) = self.to_view(rect.x, rect.y);
        CropRect {
            x,
            y,
            width: rect.width * self.scale,
            height: rect.height * self.scale,
        }
    }

    /// Pixel size of the scaled image on the canvas, at least 1x1.
    pub fn scaled_size(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        let w = (image_width as f64 * self.scale).round().max(1.0) as u32;
        let h = (image_height as f64 * self.scale).round().max(1.0) as u32;
        (w, h)
    }
}
