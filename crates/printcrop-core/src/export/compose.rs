//! Letterboxing a crop onto a print-sized canvas.

use image::{Rgb, RgbImage};

use crate::config::{DEFAULT_BACKGROUND, MAX_EXPORT_PIXELS};
use crate::decode::DecodedImage;
use crate::error::ExportError;
use crate::geometry::AspectRatio;

use super::PrintSize;

/// Places an extracted crop centered on a print-proportioned canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportPipeline {
    background: [u8; 3],
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}

impl ExportPipeline {
    pub fn new(background: [u8; 3]) -> Self {
        Self { background }
    }

    pub fn background(&self) -> [u8; 3] {
        self.background
    }

    /// Compose `cropped` onto a background canvas sized for `print`.
    ///
    /// The crop is centered. If the print frame is smaller than the crop
    /// along an axis, the overhang is clipped. Callers check the canvas size
    /// with [`final_dimensions`] first; an oversized request returns the
    /// crop unpadded.
    pub fn compose(
        &self,
        cropped: &DecodedImage,
        crop_aspect: AspectRatio,
        print: PrintSize,
    ) -> DecodedImage {
        let (width, height) =
            match final_dimensions(cropped.width, cropped.height, crop_aspect, print) {
                Ok(dims) => dims,
                Err(err) => {
                    log::warn!("{}", err);
                    return cropped.clone();
                }
            };
        let mut canvas = RgbImage::from_pixel(width, height, Rgb(self.background));

        let Some(source) = cropped.to_rgb_image() else {
            log::warn!("crop buffer does not match its dimensions, exporting background only");
            return DecodedImage::from_rgb_image(canvas);
        };

        let offset_x = (width as i64 - cropped.width as i64) / 2;
        let offset_y = (height as i64 - cropped.height as i64) / 2;
        image::imageops::overlay(&mut canvas, &source, offset_x, offset_y);

        log::debug!(
            "composed {}x{} crop onto {}x{} {} canvas",
            cropped.width,
            cropped.height,
            width,
            height,
            print.label
        );
        DecodedImage::from_rgb_image(canvas)
    }
}

/// Canvas size for exporting a `crop_width x crop_height` crop on `print`.
///
/// The crop's declared aspect sides give its physical size, so one unit of
/// aspect is `crop_width / crop_aspect.width` pixels. The print frame is
/// turned to the crop's orientation first.
///
/// # Errors
///
/// `ExportError::CanvasTooLarge` when the canvas would exceed
/// [`MAX_EXPORT_PIXELS`], as tiny aspect sides produce.
pub fn final_dimensions(
    crop_width: u32,
    crop_height: u32,
    crop_aspect: AspectRatio,
    print: PrintSize,
) -> Result<(u32, u32), ExportError> {
    let (pw, ph) = print.oriented_for(crop_aspect);
    let width = (crop_width as f64 * pw / crop_aspect.width).ceil().max(1.0);
    let height = (crop_height as f64 * ph / crop_aspect.height).ceil().max(1.0);

    // Both sides are >= 1, so the product bound also keeps each side in u32.
    if width * height > MAX_EXPORT_PIXELS as f64 {
        return Err(ExportError::CanvasTooLarge { width, height });
    }
    Ok((width as u32, height as u32))
}
