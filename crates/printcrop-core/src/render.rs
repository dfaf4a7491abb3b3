//! Composited preview of the cropper viewport.
//!
//! The image is scaled into the square viewport, then the crop overlay is
//! painted on top using tiny-skia:
//! - a dimming fill over everything outside the crop, drawn as one path of
//!   two rectangles under the even-odd rule so the crop itself is excluded
//! - a border stroked just inside the crop bounds
//!
//! The scaled image comes from the engine's preview, built once at load, so
//! a frame costs a blit plus the overlay regardless of the source size.
//! Viewport pixels not covered by the image stay transparent, like a cleared
//! canvas.

use std::borrow::Cow;

use thiserror::Error;
use tiny_skia::{
    FillRule, IntSize, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

use crate::config::OverlayStyle;
use crate::decode::{resize, DecodeError, DecodedImage};
use crate::geometry::{CropRect, CropState, GeometryEngine, ViewTransform};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    #[error("Failed to scale image for preview: {0}")]
    Scale(#[from] DecodeError),
}

/// A square RGBA frame with straight alpha, ready for canvas `ImageData`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    pub size: u32,
    pub pixels: Vec<u8>,
}

impl PreviewFrame {
    fn from_pixmap(pixmap: &Pixmap) -> Self {
        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        Self {
            size: pixmap.width(),
            pixels,
        }
    }

    /// RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let idx = ((y as usize) * (self.size as usize) + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }
}

impl GeometryEngine {
    /// Render the current state. Pure: equal state gives equal frames.
    pub fn render(&self) -> Result<PreviewFrame, RenderError> {
        let config = self.config();
        let side = config.viewport_size;
        let mut pixmap = Pixmap::new(side, side).ok_or(RenderError::Surface {
            width: side,
            height: side,
        })?;

        if let (Some(image), Some(view)) = (self.image(), self.view_transform()) {
            let scaled = match self.preview() {
                Some(preview) => Cow::Borrowed(preview),
                None => {
                    let (width, height) = view.scaled_size(image.width, image.height);
                    Cow::Owned(resize(image, width, height, config.preview_filter)?)
                }
            };
            draw_image(&mut pixmap, &scaled, &view)?;
            if let CropState::Set(rect) = self.crop() {
                draw_overlay(&mut pixmap, &view.rect_to_view(rect), &config.overlay);
            }
        }

        Ok(PreviewFrame::from_pixmap(&pixmap))
    }
}

/// Blit an already scaled image at the view offset.
fn draw_image(
    pixmap: &mut Pixmap,
    scaled: &DecodedImage,
    view: &ViewTransform,
) -> Result<(), RenderError> {
    let (width, height) = (scaled.width, scaled.height);
    let rgba: Vec<u8> = scaled
        .pixels
        .chunks_exact(3)
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect();
    let layer = IntSize::from_wh(width, height)
        .and_then(|size| Pixmap::from_vec(rgba, size))
        .ok_or(RenderError::Surface { width, height })?;

    pixmap.draw_pixmap(
        view.offset_x.round() as i32,
        view.offset_y.round() as i32,
        layer.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(())
}

/// Paint the dimming donut and the crop border. `crop` is in canvas pixels.
fn draw_overlay(pixmap: &mut Pixmap, crop: &CropRect, style: &OverlayStyle) {
    let side = pixmap.width() as f32;
    let (x, y) = (crop.x as f32, crop.y as f32);
    let (w, h) = (crop.width as f32, crop.height as f32);

    let mut pb = PathBuilder::new();
    if let (Some(full), Some(inner)) = (
        Rect::from_xywh(0.0, 0.0, side, side),
        Rect::from_xywh(x, y, w, h),
    ) {
        pb.push_rect(full);
        pb.push_rect(inner);
    }
    if let Some(donut) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, style.dim_alpha);
        paint.anti_alias = false;
        pixmap.fill_path(
            &donut,
            &paint,
            FillRule::EvenOdd,
            Transform::identity(),
            None,
        );
    }

    let inset = style.stroke_width / 2.0;
    if style.stroke_width <= 0.0 || w <= style.stroke_width || h <= style.stroke_width {
        return;
    }
    if let Some(border) = Rect::from_xywh(x + inset, y + inset, w - 2.0 * inset, h - 2.0 * inset)
    {
        let [r, g, b, a] = style.stroke_color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.stroke_width,
            ..Default::default()
        };
        pixmap.stroke_path(
            &PathBuilder::from_rect(border),
            &paint,
            &stroke,
            Transform::identity(),
            None,
        );
    }
}
