//! The crop-geometry engine.
//!
//! Owns the source image, the crop selection and the drag gesture for one
//! cropper session. Every method is a synchronous `&mut self` call, so the
//! host never observes a half-applied update.

use crate::config::CropperConfig;
use crate::decode::{resize, DecodedImage};
use crate::error::ExportError;
use crate::gesture::{DragGesture, DragSession, GestureState};

use super::{crop_pixels, AspectRatio, CropRect, CropState, ViewTransform};

#[derive(Debug, Clone)]
pub struct GeometryEngine {
    config: CropperConfig,
    image: Option<DecodedImage>,
    /// The image scaled to its on-canvas size, built once per load.
    preview: Option<DecodedImage>,
    crop: CropState,
    aspect: Option<AspectRatio>,
    gesture: DragGesture,
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self::new(CropperConfig::default())
    }
}

impl GeometryEngine {
    pub fn new(config: CropperConfig) -> Self {
        Self {
            config: config.sanitized(),
            image: None,
            preview: None,
            crop: CropState::Unset,
            aspect: None,
            gesture: DragGesture::default(),
        }
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }

    /// The loaded image at its letterboxed canvas size, if it could be
    /// scaled.
    pub fn preview(&self) -> Option<&DecodedImage> {
        self.preview.as_ref()
    }

    pub fn crop(&self) -> &CropState {
        &self.crop
    }

    /// The ratio the current crop was built from, if any.
    pub fn aspect(&self) -> Option<AspectRatio> {
        self.aspect
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    /// Current image-to-canvas mapping, or `None` without an image.
    pub fn view_transform(&self) -> Option<ViewTransform> {
        self.image
            .as_ref()
            .map(|img| ViewTransform::fit(img.width, img.height, self.config.viewport_size))
    }

    /// Replace the source image.
    ///
    /// The preview is rescaled here so rendering never touches the full
    /// source. The crop resets to the full image, the remembered ratio is forgotten
    /// and any drag in progress is abandoned. A zero-area image is ignored.
    pub fn load_image(&mut self, image: DecodedImage) {
        if image.width == 0 || image.height == 0 {
            log::warn!("ignoring {}x{} image", image.width, image.height);
            return;
        }
        log::debug!("loading {}x{} image", image.width, image.height);
        let view = ViewTransform::fit(image.width, image.height, self.config.viewport_size);
        let (width, height) = view.scaled_size(image.width, image.height);
        self.preview = match resize(&image, width, height, self.config.preview_filter) {
            Ok(preview) => Some(preview),
            Err(err) => {
                log::warn!("cannot build {}x{} preview: {}", width, height, err);
                None
            }
        };
        self.crop = CropState::Set(CropRect::full(image.width, image.height));
        self.aspect = None;
        self.gesture.reset();
        self.image = Some(image);
    }

    /// Fit the largest centered rectangle of `width : height`.
    ///
    /// Without an image this is a no-op. Non-positive or non-finite sides
    /// leave the crop unset.
    pub fn set_aspect_ratio(&mut self, width: f64, height: f64) {
        if self.image.is_none() {
            return;
        }
        match AspectRatio::new(width, height) {
            Ok(aspect) => self.set_aspect(aspect),
            Err(err) => {
                log::debug!("aspect {width}x{height} rejected: {err}");
                self.clear_aspect_ratio();
            }
        }
    }

    /// Typed variant of [`Self::set_aspect_ratio`].
    pub fn set_aspect(&mut self, aspect: AspectRatio) {
        let Some(image) = &self.image else {
            return;
        };
        let rect = CropRect::fit_aspect(image.width, image.height, aspect);
        log::debug!(
            "crop {}x{} at ({}, {}) for aspect {}:{}",
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            aspect.width,
            aspect.height
        );
        self.crop = CropState::Set(rect);
        self.aspect = Some(aspect);
    }

    /// Drop the crop selection. The preview shows no overlay afterwards.
    pub fn clear_aspect_ratio(&mut self) {
        self.crop = CropState::Unset;
        self.aspect = None;
    }

    /// Center the crop on a canvas position, clamped to the image.
    ///
    /// No-op without an image, with the crop unset, or for a non-finite
    /// position.
    pub fn drag_to(&mut self, pointer_x: f64, pointer_y: f64) {
        if !(pointer_x.is_finite() && pointer_y.is_finite()) {
            return;
        }
        let (Some(image), CropState::Set(rect)) = (&self.image, &mut self.crop) else {
            return;
        };

        let view = ViewTransform::fit(image.width, image.height, self.config.viewport_size);
        let (photo_x, photo_y) = view.to_image(
            pointer_x * self.config.pointer_scale,
            pointer_y * self.config.pointer_scale,
        );

        let max_x = (image.width as f64 - rect.width).max(0.0);
        let max_y = (image.height as f64 - rect.height).max(0.0);
        rect.x = (photo_x - rect.width / 2.0).clamp(0.0, max_x);
        rect.y = (photo_y - rect.height / 2.0).clamp(0.0, max_y);

        log::trace!("crop moved to ({:.1}, {:.1})", rect.x, rect.y);
    }

    /// Start a pointer drag. Ignored while a drag is already active.
    pub fn press(&mut self) {
        self.gesture.press();
    }

    /// Feed a pointer position. Only moves the crop while dragging.
    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64) {
        if let Some((x, y)) = self.gesture.move_to(pointer_x, pointer_y) {
            self.drag_to(x, y);
        }
    }

    /// End the pointer drag.
    pub fn release(&mut self) {
        self.gesture.release();
    }

    /// Start a drag that ends when the returned session is dropped.
    pub fn begin_drag(&mut self) -> DragSession<'_> {
        DragSession::new(self)
    }

    /// Copy the selected region into a standalone image.
    ///
    /// The result is `round(width) x round(height)` pixels taken from the
    /// rounded crop origin.
    pub fn extract_crop(&self) -> Result<DecodedImage, ExportError> {
        let image = self.image.as_ref().ok_or(ExportError::NoImageLoaded)?;
        let rect = self.crop.rect().ok_or(ExportError::NoCropSelected)?;

        let region = rect.pixel_bounds(image.width, image.height);
        log::debug!(
            "extracting {}x{} at ({}, {})",
            region.width,
            region.height,
            region.x,
            region.y
        );
        Ok(crop_pixels(image, region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(width: u32, height: u32) -> GeometryEngine {
        let mut engine = GeometryEngine::default();
        engine.load_image(DecodedImage::filled(width, height, [90, 90, 90]));
        engine
    }

    fn rect(engine: &GeometryEngine) -> CropRect {
        *engine.crop().rect().expect("crop should be set")
    }

    #[test]
    fn test_load_resets_to_full_image() {
        let engine = engine_with(640, 480);
        assert_eq!(rect(&engine), CropRect::full(640, 480));
        assert_eq!(engine.aspect(), None);
    }

    #[test]
    fn test_set_aspect_ratio_scenario() {
        let mut engine = engine_with(4000, 3000);
        engine.set_aspect_ratio(4.0, 6.0);

        let crop = rect(&engine);
        assert_eq!(crop.width, 2000.0);
        assert_eq!(crop.height, 3000.0);
        assert_eq!(crop.x, 1000.0);
        assert_eq!(crop.y, 0.0);
    }

    #[test]
    fn test_set_aspect_ratio_without_image_is_noop() {
        let mut engine = GeometryEngine::default();
        engine.set_aspect_ratio(4.0, 6.0);
        assert_eq!(*engine.crop(), CropState::Unset);
        assert_eq!(engine.aspect(), None);
    }

    #[test]
    fn test_invalid_aspect_unsets_crop() {
        let mut engine = engine_with(100, 100);
        engine.set_aspect_ratio(0.0, 6.0);
        assert_eq!(*engine.crop(), CropState::Unset);

        engine.set_aspect_ratio(3.0, 2.0);
        assert!(engine.crop().is_set());

        engine.set_aspect_ratio(f64::NAN, 2.0);
        assert_eq!(*engine.crop(), CropState::Unset);
    }

    #[test]
    fn test_drag_clamps_to_far_edge() {
        let mut engine = engine_with(4000, 3000);
        engine.set_aspect_ratio(4.0, 6.0);

        // Right edge of the 500px viewport maps to x = 4000 in the photo.
        engine.drag_to(500.0, 250.0);
        let crop = rect(&engine);
        assert_eq!(crop.x, 2000.0);
        assert_eq!(crop.y, 0.0);

        engine.drag_to(10_000.0, 10_000.0);
        assert_eq!(rect(&engine).x, 2000.0);
    }

    #[test]
    fn test_drag_clamps_to_origin() {
        let mut engine = engine_with(4000, 3000);
        engine.set_aspect_ratio(4.0, 6.0);
        engine.drag_to(-50.0, -50.0);

        let crop = rect(&engine);
        assert_eq!((crop.x, crop.y), (0.0, 0.0));
    }

    #[test]
    fn test_drag_centers_crop_on_pointer() {
        let mut engine = engine_with(4000, 3000);
        engine.set_aspect_ratio(1.0, 1.0);
        // 3000x3000 crop; pointer at photo x = 1600 → left edge 100.
        engine.drag_to(200.0, 250.0);
        assert_eq!(rect(&engine).x, 100.0);
    }

    #[test]
    fn test_pointer_scale_multiplies_pointer() {
        let mut config = CropperConfig::default();
        config.pointer_scale = 2.0;
        let mut engine = GeometryEngine::new(config);
        engine.load_image(DecodedImage::filled(4000, 3000, [0, 0, 0]));
        engine.set_aspect_ratio(1.0, 1.0);

        // 100 CSS px * 2 = canvas x 200 → photo x 1600.
        engine.drag_to(100.0, 125.0);
        assert_eq!(rect(&engine).x, 100.0);
    }

    #[test]
    fn test_drag_keeps_size() {
        let mut engine = engine_with(800, 600);
        engine.set_aspect_ratio(5.0, 7.0);
        let before = rect(&engine);

        engine.drag_to(123.0, 321.0);
        let after = rect(&engine);
        assert_eq!(before.width, after.width);
        assert_eq!(before.height, after.height);
    }

    #[test]
    fn test_drag_ignored_when_unset_or_empty() {
        let mut engine = GeometryEngine::default();
        engine.drag_to(10.0, 10.0);
        assert_eq!(*engine.crop(), CropState::Unset);

        let mut engine = engine_with(100, 100);
        engine.clear_aspect_ratio();
        engine.drag_to(10.0, 10.0);
        assert_eq!(*engine.crop(), CropState::Unset);
    }

    #[test]
    fn test_drag_ignores_non_finite_pointer() {
        let mut engine = engine_with(400, 200);
        engine.set_aspect_ratio(1.0, 1.0);
        let before = rect(&engine);
        engine.drag_to(f64::NAN, 3.0);
        assert_eq!(rect(&engine), before);
    }

    #[test]
    fn test_extract_crop_dimensions() {
        let mut engine = engine_with(4000, 3000);
        engine.set_aspect_ratio(4.0, 6.0);

        let cropped = engine.extract_crop().unwrap();
        assert_eq!((cropped.width, cropped.height), (2000, 3000));
    }

    #[test]
    fn test_extract_crop_without_image_fails() {
        let engine = GeometryEngine::default();
        assert!(matches!(
            engine.extract_crop(),
            Err(ExportError::NoImageLoaded)
        ));
    }

    #[test]
    fn test_extract_crop_after_clear_fails() {
        let mut engine = engine_with(100, 100);
        engine.clear_aspect_ratio();
        assert!(matches!(
            engine.extract_crop(),
            Err(ExportError::NoCropSelected)
        ));
    }

    #[test]
    fn test_extract_crop_takes_offset_pixels() {
        let mut pixels = Vec::new();
        for y in 0..4u8 {
            for x in 0..8u8 {
                pixels.extend_from_slice(&[x, y, 0]);
            }
        }
        let mut engine = GeometryEngine::default();
        engine.load_image(DecodedImage::new(8, 4, pixels));
        engine.set_aspect_ratio(1.0, 1.0);

        // 4x4 crop centered at x = 2
        let cropped = engine.extract_crop().unwrap();
        assert_eq!((cropped.width, cropped.height), (4, 4));
        assert_eq!(cropped.pixel(0, 0), Some([2, 0, 0]));
        assert_eq!(cropped.pixel(3, 3), Some([5, 3, 0]));
    }

    #[test]
    fn test_zero_area_image_is_ignored() {
        let mut engine = engine_with(30, 20);
        engine.load_image(DecodedImage::filled(0, 10, [0, 0, 0]));
        assert_eq!(engine.image().map(|i| i.width), Some(30));
    }

    #[test]
    fn test_load_builds_viewport_sized_preview() {
        let engine = engine_with(600, 400);
        let preview = engine.preview().unwrap();
        assert_eq!((preview.width, preview.height), (500, 333));

        let mut engine = engine;
        engine.load_image(DecodedImage::filled(40, 80, [0, 0, 0]));
        let preview = engine.preview().unwrap();
        assert_eq!((preview.width, preview.height), (250, 500));
    }

    #[test]
    fn test_new_image_replaces_crop() {
        let mut engine = engine_with(4000, 3000);
        engine.set_aspect_ratio(4.0, 6.0);
        engine.load_image(DecodedImage::filled(10, 20, [0, 0, 0]));

        assert_eq!(rect(&engine), CropRect::full(10, 20));
        assert_eq!(engine.image().map(|i| (i.width, i.height)), Some((10, 20)));
    }
}
