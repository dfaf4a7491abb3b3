//! The interactive cropper session exposed to JavaScript.
//!
//! The page owns the DOM. It forwards drops, field edits and pointer events
//! to a [`Cropper`], then blits `render_image_data()` after each change.
//!
//! # Example
//!
//! ```typescript
//! import { Cropper, decode_image } from '@printcrop/wasm';
//!
//! const cropper = new Cropper({ viewport_size: 500, pointer_scale: devicePixelRatio });
//! cropper.load_image(decode_image(bytes));
//! cropper.set_aspect_fields(widthInput.value, heightInput.value);
//! ctx.putImageData(cropper.render_image_data(), 0, 0);
//!
//! const png = cropper.generate(widthInput.value, heightInput.value, printSelect.selectedIndex - 1, 'png');
//! download(png, cropper.file_name('png'));
//! ```

use printcrop_core::config::CropperConfig;
use printcrop_core::error::ExportError;
use printcrop_core::export::{self, print_size, ExportOutput, ExportPipeline, PrintSize};
use printcrop_core::geometry::{AspectRatio, GeometryEngine};
use printcrop_core::gesture::GestureState;
use printcrop_core::ExportFormat;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::ImageData;

use crate::types::{format_from_str, JsDecodedImage};

/// One cropping session: the loaded photo, its crop and the export settings.
#[wasm_bindgen]
pub struct Cropper {
    engine: GeometryEngine,
    pipeline: ExportPipeline,
}

#[wasm_bindgen]
impl Cropper {
    /// Create a session from an optional config object.
    ///
    /// Missing fields take their defaults; `undefined` or `null` gives the
    /// default config.
    ///
    /// # Errors
    /// Returns an error if `config` has fields of the wrong type.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Cropper, JsValue> {
        let config: CropperConfig = if config.is_undefined() || config.is_null() {
            CropperConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid cropper config: {}", e)))?
        };
        Ok(Self::with_config(config))
    }

    /// Replace the photo. The crop resets to the whole image.
    ///
    /// # Errors
    /// Returns an error for an empty image or a pixel buffer that is not
    /// `width * height * 3` bytes. The previous photo stays loaded.
    pub fn load_image(&mut self, image: &JsDecodedImage) -> Result<(), JsValue> {
        if !image.is_well_formed() {
            return Err(JsValue::from_str(
                "Image pixel data does not match its dimensions",
            ));
        }
        self.engine.load_image(image.to_decoded());
        Ok(())
    }

    /// Fit the largest centered crop of `width : height`.
    pub fn set_aspect_ratio(&mut self, width: f64, height: f64) {
        self.engine.set_aspect_ratio(width, height);
    }

    /// Fit the crop from the raw text of the two ratio fields.
    ///
    /// Text that is not a positive number unsets the crop.
    pub fn set_aspect_fields(&mut self, width: &str, height: &str) {
        match AspectRatio::parse(width, height) {
            Ok(aspect) => self.engine.set_aspect(aspect),
            Err(err) => {
                log::debug!("crop fields rejected: {}", err);
                self.engine.clear_aspect_ratio();
            }
        }
    }

    pub fn clear_aspect_ratio(&mut self) {
        self.engine.clear_aspect_ratio();
    }

    /// Begin dragging the crop.
    pub fn pointer_down(&mut self) {
        self.engine.press();
    }

    /// Pointer position in CSS pixels relative to the canvas.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.engine.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.engine.release();
    }

    /// True between `pointer_down` and `pointer_up`.
    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.engine.gesture_state() == GestureState::Dragging
    }

    /// Side of the square preview, in canvas pixels.
    #[wasm_bindgen(getter)]
    pub fn viewport_size(&self) -> u32 {
        self.engine.config().viewport_size
    }

    /// Preview frame as straight-alpha RGBA bytes.
    ///
    /// # Errors
    /// Returns an error if the preview surface cannot be allocated.
    pub fn render(&self) -> Result<Vec<u8>, JsValue> {
        self.engine
            .render()
            .map(|frame| frame.pixels)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Preview frame ready for `CanvasRenderingContext2D.putImageData`.
    pub fn render_image_data(&self) -> Result<ImageData, JsValue> {
        let frame = self
            .engine
            .render()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(frame.pixels.as_slice()),
            frame.size,
            frame.size,
        )
    }

    /// `{ x, y, width, height }` in image pixels, or `null` when unset.
    pub fn crop_rect(&self) -> Result<JsValue, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        self.engine
            .crop()
            .rect()
            .serialize(&serializer)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Copy the selected region out as a standalone image.
    pub fn extract_crop(&self) -> Result<JsDecodedImage, JsValue> {
        self.engine
            .extract_crop()
            .map(JsDecodedImage::from_decoded)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Validate, crop, pad to a print size and encode.
    ///
    /// `print_index` selects from `print_sizes()`; a negative index exports
    /// the crop without padding. `format` is `"png"` or `"jpeg"`.
    ///
    /// # Errors
    /// Throws the message to show the user when the export is refused.
    pub fn generate(
        &self,
        width: &str,
        height: &str,
        print_index: i32,
        format: &str,
        quality: Option<u8>,
    ) -> Result<Vec<u8>, JsValue> {
        let print = print_from_index(print_index).map_err(|e| JsValue::from_str(&e))?;
        self.export(width, height, print, format_from_str(format, quality))
            .map(|out| out.bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Download name for `format`: `cropped.png` or `cropped.jpg`.
    pub fn file_name(&self, format: &str) -> String {
        format_from_str(format, None).file_name().to_string()
    }
}

impl Cropper {
    pub(crate) fn with_config(config: CropperConfig) -> Self {
        let pipeline = ExportPipeline::new(config.background);
        Self {
            engine: GeometryEngine::new(config),
            pipeline,
        }
    }

    pub(crate) fn export(
        &self,
        width: &str,
        height: &str,
        print: Option<PrintSize>,
        format: ExportFormat,
    ) -> Result<ExportOutput, ExportError> {
        export::generate(&self.engine, width, height, print, &self.pipeline, format)
    }
}

fn print_from_index(index: i32) -> Result<Option<PrintSize>, String> {
    if index < 0 {
        return Ok(None);
    }
    print_size(index as usize)
        .map(Some)
        .ok_or_else(|| format!("Unknown print size #{}", index))
}
