//! Printcrop Core - crop geometry and print export
//!
//! This crate holds everything the cropper does that does not touch the DOM:
//! decoding a dropped photo, fitting and dragging a fixed-ratio crop over a
//! square preview, rendering that preview, and exporting the crop padded to a
//! print size.
//!
//! # Module Structure
//!
//! - `decode` - JPEG/PNG decoding with EXIF orientation, resizing
//! - `geometry` - Aspect ratios, crop rectangles, view transform, the engine
//! - `gesture` - Pointer drag state machine and scoped drag sessions
//! - `render` - Preview frame with the crop overlay
//! - `export` - Validation, print catalog, letterboxing, `generate`
//! - `encode` - PNG and JPEG encoding
//! - `config` - Cropper settings
//! - `error` - User-facing export errors

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod export;
pub mod geometry;
pub mod gesture;
pub mod render;

pub use config::{CropperConfig, OverlayStyle};
pub use decode::{decode_image, DecodedImage};
pub use encode::ExportFormat;
pub use error::ExportError;
pub use export::{generate, ExportOutput, ExportPipeline, PrintSize, PRINT_SIZES};
pub use geometry::{AspectRatio, CropRect, CropState, GeometryEngine, ViewTransform};
pub use gesture::{DragSession, GestureState};
pub use render::{PreviewFrame, RenderError};
