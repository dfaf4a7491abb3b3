//! Interactive crop geometry.
//!
//! # Coordinate System
//!
//! - Crop rectangles are in source-image pixels, origin top-left
//! - Pointer positions are in canvas pixels of a square viewport
//! - [`ViewTransform`] maps between the two; the image is letterboxed and
//!   centered in the viewport
//!
//! # Crop Placement
//!
//! Setting an aspect ratio rebuilds the crop as the largest centered
//! rectangle of that ratio. Dragging only translates it, clamped so it
//! never leaves the image.

mod aspect;
mod crop;
mod engine;
mod rect;
mod view;

pub use aspect::{AspectRatio, AspectRatioError};
pub use crop::crop_pixels;
pub use engine::GeometryEngine;
pub use rect::{CropRect, CropState, PixelRect};
pub use view::ViewTransform;
