//! Export preconditions.

use crate::error::ExportError;
use crate::geometry::{AspectRatio, GeometryEngine};

/// A validated export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportRequest {
    /// The ratio the current crop was fitted to.
    pub aspect: AspectRatio,
}

/// Check that `engine` can export with the given crop fields.
///
/// Checked in order: an image is loaded, both fields are positive numbers,
/// a crop has been fitted to a ratio. The full-image crop left by
/// `load_image` does not count. Never changes the engine.
///
/// The request carries the ratio the crop was built from, not the field
/// values, so padding always matches the rectangle being exported.
pub fn validate_export(
    engine: &GeometryEngine,
    width_text: &str,
    height_text: &str,
) -> Result<ExportRequest, ExportError> {
    if engine.image().is_none() {
        return Err(ExportError::NoImageLoaded);
    }
    let fields = AspectRatio::parse(width_text, height_text)?;
    let aspect = match (engine.crop().is_set(), engine.aspect()) {
        (true, Some(aspect)) => aspect,
        _ => return Err(ExportError::NoCropSelected),
    };
    if fields != aspect {
        log::debug!(
            "crop fields {}x{} differ from fitted ratio {}x{}, exporting the fitted ratio",
            fields.width,
            fields.height,
            aspect.width,
            aspect.height
        );
    }
    Ok(ExportRequest { aspect })
}
