//! Export of the selected crop as a downloadable file.
//!
//! [`generate`] runs the whole pipeline: validate the request, extract the
//! crop, optionally letterbox it onto a print-sized canvas, then encode.

mod catalog;
mod compose;
mod validate;

pub use catalog::{print_size, PrintSize, PRINT_SIZES};
pub use compose::{final_dimensions, ExportPipeline};
pub use validate::{validate_export, ExportRequest};

use crate::encode::{encode, ExportFormat};
use crate::error::ExportError;
use crate::geometry::GeometryEngine;

/// Encoded export ready to hand to the browser.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Validate, extract, compose and encode.
///
/// Without a print size the extracted crop is encoded as-is. Padding that
/// would exceed [`MAX_EXPORT_PIXELS`](crate::config::MAX_EXPORT_PIXELS) is
/// refused with `ExportError::CanvasTooLarge`.
pub fn generate(
    engine: &GeometryEngine,
    width_text: &str,
    height_text: &str,
    print: Option<PrintSize>,
    pipeline: &ExportPipeline,
    format: ExportFormat,
) -> Result<ExportOutput, ExportError> {
    let request = validate_export(engine, width_text, height_text)?;
    let cropped = engine.extract_crop()?;

    let output = match print {
        Some(print) => {
            final_dimensions(cropped.width, cropped.height, request.aspect, print)?;
            pipeline.compose(&cropped, request.aspect, print)
        }
        None => cropped,
    };

    let bytes = encode(&output, format)?;
    log::info!(
        "exported {}x{} {} ({} bytes)",
        output.width,
        output.height,
        format.file_name(),
        bytes.len()
    );

    Ok(ExportOutput {
        bytes,
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        width: output.width,
        height: output.height,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::MAX_EXPORT_PIXELS;
    use crate::geometry::AspectRatio;
    use proptest::prelude::*;

    proptest! {
        /// Property: The padded canvas takes the crop's orientation and never
        /// exceeds the pixel budget.
        #[test]
        fn prop_final_dimensions_follow_crop_orientation(
            (cw, ch) in (1u32..=4000, 1u32..=4000),
            (aw, ah) in (0.5f64..50.0, 0.5f64..50.0),
            index in 0usize..PRINT_SIZES.len(),
        ) {
            let aspect = AspectRatio::new(aw, ah).unwrap();
            let print = PRINT_SIZES[index];
            match final_dimensions(cw, ch, aspect, print) {
                Ok((fw, fh)) => {
                    prop_assert!(fw >= 1 && fh >= 1);
                    prop_assert!(u64::from(fw) * u64::from(fh) <= MAX_EXPORT_PIXELS);
                }
                Err(err) => prop_assert!(matches!(err, ExportError::CanvasTooLarge { .. }), "expected CanvasTooLarge"),
            }

            let (pw, ph) = print.oriented_for(aspect);
            prop_assert_eq!(pw > ph, aspect.is_landscape() && print.width != print.height);
        }
    }
}
