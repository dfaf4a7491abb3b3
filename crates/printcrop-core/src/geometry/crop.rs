//! Copying a pixel rectangle out of a source image.

use crate::decode::DecodedImage;

use super::PixelRect;

/// Copy `region` out of `image` into a standalone image.
///
/// `region` must already lie on the image; [`super::CropRect::pixel_bounds`]
/// guarantees that.
pub fn crop_pixels(image: &DecodedImage, region: PixelRect) -> DecodedImage {
    debug_assert!(region.x + region.width <= image.width);
    debug_assert!(region.y + region.height <= image.height);

    let src_stride = image.width as usize * 3;
    let row_len = region.width as usize * 3;
    let mut output = Vec::with_capacity(row_len * region.height as usize);

    // Copy pixel data row by row
    for y in region.y..region.y + region.height {
        let start = y as usize * src_stride + region.x as usize * 3;
        match image.pixels.get(start..start + row_len) {
            Some(row) => output.extend_from_slice(row),
            // Short buffer: pad with black
            None => output.resize(output.len() + row_len, 0),
        }
    }

    DecodedImage::new(region.width, region.height, output)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    /// Strategy for an image size plus a region inside it.
    fn image_and_region() -> impl Strategy<Value = ((u32, u32), PixelRect)> {
        (4u32..=60, 4u32..=60).prop_flat_map(|(w, h)| {
            (0..w, 0..h).prop_flat_map(move |(x, y)| {
                (1..=w - x, 1..=h - y).prop_map(move |(rw, rh)| {
                    (
                        (w, h),
                        PixelRect {
                            x,
                            y,
                            width: rw,
                            height: rh,
                        },
                    )
                })
            })
        })
    }

    proptest! {
        /// Property: Output matches the region and every pixel comes from the offset source.
        #[test]
        fn prop_region_copied_at_offset(((w, h), region) in image_and_region()) {
            let img = create_test_image(w, h);
            let result = crop_pixels(&img, region);

            prop_assert_eq!(result.width, region.width);
            prop_assert_eq!(result.height, region.height);
            prop_assert_eq!(result.pixels.len(), (region.width * region.height * 3) as usize);

            for (dx, dy) in [(0, 0), (region.width - 1, region.height - 1)] {
                prop_assert_eq!(
                    result.pixel(dx, dy),
                    img.pixel(region.x + dx, region.y + dy)
                );
            }
        }
    }
}
