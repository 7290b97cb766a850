use crate::error::{PicaError, Result};
use image::DynamicImage;

/// Crop to the bounding box of all pixels that differ from the background.
///
/// The background is the top-left corner pixel, compared in 8-bit RGBA. An
/// image where every pixel matches the background is rejected rather than
/// passed through unchanged.
pub fn autocrop(image: &DynamicImage) -> Result<DynamicImage> {
    let rgba = image.to_rgba8();
    let background = rgba
        .pixels()
        .next()
        .copied()
        .ok_or_else(|| PicaError::invalid("image has no pixels"))?;

    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in rgba.enumerate_pixels() {
        if *pixel != background {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((left, top, right, bottom)) => {
                    (left.min(x), top.min(y), right.max(x), bottom.max(y))
                }
            });
        }
    }

    let Some((left, top, right, bottom)) = bounds else {
        return Err(PicaError::invalid(
            "nothing to autocrop: every pixel matches the background",
        ));
    };
    Ok(image.crop_imm(left, top, right - left + 1, bottom - top + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([200, 30, 30, 255]);

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, WHITE)
    }

    #[test]
    fn single_content_pixel_yields_1x1() {
        let mut img = blank(10, 10);
        img.put_pixel(6, 3, RED);
        let cropped = autocrop(&DynamicImage::ImageRgba8(img)).expect("has content");
        assert_eq!((cropped.width(), cropped.height()), (1, 1));
        assert_eq!(*cropped.to_rgba8().get_pixel(0, 0), RED);
    }

    #[test]
    fn bounding_box_spans_all_content() {
        let mut img = blank(20, 12);
        img.put_pixel(4, 2, RED);
        img.put_pixel(15, 9, RED);
        let cropped = autocrop(&DynamicImage::ImageRgba8(img)).expect("has content");
        assert_eq!((cropped.width(), cropped.height()), (12, 8));
        let cropped = cropped.to_rgba8();
        assert_eq!(*cropped.get_pixel(0, 0), RED);
        assert_eq!(*cropped.get_pixel(11, 7), RED);
    }

    #[test]
    fn uniform_image_is_rejected() {
        let err = autocrop(&DynamicImage::ImageRgba8(blank(5, 5))).expect_err("no content");
        assert!(matches!(err, PicaError::InvalidParameter(_)));
    }

    #[test]
    fn content_touching_edges_keeps_full_extent() {
        let mut img = blank(6, 6);
        img.put_pixel(0, 5, RED);
        img.put_pixel(5, 0, RED);
        let cropped = autocrop(&DynamicImage::ImageRgba8(img)).expect("has content");
        assert_eq!((cropped.width(), cropped.height()), (6, 6));
    }
}
