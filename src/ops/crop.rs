use crate::error::{PicaError, Result};
use image::DynamicImage;

/// Crop rectangle in pixel coordinates; `right` and `bottom` are exclusive.
///
/// Coordinates are kept signed so out-of-range command-line values reach
/// validation instead of being mangled at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropBox {
    /// Check the box against the image bounds and return `(x, y, w, h)`.
    fn validated(self, width: u32, height: u32) -> Result<(u32, u32, u32, u32)> {
        let Self {
            left,
            top,
            right,
            bottom,
        } = self;
        if left < 0 || top < 0 || right > i64::from(width) || bottom > i64::from(height) {
            return Err(PicaError::invalid(format!(
                "crop box ({left}, {top}, {right}, {bottom}) lies outside the {width}x{height} image"
            )));
        }
        if left >= right || top >= bottom {
            return Err(PicaError::invalid(
                "degenerate crop box: left must be < right and top must be < bottom",
            ));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            Ok((
                left as u32,
                top as u32,
                (right - left) as u32,
                (bottom - top) as u32,
            ))
        }
    }
}

/// Extract the sub-rectangle described by `frame`, preserving color type.
pub fn crop(image: &DynamicImage, frame: CropBox) -> Result<DynamicImage> {
    let (x, y, w, h) = frame.validated(image.width(), image.height())?;
    Ok(image.crop_imm(x, y, w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        #[allow(clippy::cast_possible_truncation)]
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([x as u8, y as u8, 7, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn crop_extracts_the_exact_sub_rectangle() {
        let source = gradient_image(8, 6);
        let frame = CropBox {
            left: 2,
            top: 1,
            right: 7,
            bottom: 4,
        };
        let cropped = crop(&source, frame).expect("valid box");
        assert_eq!((cropped.width(), cropped.height()), (5, 3));

        let cropped = cropped.to_rgba8();
        for (x, y, pixel) in cropped.enumerate_pixels() {
            #[allow(clippy::cast_possible_truncation)]
            let expected = Rgba([(x + 2) as u8, (y + 1) as u8, 7, 255]);
            assert_eq!(*pixel, expected, "mismatch at ({x}, {y})");
        }
    }

    #[test]
    fn full_frame_crop_is_identity() {
        let source = gradient_image(4, 4);
        let frame = CropBox {
            left: 0,
            top: 0,
            right: 4,
            bottom: 4,
        };
        let cropped = crop(&source, frame).expect("valid box");
        assert_eq!(cropped.to_rgba8(), source.to_rgba8());
    }

    #[test]
    fn out_of_range_box_is_rejected() {
        let source = gradient_image(4, 4);
        for frame in [
            CropBox {
                left: -1,
                top: 0,
                right: 3,
                bottom: 3,
            },
            CropBox {
                left: 0,
                top: 0,
                right: 5,
                bottom: 3,
            },
            CropBox {
                left: 0,
                top: 2,
                right: 3,
                bottom: 9,
            },
        ] {
            let err = crop(&source, frame).expect_err("box outside bounds");
            assert!(matches!(err, PicaError::InvalidParameter(_)));
        }
    }

    #[test]
    fn degenerate_box_is_rejected() {
        let source = gradient_image(4, 4);
        let err = crop(
            &source,
            CropBox {
                left: 2,
                top: 0,
                right: 2,
                bottom: 4,
            },
        )
        .expect_err("zero-width box");
        assert!(matches!(err, PicaError::InvalidParameter(_)));

        let err = crop(
            &source,
            CropBox {
                left: 0,
                top: 3,
                right: 4,
                bottom: 1,
            },
        )
        .expect_err("inverted box");
        assert!(matches!(err, PicaError::InvalidParameter(_)));
    }
}
