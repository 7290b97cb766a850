use crate::config::PicaConfig;
use crate::error::{PicaError, Result};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, Limits};
use std::path::Path;

/// A decoded image together with the container format the decoder detected.
#[derive(Debug)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

/// Load and decode an image from a filesystem path using configured limits.
pub fn decode_image_from_path(cfg: &PicaConfig, path: &Path) -> Result<DecodedImage> {
    let mut reader = ImageReader::open(path)
        .map_err(|err| PicaError::input(path, err))?
        .with_guessed_format()
        .map_err(|err| PicaError::input(path, err))?;

    let il = cfg.effective_image_limits();
    let mut limits = Limits::default();
    limits.max_image_width = Some(il.image_dim);
    limits.max_image_height = Some(il.image_dim);
    limits.max_alloc = Some(il.alloc_bytes);
    reader.limits(limits);

    let format = reader.format();
    let img = reader
        .decode()
        .map_err(|err| PicaError::input(path, err))?;

    let (w, h) = img.dimensions();
    let total_pixels = u64::from(w) * u64::from(h);
    if total_pixels > il.total_pixels {
        return Err(PicaError::input(
            path,
            format!(
                "image too large: {}x{} (~{} MP) exceeds limit (~{} MP)",
                w,
                h,
                total_pixels / 1_000_000,
                il.total_pixels / 1_000_000
            ),
        ));
    }

    Ok(DecodedImage { image: img, format })
}
