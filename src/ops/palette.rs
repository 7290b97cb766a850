use crate::config::PaletteSettings;
use crate::error::{PicaError, Result};
use crate::ops::PARALLEL_PIXEL_THRESHOLD;
use color_quant::NeuQuant;
use image::DynamicImage;
use rayon::prelude::*;

/// Reduce the image to an adaptive palette of at most `settings.colors`
/// colors and remap every pixel to its nearest palette entry.
pub fn quantize_to_palette(image: &DynamicImage, settings: &PaletteSettings) -> Result<DynamicImage> {
    let settings = settings.sanitized();
    let mut rgba = image.to_rgba8();
    if rgba.is_empty() {
        return Err(PicaError::invalid("image has no pixels"));
    }

    let quantizer = NeuQuant::new(settings.sample_factor, settings.colors, rgba.as_raw());
    let samples: &mut [u8] = &mut rgba;
    if samples.len() / 4 >= PARALLEL_PIXEL_THRESHOLD {
        samples
            .par_chunks_exact_mut(4)
            .for_each(|pixel| quantizer.map_pixel(pixel));
    } else {
        for pixel in samples.chunks_exact_mut(4) {
            quantizer.map_pixel(pixel);
        }
    }

    let out = DynamicImage::ImageRgba8(rgba);
    if image.color().has_alpha() {
        Ok(out)
    } else {
        Ok(DynamicImage::ImageRgb8(out.into_rgb8()))
    }
}
