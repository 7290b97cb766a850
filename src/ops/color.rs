use crate::error::{PicaError, Result};
use crate::ops::PARALLEL_PIXEL_THRESHOLD;
use image::DynamicImage;
use rayon::prelude::*;

/// Per-channel multipliers for `--adjust`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelCoefficients {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ChannelCoefficients {
    fn validated(self) -> Result<Self> {
        let named = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(PicaError::invalid(format!(
                    "{name} coefficient must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(self)
    }
}

/// Multiply each color channel by its coefficient, rounding and clamping to
/// the 8-bit range. Alpha is left untouched.
pub fn adjust_channels(
    image: &DynamicImage,
    coefficients: ChannelCoefficients,
) -> Result<DynamicImage> {
    let c = coefficients.validated()?;
    let factors = [c.red, c.green, c.blue];
    Ok(map_color_channels(image, move |rgb| {
        for (value, factor) in rgb.iter_mut().zip(factors) {
            *value = scaled_u8(*value, factor);
        }
    }))
}

/// Replace each color channel value `v` with `255 - v`. Alpha is left
/// untouched, so applying this twice restores the original image.
pub fn invert_colors(image: &DynamicImage) -> DynamicImage {
    map_color_channels(image, |rgb| {
        for value in rgb {
            *value = u8::MAX - *value;
        }
    })
}

/// Run `f` over the color channels of every pixel. Sources without alpha
/// stay RGB so formats like JPEG still encode the result.
fn map_color_channels(
    image: &DynamicImage,
    f: impl Fn(&mut [u8]) + Sync + Send,
) -> DynamicImage {
    if image.color().has_alpha() {
        let mut buf = image.to_rgba8();
        apply_to_samples(&mut buf, 4, &f);
        DynamicImage::ImageRgba8(buf)
    } else {
        let mut buf = image.to_rgb8();
        apply_to_samples(&mut buf, 3, &f);
        DynamicImage::ImageRgb8(buf)
    }
}

fn apply_to_samples(samples: &mut [u8], channels: usize, f: &(impl Fn(&mut [u8]) + Sync + Send)) {
    let total_pixels = samples.len() / channels;
    if total_pixels >= PARALLEL_PIXEL_THRESHOLD {
        samples
            .par_chunks_exact_mut(channels)
            .for_each(|pixel| f(&mut pixel[..3]));
    } else {
        for pixel in samples.chunks_exact_mut(channels) {
            f(&mut pixel[..3]);
        }
    }
}

fn scaled_u8(value: u8, factor: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (f32::from(value) * factor).round().clamp(0.0, 255.0) as u8
    }
}
