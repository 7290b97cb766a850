mod autocrop;
mod color;
mod crop;
mod palette;

pub use autocrop::autocrop;
pub use color::{ChannelCoefficients, adjust_channels, invert_colors};
pub use crop::{CropBox, crop};
pub use palette::quantize_to_palette;

/// Minimum pixel count before parallelizing per-pixel transforms.
pub(crate) const PARALLEL_PIXEL_THRESHOLD: usize = 262_144; // 512x512
