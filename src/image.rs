mod load;
mod meta;

pub use load::{DecodedImage, decode_image_from_path};
pub use meta::info_report;
