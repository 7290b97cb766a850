use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::{PicaError, Result};

/// Pick the destination for an operation's output: the explicit `-o` path
/// when given, otherwise the input file name with an operation prefix in
/// the current directory.
pub fn resolve_output_path(input: &Path, explicit: Option<&Path>, prefix: &str) -> PathBuf {
    explicit.map_or_else(|| derived_output_path(input, prefix), Path::to_path_buf)
}

fn derived_output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    PathBuf::from(format!("{prefix}_{name}"))
}

/// Encode `image` to `path`; the format follows the file extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|err| PicaError::output(path, err))
}
