use chrono::{DateTime, Utc};
use image::{ColorType, ImageFormat};
use std::fmt::Write as _;
use std::path::Path;
use std::time::SystemTime;

use crate::image::DecodedImage;

/// Build the `--info` report: format, color mode, dimensions, plus file
/// size and modification time when the filesystem provides them.
pub fn info_report(path: &Path, decoded: &DecodedImage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Format: {}", format_label(decoded.format));
    let _ = writeln!(out, "Mode: {}", color_mode_label(decoded.image.color()));
    let _ = writeln!(
        out,
        "Size: {}x{}",
        decoded.image.width(),
        decoded.image.height()
    );
    if let Ok(metadata) = std::fs::metadata(path) {
        let _ = writeln!(out, "File size: {}", human_readable_bytes(metadata.len()));
        if let Ok(modified) = metadata.modified() {
            let _ = writeln!(out, "Modified: {}", format_system_time(modified));
        }
    }
    out
}

fn format_label(format: Option<ImageFormat>) -> String {
    format
        .and_then(|f| f.extensions_str().first())
        .map_or_else(|| "unknown".to_string(), |ext| ext.to_uppercase())
}

/// PIL-style short name for the pixel layout.
fn color_mode_label(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "L16",
        ColorType::La16 => "LA16",
        ColorType::Rgb16 => "RGB16",
        ColorType::Rgba16 => "RGBA16",
        ColorType::Rgb32F => "RGB32F",
        ColorType::Rgba32F => "RGBA32F",
        _ => "unknown",
    }
}

/// Format a byte count with binary units (KiB, MiB, ...).
fn human_readable_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }
    if unit_idx == 0 {
        format!("{bytes} {}", UNITS[unit_idx])
    } else {
        format!("{value:.2} {}", UNITS[unit_idx])
    }
}

/// Format a `SystemTime` as a UTC timestamp string.
fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = DateTime::from(time);
    datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}
