use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::ops::{ChannelCoefficients, CropBox};

/// Quick one-off raster-image edits: inspect, crop, autocrop, palette,
/// adjust, invert.
#[derive(Parser, Debug)]
#[command(name = "pica", version, about)]
#[command(group = ArgGroup::new("operation").required(true).multiple(false))]
pub struct Cli {
    /// Path to the image file.
    pub image_path: PathBuf,

    /// Print essential information about the image.
    #[arg(long, group = "operation")]
    pub info: bool,

    /// Crop the image to a box defined by two points: (LEFT, TOP, RIGHT, BOTTOM).
    #[arg(
        long,
        group = "operation",
        num_args = 4,
        value_names = ["LEFT", "TOP", "RIGHT", "BOTTOM"],
        allow_negative_numbers = true
    )]
    pub crop: Option<Vec<i64>>,

    /// Crop the image to its non-empty content by removing the uniform
    /// background around it.
    #[arg(long, group = "operation")]
    pub autocrop: bool,

    /// Reduce the image to an adaptive color palette.
    #[arg(long, group = "operation")]
    pub palette: bool,

    /// Multiply the red, green and blue channels by the given coefficients.
    #[arg(
        long,
        group = "operation",
        num_args = 3,
        value_names = ["RED", "GREEN", "BLUE"],
        allow_negative_numbers = true
    )]
    pub adjust: Option<Vec<f32>>,

    /// Invert the color channels of the image.
    #[arg(long, group = "operation")]
    pub invert: bool,

    /// Where to write the result; defaults to a prefixed copy of the input
    /// name in the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// The single operation selected for this invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Info,
    Crop(CropBox),
    Autocrop,
    Palette,
    Adjust(ChannelCoefficients),
    Invert,
}

impl Cli {
    /// Resolve the flag set into one operation. The clap group guarantees
    /// exactly one flag was given.
    pub fn operation(&self) -> Operation {
        if self.info {
            Operation::Info
        } else if let Some(frame) = &self.crop {
            Operation::Crop(CropBox {
                left: frame[0],
                top: frame[1],
                right: frame[2],
                bottom: frame[3],
            })
        } else if self.autocrop {
            Operation::Autocrop
        } else if self.palette {
            Operation::Palette
        } else if let Some(c) = &self.adjust {
            Operation::Adjust(ChannelCoefficients {
                red: c[0],
                green: c[1],
                blue: c[2],
            })
        } else {
            Operation::Invert
        }
    }
}
