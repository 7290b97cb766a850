mod cli;
mod config;
mod error;
mod image;
mod ops;
mod output;

use std::process::ExitCode;

use clap::Parser as _;

use crate::cli::{Cli, Operation};
use crate::config::PicaConfig;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = PicaConfig::load();
    let decoded = image::decode_image_from_path(&cfg, &cli.image_path)?;

    let (result, prefix) = match cli.operation() {
        Operation::Info => {
            print!("{}", image::info_report(&cli.image_path, &decoded));
            return Ok(());
        }
        Operation::Crop(frame) => (ops::crop(&decoded.image, frame)?, "cropped"),
        Operation::Autocrop => (ops::autocrop(&decoded.image)?, "autocropped"),
        Operation::Palette => (
            ops::quantize_to_palette(&decoded.image, &cfg.effective_palette())?,
            "palette",
        ),
        Operation::Adjust(coefficients) => {
            (ops::adjust_channels(&decoded.image, coefficients)?, "adjusted")
        }
        Operation::Invert => (ops::invert_colors(&decoded.image), "inverted"),
    };

    let destination = output::resolve_output_path(&cli.image_path, cli.output.as_deref(), prefix);
    output::save_image(&result, &destination)?;
    println!("Wrote: {}", destination.display());
    Ok(())
}
