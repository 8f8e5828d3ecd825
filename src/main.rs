//! svg2lvgl - SVG to LVGL C array converter
//!
//! Renders an SVG offline and writes a C source unit containing an RGB565
//! pixel array and an `lv_img_dsc_t` descriptor for it.
//!
//! # Usage
//!
//! ```bash
//! # Native size, color only
//! svg2lvgl logo.svg logo_img.c logo_img
//!
//! # Scaled to 64x48, with a per-pixel alpha plane
//! svg2lvgl logo.svg logo_img.c logo_img 64 48 --alpha
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use svg2lvgl::{convert, ConvertConfig, SvgRasterizer, TargetSize};

#[derive(Parser)]
#[command(name = "svg2lvgl")]
#[command(about = "Convert an SVG file to an LVGL-compatible C array")]
#[command(version)]
struct Cli {
    /// Input SVG file
    svg_file: PathBuf,

    /// Output C file
    output_file: PathBuf,

    /// C identifier for the generated image descriptor
    #[arg(value_parser = c_identifier)]
    var_name: String,

    /// Output width in pixels (only honored together with HEIGHT)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Output height in pixels (only honored together with WIDTH)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Emit per-pixel alpha alongside the color data
    #[arg(long)]
    alpha: bool,
}

fn c_identifier(s: &str) -> std::result::Result<String, String> {
    if svg2lvgl::is_valid_c_identifier(s) {
        Ok(s.to_string())
    } else {
        Err(format!("'{}' is not a valid C identifier", s))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let size = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Some(TargetSize { width, height }),
        (None, None) => None,
        _ => {
            eprintln!("Warning: both width and height are required to resize; using the SVG's native size");
            None
        }
    };

    let config = ConvertConfig {
        var_name: cli.var_name,
        size,
        use_alpha: cli.alpha,
    };

    let rasterizer = SvgRasterizer::new();
    let desc = convert(&rasterizer, &cli.svg_file, &cli.output_file, &config)?;

    println!(
        "Successfully converted {} -> {} ({}x{}){}",
        cli.svg_file.display(),
        cli.output_file.display(),
        desc.width,
        desc.height,
        if cli.alpha { " with alpha" } else { "" }
    );
    Ok(())
}
