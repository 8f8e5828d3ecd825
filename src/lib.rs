//! SVG to LVGL image converter
//!
//! Renders an SVG offline and packs the result into an RGB565 pixel array
//! plus an `lv_img_dsc_t` descriptor, emitted as a C source unit ready to
//! compile straight into an LVGL firmware build. No display or LVGL runtime
//! is involved at any point.
//!
//! # Features
//!
//! - **RGB565 packing**: 8-bit channels truncated to 5-6-5 words
//! - **Optional alpha plane**: byte-array output carrying per-pixel opacity
//! - **Swappable backends**: rasterizing sits behind the [`Rasterizer`]
//!   trait; the default backend uses resvg/tiny-skia
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use svg2lvgl::{convert, ConvertConfig, SvgRasterizer, TargetSize};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConvertConfig {
//!     var_name: "wifi_icon".to_string(),
//!     size: Some(TargetSize { width: 32, height: 32 }),
//!     use_alpha: true,
//! };
//!
//! let rasterizer = SvgRasterizer::new();
//! let desc = convert(
//!     &rasterizer,
//!     Path::new("wifi.svg"),
//!     Path::new("wifi_icon.c"),
//!     &config,
//! )?;
//! println!("emitted {}x{}, {} bytes", desc.width, desc.height, desc.data_size);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use log::debug;

pub mod error;
pub use error::{Error, Result};

// Rasterizing backends (vector source -> straight RGBA samples)
pub mod raster;
pub use raster::{RasterImage, Rasterizer, SvgRasterizer};

// RGB565 packing
pub mod encode;
pub use encode::{encode, rgb565, ColorFormat, EncodedImage, ImageDescriptor};

// C source serialization
pub mod emit;
pub use emit::{generate_c_source, is_valid_c_identifier, write_c_source};

/// Requested output dimensions in pixels
#[derive(Debug, Clone, Copy)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

/// Configuration for a single conversion
///
/// `var_name` becomes the C identifier of the emitted descriptor; the pixel
/// array is named `<var_name>_map`. When `size` is `None` the source is
/// rendered at its native dimensions.
///
/// # Examples
///
/// ```
/// let config = svg2lvgl::ConvertConfig {
///     var_name: "badge".to_string(),
///     size: None,
///     use_alpha: false,
/// };
/// assert_eq!(config.var_name, "badge");
/// ```
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// C identifier for the descriptor symbol
    pub var_name: String,
    /// Output dimensions; `None` renders at the source's native size
    pub size: Option<TargetSize>,
    /// Emit a per-pixel opacity plane alongside the color words
    pub use_alpha: bool,
}

/// Run the full pipeline: rasterize `source`, encode it, and write the C
/// source unit to `dest`.
///
/// The existence of `source` is checked before the backend is invoked, so a
/// missing input never creates or touches `dest`. On success the returned
/// descriptor reports the emitted dimensions and payload size.
pub fn convert<R: Rasterizer>(
    rasterizer: &R,
    source: &Path,
    dest: &Path,
    config: &ConvertConfig,
) -> Result<ImageDescriptor> {
    if !source.exists() {
        return Err(Error::SourceNotFound(source.display().to_string()));
    }

    let image = rasterizer.rasterize(source, config.size)?;
    let encoded = encode::encode(&image, config);
    let text = emit::generate_c_source(&encoded);
    emit::write_c_source(dest, &text)?;

    debug!(
        "converted {} -> {} ({}x{}, {} bytes)",
        source.display(),
        dest.display(),
        encoded.descriptor.width,
        encoded.descriptor.height,
        encoded.descriptor.data_size
    );
    Ok(encoded.descriptor)
}
