//! Pixel encoder: RGB565 packing, alpha plane extraction, descriptor metadata.
//!
//! This is the exacting part of the pipeline. Every packed word and the
//! descriptor's `data_size` must agree with what the emitter writes, because
//! the consuming library trusts those values at load time.

use crate::raster::RasterImage;
use crate::ConvertConfig;

/// LVGL color format tag carried in the image descriptor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    TrueColor,
    TrueColorAlpha,
}

impl ColorFormat {
    /// The `lv_img_cf_t` constant name emitted into the descriptor.
    pub fn c_name(&self) -> &'static str {
        match self {
            ColorFormat::TrueColor => "LV_IMG_CF_TRUE_COLOR",
            ColorFormat::TrueColorAlpha => "LV_IMG_CF_TRUE_COLOR_ALPHA",
        }
    }
}

/// Metadata describing a packed image buffer, mirroring `lv_img_dsc_t`.
#[derive(Debug, Clone)]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
    pub color_format: ColorFormat,
    /// Total bytes the emitter writes: 2 per pixel, plus 1 per pixel when an
    /// alpha plane is present.
    pub data_size: usize,
    /// C identifier for the descriptor symbol; the data array is named
    /// `<var_name>_map`.
    pub var_name: String,
}

impl ImageDescriptor {
    /// Symbol name of the packed data array.
    pub fn map_symbol(&self) -> String {
        format!("{}_map", self.var_name)
    }
}

/// A fully encoded image: packed color words, optional alpha plane, and the
/// descriptor the emitter serializes alongside them.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// One RGB565 word per pixel, row-major.
    pub color: Vec<u16>,
    /// One verbatim alpha byte per pixel, present iff alpha mode is on.
    pub alpha: Option<Vec<u8>>,
    pub descriptor: ImageDescriptor,
}

/// Pack 8-bit RGB into a 5-6-5 word: R in the top 5 bits, G in the middle 6,
/// B in the low 5. Channels are truncated, never rounded.
pub fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Encode a raster image per the conversion config.
///
/// Color is always packed to RGB565 in row-major order. When
/// `config.use_alpha` is set the source alpha samples are carried through
/// unmodified as a separate one-byte-per-pixel plane; otherwise they are
/// discarded and opaque and transparent images encode identically.
pub fn encode(image: &RasterImage, config: &ConvertConfig) -> EncodedImage {
    let pixel_count = image.pixel_count();
    let mut color = Vec::with_capacity(pixel_count);
    let mut alpha = config.use_alpha.then(|| Vec::with_capacity(pixel_count));

    for px in image.pixels() {
        color.push(rgb565(px[0], px[1], px[2]));
        if let Some(plane) = alpha.as_mut() {
            plane.push(px[3]);
        }
    }

    let data_size = color.len() * 2 + alpha.as_ref().map_or(0, Vec::len);
    let color_format = if config.use_alpha {
        ColorFormat::TrueColorAlpha
    } else {
        ColorFormat::TrueColor
    };

    EncodedImage {
        color,
        alpha,
        descriptor: ImageDescriptor {
            width: image.width(),
            height: image.height(),
            color_format,
            data_size,
            var_name: config.var_name.clone(),
        },
    }
}
