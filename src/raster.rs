//! Rasterization adapter: turns a vector source into a grid of RGBA samples.
//!
//! The encoder only ever sees a [`RasterImage`]; everything about parsing and
//! rendering SVG lives behind the [`Rasterizer`] trait so tests can feed
//! synthetic images and other backends can be swapped in.

use std::path::Path;

use log::debug;
use resvg::tiny_skia;
use resvg::usvg;

use crate::{Error, Result, TargetSize};

/// A decoded raster image: straight (non-premultiplied) 8-bit RGBA samples
/// in row-major order, top row first, left-to-right within a row.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap a flat RGBA buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "RGBA buffer length does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Iterate over pixels as `[R, G, B, A]` slices in row-major order.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(4)
    }
}

/// Backend interface for producing a [`RasterImage`] from a vector source.
///
/// `size` carries the requested output dimensions; when `None` the backend
/// renders at the source's native size. The returned image reports its
/// concrete dimensions, which are authoritative for the rest of the pipeline.
pub trait Rasterizer {
    fn rasterize(&self, source: &Path, size: Option<TargetSize>) -> Result<RasterImage>;
}

/// SVG rasterizer backed by resvg/tiny-skia.
#[derive(Debug, Default)]
pub struct SvgRasterizer;

impl SvgRasterizer {
    pub fn new() -> Self {
        SvgRasterizer
    }

    /// Render in-memory SVG data to straight RGBA samples.
    pub fn rasterize_data(&self, svg_data: &[u8], size: Option<TargetSize>) -> Result<RasterImage> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| Error::DecodeError(format!("SVG parse failed: {}", e)))?;

        let (width, height, transform) = match size {
            Some(target) => {
                let svg_size = tree.size();
                let sx = target.width as f32 / svg_size.width();
                let sy = target.height as f32 / svg_size.height();
                (
                    target.width,
                    target.height,
                    tiny_skia::Transform::from_scale(sx, sy),
                )
            }
            None => {
                let native = tree.size().to_int_size();
                (
                    native.width(),
                    native.height(),
                    tiny_skia::Transform::identity(),
                )
            }
        };

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::DecodeError(format!("cannot allocate a {}x{} pixel buffer", width, height))
        })?;
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // tiny-skia stores premultiplied RGBA; convert to straight RGBA so the
        // encoder sees the same samples a plain PNG decode would yield.
        let mut data = pixmap.take();
        for chunk in data.chunks_exact_mut(4) {
            let a = chunk[3] as f32 / 255.0;
            if a > 0.0 {
                chunk[0] = (chunk[0] as f32 / a).min(255.0) as u8;
                chunk[1] = (chunk[1] as f32 / a).min(255.0) as u8;
                chunk[2] = (chunk[2] as f32 / a).min(255.0) as u8;
            }
        }

        debug!("rasterized SVG to {}x{}", width, height);
        Ok(RasterImage::new(width, height, data))
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, source: &Path, size: Option<TargetSize>) -> Result<RasterImage> {
        let svg_data = std::fs::read(source).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::SourceNotFound(source.display().to_string()),
            _ => Error::DecodeError(format!("{}: {}", source.display(), e)),
        })?;
        self.rasterize_data(&svg_data, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Oversized rect so every pixel inside the canvas is fully covered and
    // the rendered samples are exact, with no edge antialiasing in view.
    const RED_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2" viewBox="0 0 2 2"><rect x="-2" y="-2" width="6" height="6" fill="#ff0000"/></svg>"##;

    #[test]
    fn raster_image_is_row_major() {
        // 2x1: left pixel red, right pixel green
        let img = RasterImage::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255]);
        let pixels: Vec<&[u8]> = img.pixels().collect();
        assert_eq!(pixels.len(), 2);
        assert_eq!(pixels[0], &[255, 0, 0, 255]);
        assert_eq!(pixels[1], &[0, 255, 0, 255]);
    }

    #[test]
    #[should_panic]
    fn raster_image_rejects_short_buffer() {
        let _ = RasterImage::new(2, 2, vec![0; 3]);
    }

    #[test]
    fn svg_native_size_is_used_without_hints() {
        let img = SvgRasterizer::new()
            .rasterize_data(RED_SVG.as_bytes(), None)
            .expect("rasterize failed");
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel_count(), 4);
    }

    #[test]
    fn svg_solid_fill_renders_opaque_red() {
        let img = SvgRasterizer::new()
            .rasterize_data(RED_SVG.as_bytes(), None)
            .expect("rasterize failed");
        for px in img.pixels() {
            assert_eq!(px, &[255, 0, 0, 255]);
        }
    }

    #[test]
    fn svg_scales_to_requested_size() {
        let target = TargetSize {
            width: 5,
            height: 3,
        };
        let img = SvgRasterizer::new()
            .rasterize_data(RED_SVG.as_bytes(), Some(target))
            .expect("rasterize failed");
        assert_eq!(img.width(), 5);
        assert_eq!(img.height(), 3);
        for px in img.pixels() {
            assert_eq!(px, &[255, 0, 0, 255]);
        }
    }

    #[test]
    fn invalid_svg_is_a_decode_error() {
        let err = SvgRasterizer::new()
            .rasterize_data(b"not an svg at all", None)
            .unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }
}
