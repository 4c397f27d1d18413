//! Default social share image composer.
//!
//! DESIGN
//! ======
//! Layout is computed by `OgLayout::fit` as plain arithmetic so it can be
//! checked without touching pixels. `compose` then paints a white canvas,
//! alpha-composites the resized logo at the computed offset, and flattens to
//! RGB for encoding.
//!
//! The logo sits at three quarters of the free vertical space rather than
//! the center, which keeps it clear of the bottom strip some platforms crop
//! or overlay with captions.

#[cfg(test)]
#[path = "og_image_test.rs"]
mod og_image_test;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, Rgba, RgbaImage, RgbImage};

/// Share of the target width/height the logo may occupy.
pub const LOGO_FRACTION: f64 = 0.45;

/// Vertical placement within the free space (0 = top, 1 = bottom).
pub const VERTICAL_BIAS: f64 = 0.75;

#[derive(Debug, thiserror::Error)]
pub enum OgImageError {
    #[error("source image has zero size ({width}x{height})")]
    ZeroSized { width: u32, height: u32 },
    #[error("target canvas has zero size ({width}x{height})")]
    ZeroTarget { width: u32, height: u32 },
    #[error("image decode/encode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Where and how large the logo lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OgLayout {
    pub canvas: (u32, u32),
    pub source: (u32, u32),
    pub scale: f64,
    pub logo: (u32, u32),
    pub offset: (u32, u32),
}

impl OgLayout {
    /// Fit a `source` sized logo into a `canvas` sized share image.
    ///
    /// # Errors
    ///
    /// Returns [`OgImageError::ZeroSized`] / [`OgImageError::ZeroTarget`]
    /// when either side has no pixels.
    pub fn fit(source: (u32, u32), canvas: (u32, u32)) -> Result<Self, OgImageError> {
        let (w, h) = source;
        let (cw, ch) = canvas;
        if w == 0 || h == 0 {
            return Err(OgImageError::ZeroSized { width: w, height: h });
        }
        if cw == 0 || ch == 0 {
            return Err(OgImageError::ZeroTarget { width: cw, height: ch });
        }

        // The bounding box is whole pixels before the scale is taken.
        let box_w = f64::from(truncate(f64::from(cw) * LOGO_FRACTION));
        let box_h = f64::from(truncate(f64::from(ch) * LOGO_FRACTION));
        let scale = (box_w / f64::from(w)).min(box_h / f64::from(h));
        let logo = (scaled(w, scale), scaled(h, scale));
        let x = (cw - logo.0) / 2;
        let y = truncate(f64::from(ch - logo.1) * VERTICAL_BIAS);

        Ok(Self { canvas, source, scale, logo, offset: (x, y) })
    }

    /// Human-readable report printed after writing the image.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "canvas {}x{}\nlogo {}x{} -> {}x{} (scale {:.4})\noffset x={} y={}",
            self.canvas.0,
            self.canvas.1,
            self.source.0,
            self.source.1,
            self.logo.0,
            self.logo.1,
            self.scale,
            self.offset.0,
            self.offset.1
        )
    }
}

/// Truncate a scaled dimension to whole pixels, keeping at least one.
fn scaled(side: u32, scale: f64) -> u32 {
    truncate(f64::from(side) * scale).max(1)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> u32 {
    value.floor().max(0.0) as u32
}

/// Paint `logo` onto a white canvas according to `layout`.
#[must_use]
pub fn compose(logo: &DynamicImage, layout: &OgLayout) -> RgbImage {
    let (cw, ch) = layout.canvas;
    let mut canvas = RgbaImage::from_pixel(cw, ch, Rgba([255, 255, 255, 255]));
    let resized = logo.resize_exact(layout.logo.0, layout.logo.1, FilterType::Lanczos3).to_rgba8();
    imageops::overlay(&mut canvas, &resized, i64::from(layout.offset.0), i64::from(layout.offset.1));
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Encode as PNG with the strongest compression.
///
/// # Errors
///
/// Returns [`OgImageError::Image`] if encoding fails.
pub fn write_png<W: Write>(image: &RgbImage, writer: W) -> Result<(), OgImageError> {
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)?;
    Ok(())
}

/// Read `input`, compose the share image and write it to `output`.
///
/// # Errors
///
/// Returns [`OgImageError`] if the source cannot be decoded, has no pixels,
/// or the output cannot be written.
pub fn generate(input: &Path, output: &Path, canvas: (u32, u32)) -> Result<OgLayout, OgImageError> {
    let logo = image::open(input)?;
    let layout = OgLayout::fit(logo.dimensions(), canvas)?;
    let composed = compose(&logo, &layout);

    let mut writer = BufWriter::new(File::create(output)?);
    write_png(&composed, &mut writer)?;
    writer.flush()?;
    Ok(layout)
}
