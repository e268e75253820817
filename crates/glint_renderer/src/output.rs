//! Image output: gamma correction, quantization, and file writing.
//!
//! `.ppm` files are written as plain-text P3 rasters; `.png` goes through
//! the `image` crate.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use glint_math::{Color, Interval};
use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct, clamp and scale one linear channel to [0, 255].
#[inline]
pub fn quantize(linear: f32) -> u8 {
    (255.99 * Interval::UNIT.clamp(linear_to_gamma(linear))) as u8
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Write the image as an ASCII PPM (P3): header, then one `R G B` line per
/// pixel, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}

/// Save the image, picking the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(image, &mut writer)?;
            writer.flush()?;
        }
        "png" => {
            let png = image::RgbImage::from_fn(image.width, image.height, |x, y| {
                image::Rgb(color_to_rgb(image.get(x, y)))
            });
            png.save(path)?;
        }
        _ => return Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }

    log::info!("Image saved as {}", path.display());
    Ok(())
}
