//! A 2D preview image represented as a flat array of RGBA pixels.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Errors from writing a preview image to disk.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// Failed to create or write the output file.
    #[error("failed to write preview image: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to encode the PNG stream.
    #[error("failed to encode preview image: {0}")]
    Encode(#[from] png::EncodingError),
}

/// A terrain preview image, stored as row-major RGBA pixels.
#[derive(Clone, Debug)]
pub struct PreviewImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl PreviewImage {
    /// Create a new black (all-zero) image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx] = r;
        self.pixels[idx + 1] = g;
        self.pixels[idx + 2] = b;
        self.pixels[idx + 3] = a;
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let idx = ((y * self.width + x) * 4) as usize;
        (
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    /// Write the image to `path` as an 8-bit RGBA PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), PreviewError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(&self.pixels)?;
        Ok(())
    }
}
