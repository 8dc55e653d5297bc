use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{ProjectorError, Result};
use crate::geometry::Size;

/// A decoded source image with its natural size.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub size: Size,
    pub pixels: RgbaImage,
}

impl LoadedImage {
    /// Pixels scaled down so neither side exceeds `max_side`, keeping the
    /// aspect ratio. `size` still reports the natural dimensions.
    pub fn fit_within(self, max_side: u32) -> RgbaImage {
        let (w, h) = self.pixels.dimensions();
        let longest = w.max(h);
        if max_side == 0 || longest <= max_side {
            return self.pixels;
        }
        let scale = max_side as f64 / longest as f64;
        let nw = ((w as f64 * scale).round() as u32).max(1);
        let nh = ((h as f64 * scale).round() as u32).max(1);
        imageops::resize(&self.pixels, nw, nh, FilterType::Triangle)
    }
}

/// Read the natural dimensions from the file header without decoding pixels.
pub fn image_size(path: &Path) -> Result<Size> {
    let (w, h) = image::image_dimensions(path)?;
    checked_size(w, h)
}

/// Decode an image file to 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let pixels = image::open(path)?.to_rgba8();
    let (w, h) = pixels.dimensions();
    let size = checked_size(w, h)?;
    Ok(LoadedImage { size, pixels })
}

fn checked_size(width: u32, height: u32) -> Result<Size> {
    if width == 0 || height == 0 {
        return Err(ProjectorError::InvalidDimensions { width, height });
    }
    Ok(Size::new(width as f64, height as f64))
}
