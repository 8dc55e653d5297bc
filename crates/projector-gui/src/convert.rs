use projector_core::io::LoadedImage;

/// Longest texture side uploaded to the GPU; larger images are downsampled.
pub const MAX_TEXTURE_SIDE: u32 = 8192;

/// Convert a decoded RGBA image to an egui ColorImage.
pub fn loaded_to_color_image(loaded: LoadedImage) -> egui::ColorImage {
    let pixels = loaded.fit_within(MAX_TEXTURE_SIDE);
    let size = [pixels.width() as usize, pixels.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_raw())
}
