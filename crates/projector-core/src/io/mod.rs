pub mod image_io;

pub use image_io::{image_size, load_image, LoadedImage};
