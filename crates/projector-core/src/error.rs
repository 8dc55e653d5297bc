use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid zoom config: {0}")]
    InvalidZoomConfig(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, ProjectorError>;
