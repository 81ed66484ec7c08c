//! Error type for asset generation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
