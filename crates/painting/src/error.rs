use stipple_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Invalid image {width}x{height}: {reason}")]
    InvalidImage {
        width: u32,
        height: u32,
        reason: String,
    },
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Invalid brush config: {0}")]
    Config(#[from] ConfigError),
}
