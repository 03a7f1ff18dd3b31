extern crate image as image_rs;

use thiserror::Error;
use crate::Float;

pub type Result<T> = std::result::Result<T, PanoramaError>;

/**
 * Recoverable failures of the stitching pipeline.
 * Contract violations (wrong channel count, empty images) panic instead.
 */
#[derive(Debug, Error)]
pub enum PanoramaError {
    #[error("insufficient matches: found {found}, need at least {needed}")]
    InsufficientMatches { found: usize, needed: usize },

    #[error("linear system is singular")]
    SingularSystem,

    #[error("stitched canvas of {width}x{height} exceeds the maximum dimension of {max}", max = crate::stitching::MAX_CANVAS_DIMENSION)]
    CanvasTooLarge { width: Float, height: Float },

    #[error("image error: {0}")]
    Image(#[from] image_rs::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error)
}
