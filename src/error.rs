//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, and resize errors, and provides semantic
//! variants for color parsing and pipeline failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid color {value:?}: expected \"transparent\", #RGB, or #RRGGBB")]
    InvalidColor { value: String },

    #[error("resize buffer error: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("processing error: {0}")]
    Processing(String),
}
