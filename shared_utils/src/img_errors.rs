//! Shared Image Conversion Error Types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgConvertError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("WebP encoding failed: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Quality must be within 0-100, got {0}")]
    InvalidQuality(u8),

    #[error("No source extensions configured")]
    NoExtensions,

    #[error("Report name must be a plain file name, got {0:?}")]
    InvalidReportName(String),

    #[error("Image has no pixels")]
    EmptyImage,
}

pub type Result<T> = std::result::Result<T, ImgConvertError>;
