use thiserror::Error;

use crate::image_pipeline::layout::PixelDepth;

/// Violations of the buffer layout contract between callers and the layout model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("No remap rule from {from:?} to {to:?}")]
    UnsupportedRemap { from: PixelDepth, to: PixelDepth },
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Layout contract violated: {0}")]
    LayoutError(#[from] LayoutError),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u8),

    #[error("Failed to allocate {0} bytes for image buffer")]
    AllocationError(usize),

    #[error("Invalid raw image header: {0}")]
    InvalidHeader(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImageError>;
