//! Raw image buffer module
//!
//! This module provides the in-memory raster representation: a pixel buffer
//! that is either owned or borrowed from the caller, tagged with its layout.

mod buffer;
mod raw_image;
mod wire;

pub use buffer::PixelBuffer;
pub use raw_image::RawImage;
