//! Pixel layout model
//!
//! Pure computation over pixel layout tags: bytes per pixel, buffer lengths
//! and depth-to-depth conversion.

mod remap;
pub mod types;

pub use remap::{calculate_image_length, can_remap, remap};
pub use types::{BasePixelType, ColorSpace, PixelDepth};
