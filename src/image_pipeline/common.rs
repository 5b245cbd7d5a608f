//! Common utilities module
//!
//! This module contains the error types shared across the image pipeline.

pub mod error;

pub use error::{ImageError, LayoutError, Result};
