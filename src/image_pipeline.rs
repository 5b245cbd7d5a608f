//! Image processing pipeline module
//!
//! This module provides raw raster buffers with explicit pixel layouts, the
//! stream abstraction they are read from and written to, and the decode and
//! encode pipelines that move pixels between the two.

pub mod codec;
pub mod common;
pub mod conversions;
pub mod layout;
pub mod raw;
pub mod stream;

pub use common::{ImageError, LayoutError, Result};

pub use layout::{BasePixelType, ColorSpace, PixelDepth, calculate_image_length, remap};

pub use raw::{PixelBuffer, RawImage};

pub use stream::{CodecIo, IoStream, MemoryStream, Stream};

pub use codec::{
    CodecConfig, CodecConfigBuilder, CodecReader, CodecWriter, ImageFormat, ImageInfo,
    PngCompression, RawImageReader, RawImageWriter, decode, encode, encode_with_extension, probe,
};

pub use conversions::{ImagePipeline, PipelineTimings};
