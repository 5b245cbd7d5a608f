//! Encoded image formats
//!
//! Decoding and encoding go through the [`RawImageReader`] and
//! [`RawImageWriter`] traits. The free functions below run the default
//! `image`-backed implementations with a default [`CodecConfig`].

mod codec_reader;
mod codec_writer;
mod reader;
mod types;
mod writer;

#[cfg(test)]
mod tests;

pub use codec_reader::CodecReader;
pub use codec_writer::{CodecWriter, JPEG_QUALITY};
pub use reader::RawImageReader;
pub use types::{CodecConfig, CodecConfigBuilder, ImageFormat, ImageInfo, PngCompression};
pub use writer::RawImageWriter;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::RawImage;
use crate::image_pipeline::stream::Stream;

/// Reads dimensions and channel count without moving the stream.
pub fn probe(stream: &mut dyn Stream) -> Result<ImageInfo> {
    CodecReader.probe(stream)
}

/// Decodes the image starting at the stream's current position.
pub fn decode(stream: &mut dyn Stream) -> Result<RawImage<'static>> {
    CodecReader.read_image(stream, &CodecConfig::default())
}

pub fn encode(image: &RawImage<'_>, format: ImageFormat, output: &mut dyn Stream) -> Result<()> {
    CodecWriter.write_image(image, format, output, &CodecConfig::default())
}

/// Encodes in the format named by `extension`, falling back to PNG.
pub fn encode_with_extension(
    image: &RawImage<'_>,
    extension: &str,
    output: &mut dyn Stream,
) -> Result<()> {
    encode(image, ImageFormat::from_extension(extension), output)
}
