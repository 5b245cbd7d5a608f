//! Encode pipeline backed by the `image` crate.

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::tga::TgaEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Write;
use tracing::debug;

use crate::image_pipeline::codec::types::{CodecConfig, ImageFormat, PngCompression};
use crate::image_pipeline::codec::writer::RawImageWriter;
use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::layout::BasePixelType;
use crate::image_pipeline::raw::RawImage;
use crate::image_pipeline::stream::{CodecIo, Stream};

/// JPEG quality used for every encode.
pub const JPEG_QUALITY: u8 = 90;

pub struct CodecWriter;

fn encode_error(err: impl std::fmt::Display) -> ImageError {
    ImageError::EncodeError(err.to_string())
}

fn color_type(base: BasePixelType) -> ExtendedColorType {
    match base {
        BasePixelType::L => ExtendedColorType::L8,
        BasePixelType::La => ExtendedColorType::La8,
        BasePixelType::Rgb => ExtendedColorType::Rgb8,
        BasePixelType::Rgba => ExtendedColorType::Rgba8,
    }
}

fn compression_type(compression: PngCompression) -> CompressionType {
    match compression {
        PngCompression::Fast => CompressionType::Fast,
        PngCompression::Default => CompressionType::Default,
        PngCompression::Best => CompressionType::Best,
    }
}

impl RawImageWriter for CodecWriter {
    fn write_image(
        &self,
        image: &RawImage<'_>,
        format: ImageFormat,
        output: &mut dyn Stream,
        config: &CodecConfig,
    ) -> Result<()> {
        let base = if format.supports_alpha() {
            image.base_type()
        } else {
            image.base_type().without_alpha()
        };
        let target = base.canonical_depth();

        // Codecs only take 8-bit channels, so everything else goes through a scratch copy.
        let scratch = if image.depth() != target {
            debug!("Remapping {:?} to {:?} for {:?}", image.depth(), target, format);
            Some(image.remapped(target)?)
        } else {
            None
        };
        let pixels = match &scratch {
            Some(converted) => converted.data(),
            None => image.data(),
        };

        let width = u32::from(image.width());
        let height = u32::from(image.height());
        let color = color_type(base);

        let mut io = CodecIo::new(output);
        match format {
            ImageFormat::Png => PngEncoder::new_with_quality(
                &mut io,
                compression_type(config.png_compression),
                FilterType::Adaptive,
            )
            .write_image(pixels, width, height, color),
            ImageFormat::Bmp => BmpEncoder::new(&mut io).write_image(pixels, width, height, color),
            ImageFormat::Tga => TgaEncoder::new(&mut io).write_image(pixels, width, height, color),
            ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut io, JPEG_QUALITY)
                .write_image(pixels, width, height, color),
        }
        .map_err(encode_error)?;
        io.flush().map_err(encode_error)?;

        debug!("Encoded {}x{} {:?} as {:?}", width, height, base, format);
        Ok(())
    }
}
