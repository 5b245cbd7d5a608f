//! Decode pipeline backed by the `image` crate.
//!
//! Decoding happens in two passes over the stream. The probe pass reads just
//! enough to learn dimensions and channel count and then rewinds; the decode
//! pass streams pixels straight into a freshly allocated [`RawImage`].

use std::io::{BufReader, SeekFrom};

use image::{DynamicImage, ImageDecoder, ImageReader};
use tracing::{debug, warn};

use crate::image_pipeline::codec::reader::RawImageReader;
use crate::image_pipeline::codec::types::{CodecConfig, ImageFormat, ImageInfo};
use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::layout::BasePixelType;
use crate::image_pipeline::raw::RawImage;
use crate::image_pipeline::stream::{CodecIo, Stream};

pub struct CodecReader;

fn decode_error(err: impl std::fmt::Display) -> ImageError {
    ImageError::DecodeError(err.to_string())
}

/// Opens a codec decoder positioned at the stream's current offset.
///
/// TGA has no signature, so anything unrecognized is handed to the TGA
/// decoder as a last resort.
fn open_decoder<'s>(
    stream: &'s mut dyn Stream,
) -> Result<(impl ImageDecoder + 's, Option<ImageFormat>)> {
    let io = CodecIo::anchored(stream)?;
    let mut reader = ImageReader::new(BufReader::new(io))
        .with_guessed_format()
        .map_err(decode_error)?;

    let format = match reader.format() {
        Some(format) => format,
        None => {
            reader.set_format(image::ImageFormat::Tga);
            image::ImageFormat::Tga
        }
    };
    debug!("Opening {:?} decoder", format);

    let decoder = reader.into_decoder().map_err(decode_error)?;
    Ok((decoder, ImageFormat::from_codec(format)))
}

impl CodecReader {
    fn validate_dimensions(&self, width: u32, height: u32, config: &CodecConfig) -> Result<(u16, u16)> {
        let invalid = || ImageError::InvalidDimensions(width as usize, height as usize);

        let w = u16::try_from(width).map_err(|_| invalid())?;
        let h = u16::try_from(height).map_err(|_| invalid())?;

        if config.validate_dimensions && (w == 0 || h == 0) {
            return Err(invalid());
        }

        if let Some(max) = config.max_dimension {
            if w > max || h > max {
                warn!("Image dimensions {}x{} exceed maximum {}", w, h, max);
                return Err(invalid());
            }
        }

        Ok((w, h))
    }
}

impl RawImageReader for CodecReader {
    fn probe(&self, stream: &mut dyn Stream) -> Result<ImageInfo> {
        let start = stream.position()?;

        let info = open_decoder(stream).map(|(decoder, format)| {
            let (width, height) = decoder.dimensions();
            ImageInfo {
                width,
                height,
                channels: decoder.color_type().channel_count(),
                format,
            }
        });

        stream.seek(SeekFrom::Start(start))?;
        info
    }

    fn read_image(&self, stream: &mut dyn Stream, config: &CodecConfig) -> Result<RawImage<'static>> {
        let info = self.probe(stream)?;
        debug!(
            "Probed image: {}x{}, {} channels, {:?}",
            info.width, info.height, info.channels, info.format
        );

        let base = BasePixelType::from_channels(info.channels)
            .ok_or(ImageError::UnsupportedChannels(info.channels))?;
        let (width, height) = self.validate_dimensions(info.width, info.height, config)?;

        let mut image = RawImage::new(width, height, base.canonical_depth())?;

        let (decoder, _) = open_decoder(stream)?;
        let color = decoder.color_type();
        if color.channel_count() != info.channels || decoder.dimensions() != (info.width, info.height) {
            return Err(ImageError::DecodeError(
                "image header changed between probe and decode".to_string(),
            ));
        }

        if color.bytes_per_pixel() == color.channel_count() {
            if decoder.total_bytes() != image.data_length() as u64 {
                return Err(ImageError::DecodeError(format!(
                    "codec produces {} bytes, buffer holds {}",
                    decoder.total_bytes(),
                    image.data_length()
                )));
            }
            decoder.read_image(image.data_mut()).map_err(decode_error)?;
        } else {
            // Wider samples go through the codec's own conversion down to 8 bits.
            debug!("Narrowing {:?} to 8 bits per channel", color);
            let decoded = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
            let narrowed = match base {
                BasePixelType::L => decoded.into_luma8().into_raw(),
                BasePixelType::La => decoded.into_luma_alpha8().into_raw(),
                BasePixelType::Rgb => decoded.into_rgb8().into_raw(),
                BasePixelType::Rgba => decoded.into_rgba8().into_raw(),
            };
            if narrowed.len() != image.data_length() {
                return Err(ImageError::DecodeError(format!(
                    "codec produced {} bytes, buffer holds {}",
                    narrowed.len(),
                    image.data_length()
                )));
            }
            image.data_mut().copy_from_slice(&narrowed);
        }

        debug!("Decoded {}x{} {:?}", width, height, image.depth());
        Ok(image)
    }
}
