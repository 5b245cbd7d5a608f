use crate::image_pipeline::codec::types::{CodecConfig, ImageInfo};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::RawImage;
use crate::image_pipeline::stream::Stream;

pub trait RawImageReader {
    /// Reads dimensions and channel count, leaving the stream where it was.
    fn probe(&self, stream: &mut dyn Stream) -> Result<ImageInfo>;

    fn read_image(&self, stream: &mut dyn Stream, config: &CodecConfig) -> Result<RawImage<'static>>;
}
