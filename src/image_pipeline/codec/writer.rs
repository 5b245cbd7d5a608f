use crate::image_pipeline::codec::types::{CodecConfig, ImageFormat};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::RawImage;
use crate::image_pipeline::stream::Stream;

pub trait RawImageWriter {
    fn write_image(
        &self,
        image: &RawImage<'_>,
        format: ImageFormat,
        output: &mut dyn Stream,
        config: &CodecConfig,
    ) -> Result<()>;
}
