use std::fs::File;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    codec::{CodecConfig, CodecReader, CodecWriter, ImageFormat, RawImageReader, RawImageWriter},
    common::error::Result,
    conversions::timing::PipelineTimings,
    raw::RawImage,
    stream::{IoStream, Stream},
};

/// Runs decode and encode through a reader/writer pair with one shared config.
pub struct ImagePipeline<R: RawImageReader, W: RawImageWriter> {
    reader: R,
    writer: W,
    config: CodecConfig,
}

impl ImagePipeline<CodecReader, CodecWriter> {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            reader: CodecReader,
            writer: CodecWriter,
            config,
        }
    }
}

impl Default for ImagePipeline<CodecReader, CodecWriter> {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl<R: RawImageReader, W: RawImageWriter> ImagePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CodecConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input))]
    pub fn decode(&self, input: &mut dyn Stream) -> Result<RawImage<'static>> {
        let image = self.reader.read_image(input, &self.config)?;
        info!(
            width = image.width(),
            height = image.height(),
            depth = ?image.depth(),
            "Decoded image"
        );
        Ok(image)
    }

    #[instrument(skip(self, image, output), fields(width = image.width(), height = image.height()))]
    pub fn encode(&self, image: &RawImage<'_>, format: ImageFormat, output: &mut dyn Stream) -> Result<()> {
        self.writer.write_image(image, format, output, &self.config)?;
        info!("Encoded image as {:?}", format);
        Ok(())
    }

    /// Encodes in the format named by `extension`; unknown names select PNG.
    pub fn encode_with_extension(
        &self,
        image: &RawImage<'_>,
        extension: &str,
        output: &mut dyn Stream,
    ) -> Result<()> {
        self.encode(image, ImageFormat::from_extension(extension), output)
    }

    /// Decodes `input` and re-encodes it into `output` as `format`.
    pub fn transcode(&self, input: &mut dyn Stream, output: &mut dyn Stream, format: ImageFormat) -> Result<()> {
        self.transcode_with_timings(input, output, format).map(|_| ())
    }

    #[instrument(skip(self, input, output))]
    pub fn transcode_with_timings(
        &self,
        input: &mut dyn Stream,
        output: &mut dyn Stream,
        format: ImageFormat,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();

        let image = {
            let _span = tracing::info_span!("decode").entered();
            timings.measure("decode", || self.reader.read_image(input, &self.config))?
        };

        {
            let _span = tracing::info_span!("encode", format = ?format).entered();
            timings.measure("encode", || {
                self.writer.write_image(&image, format, output, &self.config)
            })?;
        }

        info!(
            "Transcode complete: {}x{} in {:.3}ms",
            image.width(),
            image.height(),
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Transcodes between two files, choosing the output format from
    /// `output_path`'s extension.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let format = ImageFormat::from_extension(
            output_path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or(""),
        );

        let mut timings = PipelineTimings::new();
        let input = timings.measure("open_input", || File::open(input_path))?;
        let output = timings.measure("create_output", || File::create(output_path))?;

        let steps = self.transcode_with_timings(
            &mut IoStream::new(input),
            &mut IoStream::new(output),
            format,
        )?;
        for step in steps.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        Ok(timings)
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CodecConfig) {
        self.config = config;
    }
}
