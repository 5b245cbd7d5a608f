use anyhow::{Context, bail};
use rawimage_io::image_pipeline::{CodecConfig, ImagePipeline};
use rawimage_io::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output] = args.as_slice() else {
        bail!("usage: rawimage_io <input> <output>");
    };

    let pipeline = ImagePipeline::new(CodecConfig::default());
    info!("PNG compression: {:?}", pipeline.config().png_compression);

    let timings = pipeline
        .convert_file(input, output)
        .with_context(|| format!("converting {} to {}", input, output))?;

    info!("Conversion successful");
    timings.log_summary();

    Ok(())
}
