//! Pipeline conversions module
//!
//! Orchestrates decode and encode through the codec traits and records how
//! long each step takes.

mod pipeline;
mod timing;


pub use pipeline::ImagePipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
