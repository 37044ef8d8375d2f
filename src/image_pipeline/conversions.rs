//! Pipeline conversions module
//!
//! Orchestrates decode -> debayer -> encode over the I/O collaborator.

mod debayer_pipeline;
mod timing;


pub use debayer_pipeline::DebayerPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
