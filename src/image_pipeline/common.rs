//! Common utilities module
//!
//! Shared by the codecs, the debayer engine and the pipeline.

pub mod error;

pub use error::{PipelineError, Result};
