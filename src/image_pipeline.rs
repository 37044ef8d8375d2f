//! Image processing pipeline module
//!
//! The debayer engine is a pure function over [`PixelBuffer`]s; `io` loads and
//! saves them and `conversions` wires the two together.

pub mod common;
pub mod config;
pub mod conversions;
pub mod debayer;
pub mod io;
pub mod types;

pub use common::{
    PipelineError,
    Result,
};

pub use config::{
    PipelineConfig,
    PipelineConfigBuilder,
    TiffCompression,
};

pub use types::{
    Channel,
    PixelBuffer,
};

pub use debayer::{
    CpuDebayer,
    PixelIdentity,
    debayer,
};

pub use io::{
    ImageFormat,
    ImageReader,
    ImageWriter,
    StandardImageReader,
    StandardImageWriter,
    load_image,
    save_image,
};

pub use conversions::{
    DebayerPipeline,
    PipelineTimings,
};
