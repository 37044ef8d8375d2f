//! Pipeline configuration types

use crate::image_pipeline::io::ImageFormat;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for a load -> debayer -> save run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Compression used when the output is written as TIFF
    pub tiff_compression: TiffCompression,
    /// Spread output rows across the rayon thread pool
    pub parallel: bool,
    /// Reject empty images and images larger than `max_dimension`
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
    /// Output encoding; `None` derives it from the output path extension
    pub output_format: Option<ImageFormat>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tiff_compression: TiffCompression::None,
            parallel: true,
            validate_dimensions: false,
            max_dimension: None,
            output_format: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    tiff_compression: Option<TiffCompression>,
    parallel: Option<bool>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    output_format: Option<Option<ImageFormat>>,
}

impl PipelineConfigBuilder {
    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn output_format(mut self, format: Option<ImageFormat>) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
            parallel: self.parallel.unwrap_or(default.parallel),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            output_format: self.output_format.unwrap_or(default.output_format),
        }
    }
}
