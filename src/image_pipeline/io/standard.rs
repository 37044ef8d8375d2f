use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::config::PipelineConfig;
use crate::image_pipeline::io::{ImageFormat, ImageReader, ImageWriter, png_codec, tiff_codec};
use crate::image_pipeline::types::PixelBuffer;

/// Reader that detects PNG or TIFF from the leading bytes.
pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    fn read_image(&self, data: &[u8]) -> Result<PixelBuffer> {
        let format = ImageFormat::sniff(data).ok_or_else(|| {
            PipelineError::UnsupportedFormat("input is neither PNG nor TIFF".to_string())
        })?;
        debug!("Detected {} input", format);

        match format {
            ImageFormat::Png => png_codec::decode(data),
            ImageFormat::Tiff => tiff_codec::decode(data),
        }
    }
}

/// Writer producing 8-bit RGB PNG or TIFF.
pub struct StandardImageWriter;

impl ImageWriter for StandardImageWriter {
    fn write_image(
        &self,
        image: &PixelBuffer,
        format: ImageFormat,
        output: &mut dyn Write,
        config: &PipelineConfig,
    ) -> Result<()> {
        match format {
            ImageFormat::Png => png_codec::encode(image, output),
            ImageFormat::Tiff => tiff_codec::encode(image, output, config),
        }
    }
}

pub(super) fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}
