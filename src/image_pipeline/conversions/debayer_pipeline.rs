use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::error::{PipelineError, Result},
    config::PipelineConfig,
    conversions::timing::{PipelineTimings, Timer},
    debayer::CpuDebayer,
    io::{ImageFormat, ImageReader, ImageWriter, StandardImageReader, StandardImageWriter},
    types::PixelBuffer,
};

/// Load -> debayer -> save, with pluggable codecs.
pub struct DebayerPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl DebayerPipeline<StandardImageReader, StandardImageWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> DebayerPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(PipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Runs the debayer engine with this pipeline's parallelism setting.
    pub fn debayer(&self, image: &PixelBuffer) -> PixelBuffer {
        CpuDebayer::with_parallel(self.config.parallel).process(image)
    }

    pub fn convert(&self, input_data: &[u8], format: ImageFormat, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, format, output)?;
        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        format: ImageFormat,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting debayer conversion");

        let timer = Timer::start("decode");
        let mosaic = self.reader.read_image(input_data)?;
        timings.record(timer);

        let timer = Timer::start("validate_dimensions");
        self.validate_dimensions(mosaic.width(), mosaic.height())?;
        timings.record(timer);

        let timer = Timer::start("debayer");
        let rgb = self.debayer(&mosaic);
        timings.record(timer);

        let timer = Timer::start("encode");
        self.writer.write_image(&rgb, format, output, &self.config)?;
        timings.record(timer);

        info!(
            width = rgb.width(),
            height = rgb.height(),
            "Conversion complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_path: Q) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path)?;
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let format = match self.config.output_format {
            Some(format) => format,
            None => ImageFormat::from_path(output_path)?,
        };

        let timer = Timer::start("read_input_file");
        let input_data = std::fs::read(input_path).map_err(|e| {
            PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;
        timings.record(timer);

        // Nothing touches the output path until the conversion has succeeded
        let mut encoded = Vec::new();
        let conversion = self.convert_with_timings(&input_data, format, &mut encoded)?;
        timings.extend(conversion);

        let timer = Timer::start("write_output_file");
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(output_path, &encoded).map_err(|e| {
            PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        timings.record(timer);

        Ok(timings)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
