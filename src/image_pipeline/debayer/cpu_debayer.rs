use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::debayer::kernels::demosaic_pixel;
use crate::image_pipeline::types::{CHANNELS, PixelBuffer};

/// Bilinear RGGB debayer running on the CPU.
///
/// Every output pixel depends only on a 3x3 window of the input, so rows are
/// filled independently; with `parallel` set they are spread over the rayon
/// pool, each worker owning a disjoint slice of the output.
#[derive(Debug, Clone, Copy)]
pub struct CpuDebayer {
    parallel: bool,
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl CpuDebayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(parallel: bool) -> Self {
        Self { parallel }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Reconstructs all three channels for every pixel of `input`.
    ///
    /// Reads only channel 0 of the input. The result has the same dimensions,
    /// and the sampled channel of every pixel equals the input value exactly.
    #[instrument(skip(self, input), fields(width = input.width(), height = input.height(), parallel = self.parallel))]
    pub fn process(&self, input: &PixelBuffer) -> PixelBuffer {
        let (width, height) = input.dimensions();
        if input.is_empty() {
            debug!("Empty image, nothing to debayer");
            return PixelBuffer::zeroed(width, height);
        }

        let stride = width * CHANNELS;
        let mut output = vec![0u8; stride * height];

        let fill_row = |(y, row): (usize, &mut [u8])| {
            for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                pixel.copy_from_slice(&demosaic_pixel(input, x, y));
            }
        };

        if self.parallel {
            output.par_chunks_mut(stride).enumerate().for_each(fill_row);
        } else {
            output.chunks_mut(stride).enumerate().for_each(fill_row);
        }

        debug!("Debayered {} pixels", width * height);

        PixelBuffer::from_parts(width, height, output)
    }
}

/// Debayers `input` with the default (row-parallel) engine.
pub fn debayer(input: &PixelBuffer) -> PixelBuffer {
    CpuDebayer::new().process(input)
}
