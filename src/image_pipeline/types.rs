//! Pixel buffer types shared by the codecs and the debayer engine

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Samples stored per pixel. Input mosaics carry the sensor value in channel 0.
pub const CHANNELS: usize = 3;

/// Output channel order of a debayered pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// 8-bit, 3-channel image addressed by `(x, y, c)`.
///
/// Samples are interleaved row-major: `[R, G, B, R, G, B, ...]` for debayered
/// images. For a mosaic only channel 0 is meaningful; channels 1 and 2 are
/// carried along but never read by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps interleaved samples, checking that `data` covers exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(PipelineError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Caller guarantees `data.len() == width * height * CHANNELS`.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * CHANNELS);
        Self { width, height, data }
    }

    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * CHANNELS],
        }
    }

    /// Builds a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; CHANNELS],
    {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, data }
    }

    /// Places one sensor sample per pixel into channel 0, leaving channels 1 and 2 at zero.
    pub fn from_mosaic(width: usize, height: usize, samples: &[u8]) -> Result<Self> {
        if samples.len() != width * height {
            return Err(PipelineError::BufferSizeMismatch {
                expected: width * height,
                actual: samples.len(),
            });
        }
        Ok(Self::from_fn(width, height, |x, y| [samples[y * width + x], 0, 0]))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Sample at column `x`, row `y`, channel `c`. Panics when out of bounds.
    #[inline]
    pub fn sample(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[(y * self.width + x) * CHANNELS + c]
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        let i = (y * self.width + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * CHANNELS;
        &self.data[y * stride..(y + 1) * stride]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_buffer() {
        let result = PixelBuffer::new(2, 2, vec![0u8; 11]);
        assert!(matches!(
            result,
            Err(PipelineError::BufferSizeMismatch { expected: 12, actual: 11 })
        ));
    }

    #[test]
    fn test_zero_sized_buffer() {
        let image = PixelBuffer::new(0, 7, Vec::new()).unwrap();
        assert!(image.is_empty());
        assert_eq!(image.dimensions(), (0, 7));
        assert!(image.as_bytes().is_empty());
    }

    #[test]
    fn test_addressing_is_row_major_interleaved() {
        let image = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 9]);
        assert_eq!(image.pixel(2, 1), [2, 1, 9]);
        assert_eq!(image.sample(1, 1, 0), 1);
        assert_eq!(image.row(1), &[0, 1, 9, 1, 1, 9, 2, 1, 9]);
    }

    #[test]
    fn test_from_mosaic_fills_channel_zero() {
        let image = PixelBuffer::from_mosaic(2, 1, &[40, 41]).unwrap();
        assert_eq!(image.as_bytes(), &[40, 0, 0, 41, 0, 0]);
        assert!(PixelBuffer::from_mosaic(2, 2, &[1, 2, 3]).is_err());
    }
}
