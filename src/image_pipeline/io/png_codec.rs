use std::io::{Cursor, Write};

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::io::standard::strip_alpha;
use crate::image_pipeline::types::PixelBuffer;

pub(super) fn decode(data: &[u8]) -> Result<PixelBuffer> {
    debug!("Decoding PNG image, {} bytes", data.len());

    let mut decoder = png::Decoder::new(Cursor::new(data));
    // Palette images come out as RGB(A); bit depth is left alone so 16-bit input is rejected below
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| PipelineError::DecodeError(e.to_string()))?;
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| PipelineError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| PipelineError::DecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let width = info.width as usize;
    let height = info.height as usize;

    let data = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => buf,
        (png::ColorType::Rgba, png::BitDepth::Eight) => strip_alpha(&buf),
        (color_type, bit_depth) => {
            return Err(PipelineError::UnsupportedFormat(format!(
                "PNG {:?} {:?}, expected 8-bit RGB",
                color_type, bit_depth
            )));
        }
    };

    debug!("Decoded PNG: {}x{}", width, height);
    PixelBuffer::new(width, height, data)
}

pub(super) fn encode(image: &PixelBuffer, output: &mut dyn Write) -> Result<()> {
    let (width, height) = dimensions_u32(image)?;
    debug!("Encoding PNG image: {}x{}", width, height);

    let mut encoder = png::Encoder::new(output, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
    writer
        .write_image_data(image.as_bytes())
        .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

    debug!("PNG encoding complete");
    Ok(())
}

pub(super) fn dimensions_u32(image: &PixelBuffer) -> Result<(u32, u32)> {
    let width = u32::try_from(image.width());
    let height = u32::try_from(image.height());
    match (width, height) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(PipelineError::InvalidDimensions(image.width(), image.height())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_in_memory() {
        let image = PixelBuffer::from_fn(3, 2, |x, y| [x as u8 * 50, y as u8 * 100, 255]);
        let mut encoded = Vec::new();
        encode(&image, &mut encoded).unwrap();

        assert!(encoded.starts_with(b"\x89PNG"));
        assert_eq!(decode(&encoded).unwrap(), image);
    }

    #[test]
    fn test_rgba_alpha_is_dropped() {
        let mut encoded = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut encoded, 2, 1);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[10, 20, 30, 255, 40, 50, 60, 0]).unwrap();
        }

        let image = decode(&encoded).unwrap();
        assert_eq!(image.as_bytes(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_grayscale_rejected() {
        let mut encoded = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut encoded, 2, 2);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 2, 3, 4]).unwrap();
        }

        assert!(matches!(decode(&encoded), Err(PipelineError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert!(matches!(
            decode(b"\x89PNG\r\n\x1a\nnot really"),
            Err(PipelineError::DecodeError(_))
        ));
    }
}
