use std::io::{Cursor, Write};

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder, colortype};
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::config::{PipelineConfig, TiffCompression};
use crate::image_pipeline::io::png_codec::dimensions_u32;
use crate::image_pipeline::io::standard::strip_alpha;
use crate::image_pipeline::types::PixelBuffer;

pub(super) fn decode(data: &[u8]) -> Result<PixelBuffer> {
    debug!("Decoding TIFF image, {} bytes", data.len());

    let mut decoder = Decoder::new(Cursor::new(data))
        .map_err(|e: tiff::TiffError| PipelineError::DecodeError(e.to_string()))?;
    let (width, height) = decoder
        .dimensions()
        .map_err(|e: tiff::TiffError| PipelineError::DecodeError(e.to_string()))?;
    let color_type = decoder
        .colortype()
        .map_err(|e: tiff::TiffError| PipelineError::DecodeError(e.to_string()))?;
    let image = decoder
        .read_image()
        .map_err(|e: tiff::TiffError| PipelineError::DecodeError(e.to_string()))?;

    let data = match (color_type, image) {
        (ColorType::RGB(8), DecodingResult::U8(buf)) => buf,
        (ColorType::RGBA(8), DecodingResult::U8(buf)) => strip_alpha(&buf),
        (color_type, _) => {
            return Err(PipelineError::UnsupportedFormat(format!(
                "TIFF {:?}, expected 8-bit RGB",
                color_type
            )));
        }
    };

    debug!("Decoded TIFF: {}x{}", width, height);
    PixelBuffer::new(width as usize, height as usize, data)
}

pub(super) fn encode(image: &PixelBuffer, output: &mut dyn Write, config: &PipelineConfig) -> Result<()> {
    let (width, height) = dimensions_u32(image)?;
    debug!("Encoding TIFF image: {}x{} ({:?})", width, height, config.tiff_compression);

    let compression = match config.tiff_compression {
        TiffCompression::None => Compression::Uncompressed,
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
        TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
        TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
    };

    // The encoder needs Seek, so stage the file in memory
    let mut buffer = Vec::new();
    {
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<colortype::RGB8>(width, height, image.as_bytes())
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
    }

    output.write_all(&buffer)?;

    debug!("TIFF encoding complete");
    Ok(())
}
