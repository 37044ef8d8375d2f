//! Image file I/O
//!
//! Loading and saving 8-bit RGB rasters. The debayer engine never touches
//! files; everything format-specific lives here.

mod png_codec;
mod standard;
mod tiff_codec;

use std::fmt;
use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::config::PipelineConfig;
use crate::image_pipeline::types::PixelBuffer;

pub use standard::{StandardImageReader, StandardImageWriter};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
const TIFF_LE_MAGIC: [u8; 4] = [b'I', b'I', 0x2a, 0x00];
const TIFF_BE_MAGIC: [u8; 4] = [b'M', b'M', 0x00, 0x2a];

/// Container formats the standard codecs understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Tiff,
}

impl ImageFormat {
    /// Picks a format from the file extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok(ImageFormat::Png),
            Some("tif") | Some("tiff") => Ok(ImageFormat::Tiff),
            _ => Err(PipelineError::UnsupportedFormat(format!(
                "cannot infer image format from {}",
                path.display()
            ))),
        }
    }

    /// Identifies encoded data by its magic number.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&PNG_SIGNATURE) {
            Some(ImageFormat::Png)
        } else if data.starts_with(&TIFF_LE_MAGIC) || data.starts_with(&TIFF_BE_MAGIC) {
            Some(ImageFormat::Tiff)
        } else {
            None
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => f.write_str("PNG"),
            ImageFormat::Tiff => f.write_str("TIFF"),
        }
    }
}

pub trait ImageReader {
    fn read_image(&self, data: &[u8]) -> Result<PixelBuffer>;
}

pub trait ImageWriter {
    fn write_image(
        &self,
        image: &PixelBuffer,
        format: ImageFormat,
        output: &mut dyn Write,
        config: &PipelineConfig,
    ) -> Result<()>;
}

/// Reads a PNG or TIFF file into a 3-channel buffer.
#[instrument]
pub fn load_image<P: AsRef<Path> + fmt::Debug>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| PipelineError::InputReadError(format!("{}: {}", path.display(), e)))?;
    let image = StandardImageReader.read_image(&data)?;
    debug!(width = image.width(), height = image.height(), "Loaded image");
    Ok(image)
}

/// Writes `image` to `path`, encoding by the path's extension.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn save_image<P: AsRef<Path> + fmt::Debug>(image: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let mut file = std::fs::File::create(path)
        .map_err(|e| PipelineError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
    StandardImageWriter.write_image(image, format, &mut file, &PipelineConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path("a/b/bayer_rggb.png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path("scan.TIF").unwrap(), ImageFormat::Tiff);
        assert_eq!(ImageFormat::from_path("scan.tiff").unwrap(), ImageFormat::Tiff);
        assert!(matches!(
            ImageFormat::from_path("photo.jpg"),
            Err(PipelineError::UnsupportedFormat(_))
        ));
        assert!(ImageFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_sniff_magic() {
        assert_eq!(ImageFormat::sniff(&PNG_SIGNATURE), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(b"II*\0rest"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::sniff(b"MM\0*rest"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::sniff(b"GIF89a"), None);
        assert_eq!(ImageFormat::sniff(&[]), None);
    }

    #[test]
    fn test_save_then_load_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mosaic.png");
        let image = PixelBuffer::from_fn(5, 3, |x, y| [(x * 40) as u8, (y * 80) as u8, 7]);

        save_image(&image, &path).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_save_then_load_tiff_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mosaic.tiff");
        let image = PixelBuffer::from_fn(4, 4, |x, y| [(x + y) as u8, 3, (x * y) as u8]);

        save_image(&image, &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), image);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_image(dir.path().join("missing.png"));
        assert!(matches!(result, Err(PipelineError::InputReadError(_))));
    }
}
