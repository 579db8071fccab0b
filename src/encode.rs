//! Encoding surfaces to bytes and files.

use std::io::Cursor;
use std::path::Path;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};

use crate::error::{ResizeError, Result};
use crate::format::{Format, Quality};
use crate::surface::Surface;

impl Surface {
    /// Encode to `format` at `quality`.
    ///
    /// JPEG takes the quality directly. PNG maps it to an inverted
    /// compression level (see [`Quality::png_compression_level`]). GIF
    /// ignores it.
    pub fn encode(&self, format: Format, quality: Quality) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let encoded = match format {
            Format::Jpeg => {
                let rgb = DynamicImage::ImageRgb8(self.image().to_rgb8());
                let encoder = JpegEncoder::new_with_quality(&mut buf, quality.jpeg_quality());
                rgb.write_with_encoder(encoder)
            }
            Format::Png => {
                let level = quality.png_compression_level();
                let encoder = PngEncoder::new_with_quality(
                    &mut buf,
                    png_compression(level),
                    PngFilter::Adaptive,
                );
                match self.image() {
                    DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                        DynamicImage::ImageRgba16(self.image().to_rgba16())
                            .write_with_encoder(encoder)
                    }
                    img => img.write_with_encoder(encoder),
                }
            }
            Format::Gif => DynamicImage::ImageRgba8(self.image().to_rgba8())
                .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Gif),
        };
        encoded.map_err(|source| ResizeError::EncodeFailed { format, source })?;
        tracing::debug!(%format, quality = quality.get(), bytes = buf.len(), "encoded surface");
        Ok(buf)
    }

    /// Encode in memory by format name (`jpg`, `jpeg`, `png`, `gif`) at
    /// the codec default quality.
    pub fn to_bytes(&self, format: &str) -> Result<Vec<u8>> {
        let format = Format::from_name(format)
            .ok_or_else(|| ResizeError::UnsupportedFormat(format.into()))?;
        self.encode(format, Quality::CODEC_DEFAULT)
    }

    /// Encode and write to `path`, choosing the format from its extension.
    ///
    /// Nothing is written when the extension is not `.jpg`, `.jpeg`,
    /// `.png` or `.gif`.
    pub fn save_to_path(&self, path: impl AsRef<Path>, quality: Quality) -> Result<()> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ResizeError::UnsupportedFormat(ext)
        })?;
        let bytes = self.encode(format, quality)?;
        std::fs::write(path, &bytes).map_err(|e| ResizeError::io(path, e))?;
        tracing::info!(
            path = %path.display(),
            %format,
            size = %self.size(),
            bytes = bytes.len(),
            "wrote image"
        );
        Ok(())
    }
}

/// Map a `0..=9` zlib level onto the encoder; 0 stores without deflate.
fn png_compression(level: u8) -> CompressionType {
    match level {
        0 => CompressionType::Uncompressed,
        n => CompressionType::Level(n.min(9)),
    }
}
