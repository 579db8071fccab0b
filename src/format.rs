//! Output formats and quality scaling.

use core::fmt;

use crate::plan::round_half_up;

/// Encodable output format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Jpeg,
    Png,
    Gif,
}

impl Format {
    /// Parse a format name or file extension, with or without a leading
    /// dot, ignoring ASCII case: `jpg`, `.JPEG`, `png`, `gif`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix('.').unwrap_or(name);
        if name.eq_ignore_ascii_case("jpg") || name.eq_ignore_ascii_case("jpeg") {
            Some(Format::Jpeg)
        } else if name.eq_ignore_ascii_case("png") {
            Some(Format::Png)
        } else if name.eq_ignore_ascii_case("gif") {
            Some(Format::Gif)
        } else {
            None
        }
    }

    /// Format implied by a path's extension.
    #[cfg(feature = "std")]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
    }

    /// Canonical file extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Jpeg => "jpg",
            Format::Png => "png",
            Format::Gif => "gif",
        }
    }

    #[cfg(feature = "codec")]
    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            Format::Jpeg => image::ImageFormat::Jpeg,
            Format::Png => image::ImageFormat::Png,
            Format::Gif => image::ImageFormat::Gif,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Jpeg => "JPEG",
            Format::Png => "PNG",
            Format::Gif => "GIF",
        })
    }
}

/// Requested output quality, `0..=100`. Higher is better fidelity.
///
/// Each codec maps this onto its own scale; see
/// [`jpeg_quality`](Self::jpeg_quality) and
/// [`png_compression_level`](Self::png_compression_level).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    /// Best fidelity. The default for saving to a path.
    pub const MAX: Quality = Quality(100);

    /// Quality used for in-memory encodes when none is given.
    pub const CODEC_DEFAULT: Quality = Quality(75);

    /// Create a quality, clamping values above 100.
    pub const fn new(value: u8) -> Self {
        if value > 100 { Quality(100) } else { Quality(value) }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// JPEG encoder quality: same scale, floored at 1.
    pub const fn jpeg_quality(self) -> u8 {
        if self.0 == 0 { 1 } else { self.0 }
    }

    /// zlib-style PNG compression level, `0..=9`, where 0 is the least
    /// compression.
    ///
    /// PNG is lossless, so higher quality maps to less compression effort:
    /// 100 → 0, 0 → 9.
    pub fn png_compression_level(self) -> u8 {
        let scaled = round_half_up(self.0 as f64 / 100.0 * 9.0) as u8;
        9 - scaled
    }
}

impl Default for Quality {
    fn default() -> Self {
        Quality::MAX
    }
}
