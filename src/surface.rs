//! In-memory rasters and the decode/resample primitives around them.
//!
//! A [`Surface`] wraps an [`image::DynamicImage`] whose dimensions are
//! both positive. Pixels are only ever touched through the `image` crate.

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;

use crate::crop::Rect;
use crate::error::{LayoutError, ResizeError, Result};
use crate::format::Format;
use crate::plan::Size;

/// Decoded raster with non-zero width and height.
#[derive(Clone, Debug)]
pub struct Surface {
    image: DynamicImage,
}

impl Surface {
    /// Wrap a decoded image, rejecting zero-sized ones.
    pub fn new(image: DynamicImage) -> Result<Self> {
        if image.width() == 0 {
            return Err(LayoutError::ZeroDimension {
                field: "surface width",
            }
            .into());
        }
        if image.height() == 0 {
            return Err(LayoutError::ZeroDimension {
                field: "surface height",
            }
            .into());
        }
        Ok(Self { image })
    }

    /// Decode `bytes` as the given format.
    pub fn decode(bytes: &[u8], hint: Format) -> Result<Self> {
        let image = image::load_from_memory_with_format(bytes, hint.image_format())
            .map_err(ResizeError::decode)?;
        Self::new(image)
    }

    /// Decode `bytes`, letting the decoder sniff the format.
    pub fn decode_from_raw(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(ResizeError::decode_reason("empty input"));
        }
        let image = image::load_from_memory(bytes).map_err(ResizeError::decode)?;
        Self::new(image)
    }

    /// Read and decode an image file. Only JPEG and PNG files are accepted.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ResizeError::io(path, e))?;
        let sniffed = image::guess_format(&bytes).map_err(ResizeError::decode)?;
        let format = match sniffed {
            image::ImageFormat::Jpeg => Format::Jpeg,
            image::ImageFormat::Png => Format::Png,
            other => {
                return Err(ResizeError::decode_reason(format!(
                    "{} is {other:?}; only JPEG and PNG files can be opened",
                    path.display()
                )));
            }
        };
        tracing::debug!(path = %path.display(), %format, bytes = bytes.len(), "opening image");
        Self::decode(&bytes, format)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    /// Borrow the underlying pixels.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Resample `region` (or the whole surface) to exactly
    /// `width`×`height`, producing a new surface.
    ///
    /// A region the same size as the output is copied without filtering.
    pub fn resample(
        &self,
        region: Option<Rect>,
        width: u32,
        height: u32,
        filter: FilterType,
    ) -> Result<Surface> {
        if width == 0 {
            return Err(LayoutError::ZeroDimension {
                field: "resample width",
            }
            .into());
        }
        if height == 0 {
            return Err(LayoutError::ZeroDimension {
                field: "resample height",
            }
            .into());
        }

        let view = match region {
            Some(r) if !r.fits_in(self.width(), self.height()) => {
                return Err(LayoutError::CropOutOfBounds {
                    target: r.size(),
                    canvas: self.size(),
                }
                .into());
            }
            Some(r) if r.width == 0 || r.height == 0 => {
                return Err(LayoutError::ZeroDimension {
                    field: "region size",
                }
                .into());
            }
            Some(r) if !r.is_full(self.width(), self.height()) => {
                self.image.crop_imm(r.x, r.y, r.width, r.height)
            }
            _ => self.image.clone(),
        };

        let out = if view.width() == width && view.height() == height {
            view
        } else {
            view.resize_exact(width, height, filter)
        };
        Surface::new(out)
    }
}

impl TryFrom<DynamicImage> for Surface {
    type Error = ResizeError;

    fn try_from(image: DynamicImage) -> Result<Self> {
        Surface::new(image)
    }
}
