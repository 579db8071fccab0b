//! Error types.
//!
//! [`LayoutError`] comes from the pure geometry (planning and crop
//! placement) and works without `std`. [`ResizeError`] covers the whole
//! decode → resize → encode path and wraps geometry failures as
//! [`ResizeError::InvalidDimension`].

use crate::plan::Size;

/// Geometry error from planning or crop placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A width or height was zero.
    #[error("{field} must be positive, got 0")]
    ZeroDimension { field: &'static str },
    /// A crop box does not fit inside the canvas it is cut from.
    #[error("crop box {target} exceeds canvas {canvas}")]
    CropOutOfBounds { target: Size, canvas: Size },
    /// A planned dimension rounds to more pixels than a `u32` holds.
    #[error("{field} of {value} pixels does not fit in u32")]
    DimensionOverflow { field: &'static str, value: u64 },
}

#[cfg(feature = "codec")]
pub use self::codec::{ResizeError, Result};

#[cfg(feature = "codec")]
mod codec {
    use std::path::PathBuf;

    use super::LayoutError;
    use crate::format::Format;

    pub type Result<T> = core::result::Result<T, ResizeError>;

    /// Failure anywhere in the decode → resize → encode path.
    ///
    /// Every variant is deterministic for a given input, so none is worth
    /// retrying.
    #[derive(Debug, thiserror::Error)]
    pub enum ResizeError {
        /// Zero or oversized dimension, or a crop box larger than its canvas.
        #[error("invalid dimension: {0}")]
        InvalidDimension(#[from] LayoutError),

        /// Input bytes are not an image the decoder accepts.
        #[error("decode failed: {reason}")]
        DecodeFailed {
            reason: String,
            #[source]
            source: Option<image::ImageError>,
        },

        /// Output format unknown, or not derivable from a path.
        #[error("unsupported format: {0:?}")]
        UnsupportedFormat(String),

        /// The encoder rejected the image.
        #[error("encode to {format} failed: {source}")]
        EncodeFailed {
            format: Format,
            #[source]
            source: image::ImageError,
        },

        #[error("i/o error on {}: {source}", .path.display())]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
    }

    impl ResizeError {
        pub(crate) fn decode(source: image::ImageError) -> Self {
            Self::DecodeFailed {
                reason: source.to_string(),
                source: Some(source),
            }
        }

        pub(crate) fn decode_reason(reason: impl Into<String>) -> Self {
            Self::DecodeFailed {
                reason: reason.into(),
                source: None,
            }
        }

        pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
            Self::Io {
                path: path.into(),
                source,
            }
        }
    }
}
