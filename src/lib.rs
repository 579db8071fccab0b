//! Fit-mode image resizing: dimension planning, centered crops, and
//! resample/encode orchestration.
//!
//! The geometry is pure and `no_std` compatible. The `codec` feature
//! (default) adds decoding, resampling and encoding through the `image`
//! crate.
//!
//! # Modules
//!
//! - [`plan`] — Fit modes, resize requests, and dimension planning
//! - [`crop`] — Centered crop placement
//! - [`format`] — Output formats and quality scaling
//! - [`error`] — Geometry and pipeline errors
//! - `surface` — Decoded rasters, decode and resample (`codec`)
//! - `pipeline` — Plan → resample → crop orchestration (`codec`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod crop;
pub mod error;
pub mod format;
pub mod plan;

#[cfg(feature = "codec")]
mod encode;
#[cfg(feature = "codec")]
pub mod pipeline;
#[cfg(feature = "codec")]
pub mod surface;

pub use crop::{CropRect, Rect, centered_crop};
pub use error::LayoutError;
pub use format::{Format, Quality};
pub use plan::{DimensionPlan, FitMode, ResizeRequest, Size, plan};

#[cfg(feature = "codec")]
pub use error::{ResizeError, Result};
#[cfg(feature = "codec")]
pub use image::imageops::FilterType;
#[cfg(feature = "codec")]
pub use pipeline::{ResizePipeline, resize};
#[cfg(feature = "codec")]
pub use surface::Surface;
