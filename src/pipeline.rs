//! Resize orchestration: plan → resample → centered crop.
//!
//! # Example
//!
//! ```
//! use boxfit::{FitMode, ResizePipeline, ResizeRequest, Size, Surface};
//! use image::DynamicImage;
//!
//! let source = Surface::new(DynamicImage::new_rgb8(1000, 500)).unwrap();
//! let request = ResizeRequest::new(200, 200, FitMode::Crop).unwrap();
//!
//! let thumb = ResizePipeline::new().resize(&source, &request).unwrap();
//! assert_eq!(thumb.size(), Size::new(200, 200));
//! ```

use image::imageops::FilterType;

use crate::crop::centered_crop;
use crate::error::Result;
use crate::plan::{FitMode, ResizeRequest};
use crate::surface::Surface;

/// Resize configuration. Holds no per-call state, so one pipeline can
/// serve any number of concurrent resizes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizePipeline {
    filter: FilterType,
}

impl Default for ResizePipeline {
    fn default() -> Self {
        Self {
            filter: FilterType::Triangle,
        }
    }
}

impl ResizePipeline {
    /// Pipeline with bilinear (`Triangle`) filtering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resampling filter.
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn resampling_filter(&self) -> FilterType {
        self.filter
    }

    /// Resize `source` according to `request`. The source is not modified.
    ///
    /// In [`FitMode::Crop`] the planned canvas is trimmed to the requested
    /// box around its center. When the plan kept the source size because
    /// the box is larger on both axes, the crop box is clamped to the
    /// canvas so the image is returned at its original size.
    #[tracing::instrument(level = "debug", skip(self, source), fields(source = %source.size()))]
    pub fn resize(&self, source: &Surface, request: &ResizeRequest) -> Result<Surface> {
        let planned = request.plan(source.size())?.to_size()?;
        tracing::debug!(%planned, "planned dimensions");

        let canvas = if planned == source.size() {
            tracing::debug!("plan matches source; skipping resample");
            source.clone()
        } else {
            source.resample(None, planned.width, planned.height, self.filter)?
        };

        if request.mode() != FitMode::Crop {
            return Ok(canvas);
        }
        self.crop_center(canvas, request)
    }

    /// Decode `bytes` (format sniffed) and resize the result.
    pub fn resize_bytes(&self, bytes: &[u8], request: &ResizeRequest) -> Result<Surface> {
        let source = Surface::decode_from_raw(bytes)?;
        self.resize(&source, request)
    }

    fn crop_center(&self, canvas: Surface, request: &ResizeRequest) -> Result<Surface> {
        let target = request.target().clamp_to(canvas.size());
        if target != request.target() {
            tracing::debug!(
                requested = %request.target(),
                %target,
                "crop box clamped to unenlarged canvas"
            );
        }

        let crop = centered_crop(canvas.width(), canvas.height(), target.width, target.height)?;
        let rect = crop.to_rect();
        if rect.is_full(canvas.width(), canvas.height()) {
            return Ok(canvas);
        }
        tracing::debug!(x = rect.x, y = rect.y, crop = %rect.size(), "centered crop");
        canvas.resample(Some(rect), target.width, target.height, self.filter)
    }
}

/// Resize with the default pipeline.
pub fn resize(source: &Surface, width: u32, height: u32, mode: FitMode) -> Result<Surface> {
    let request = ResizeRequest::new(width, height, mode)?;
    ResizePipeline::new().resize(source, &request)
}
