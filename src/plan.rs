//! Dimension planning for fit-mode resizes.
//!
//! Maps source dimensions, a requested box, and a [`FitMode`] to the
//! dimensions the source should be resampled to. Pure geometry: no pixel
//! operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use boxfit::{FitMode, ResizeRequest, Size};
//!
//! let request = ResizeRequest::new(400, 300, FitMode::Auto).unwrap();
//! let plan = request.plan(Size::new(1000, 500)).unwrap();
//!
//! // Landscape source: width anchors to the box, height keeps 2:1.
//! assert_eq!(plan.to_size(), Ok(Size::new(400, 200)));
//! ```

use core::fmt;

use num_traits::Float;

use crate::error::LayoutError;

/// How a source image is fitted into the requested box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Scale to the exact box, distorting aspect ratio.
    Exact,
    /// Height matches the box; width follows the source aspect ratio.
    Portrait,
    /// Width matches the box; height follows the source aspect ratio.
    Landscape,
    /// Anchor the axis matching the source orientation.
    ///
    /// Landscape sources fit by width, portrait sources by height. Square
    /// sources follow the shape of the box instead.
    #[default]
    Auto,
    /// Scale so the box is covered on both axes, then trim the overflow
    /// with a centered crop.
    Crop,
}

impl FitMode {
    /// Every mode, in declaration order.
    pub const ALL: [FitMode; 5] = [
        FitMode::Exact,
        FitMode::Portrait,
        FitMode::Landscape,
        FitMode::Auto,
        FitMode::Crop,
    ];

    /// Parse a mode name, ignoring ASCII case and surrounding whitespace.
    ///
    /// Returns `None` for names that are not a mode.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|mode| name.eq_ignore_ascii_case(mode.name()))
    }

    /// Parse a mode name, falling back to [`FitMode::Exact`] for anything
    /// unrecognized (including `"default"`).
    pub fn from_name_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or(FitMode::Exact)
    }

    /// Lowercase name of the mode.
    pub const fn name(self) -> &'static str {
        match self {
            FitMode::Exact => "exact",
            FitMode::Portrait => "portrait",
            FitMode::Landscape => "landscape",
            FitMode::Auto => "auto",
            FitMode::Crop => "crop",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Shrink each axis to fit within `bounds`.
    pub fn clamp_to(self, bounds: Size) -> Self {
        Self {
            width: self.width.min(bounds.width),
            height: self.height.min(bounds.height),
        }
    }

    /// Whether this size fits within `bounds` on both axes.
    pub fn fits_within(&self, bounds: Size) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A validated resize request: target box plus fit mode.
///
/// Both target dimensions are positive. The request cannot be changed
/// after construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResizeRequest {
    target: Size,
    mode: FitMode,
}

impl ResizeRequest {
    /// Create a request, rejecting a zero target dimension.
    pub fn new(width: u32, height: u32, mode: FitMode) -> Result<Self, LayoutError> {
        positive(width, "target width")?;
        positive(height, "target height")?;
        Ok(Self {
            target: Size::new(width, height),
            mode,
        })
    }

    /// Create a request from a mode name. Unrecognized names mean
    /// [`FitMode::Exact`].
    pub fn with_mode_name(width: u32, height: u32, mode: &str) -> Result<Self, LayoutError> {
        Self::new(width, height, FitMode::from_name_lenient(mode))
    }

    pub fn target(&self) -> Size {
        self.target
    }

    pub fn width(&self) -> u32 {
        self.target.width
    }

    pub fn height(&self) -> u32 {
        self.target.height
    }

    pub fn mode(&self) -> FitMode {
        self.mode
    }

    /// Plan the resize of a source with the given dimensions.
    pub fn plan(&self, source: Size) -> Result<DimensionPlan, LayoutError> {
        plan(
            source.width,
            source.height,
            self.target.width,
            self.target.height,
            self.mode,
        )
    }
}

/// Planned output dimensions, before rounding to whole pixels.
///
/// Ratio-derived axes are usually fractional. [`to_size`](Self::to_size)
/// is the single place they become pixel counts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DimensionPlan {
    /// Planned width in (fractional) pixels.
    pub width: f64,
    /// Planned height in (fractional) pixels.
    pub height: f64,
}

impl DimensionPlan {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Round both axes half-up to whole pixels, never below 1.
    ///
    /// Fails with [`LayoutError::DimensionOverflow`] when a rounded axis
    /// does not fit in a `u32`.
    pub fn to_size(&self) -> Result<Size, LayoutError> {
        Ok(Size::new(
            to_pixels(self.width, "planned width")?,
            to_pixels(self.height, "planned height")?,
        ))
    }
}

/// Compute the planned dimensions for resizing `source_w`×`source_h` into
/// the `target_w`×`target_h` box under `mode`.
///
/// When the box is strictly larger than the source on both axes the
/// source dimensions are returned unchanged for every mode: images are
/// never enlarged past their original size in both directions at once.
pub fn plan(
    source_w: u32,
    source_h: u32,
    target_w: u32,
    target_h: u32,
    mode: FitMode,
) -> Result<DimensionPlan, LayoutError> {
    positive(source_w, "source width")?;
    positive(source_h, "source height")?;
    positive(target_w, "target width")?;
    positive(target_h, "target height")?;

    if target_w > source_w && target_h > source_h {
        return Ok(DimensionPlan::new(source_w as f64, source_h as f64));
    }

    let (sw, sh) = (source_w as f64, source_h as f64);
    let (tw, th) = (target_w as f64, target_h as f64);

    let plan = match mode {
        FitMode::Exact => DimensionPlan::new(tw, th),
        FitMode::Portrait => fixed_height(sw, sh, th),
        FitMode::Landscape => fixed_width(sw, sh, tw),
        FitMode::Auto => auto_fit(sw, sh, tw, th),
        FitMode::Crop => cover(sw, sh, tw, th),
    };
    Ok(plan)
}

// ============================================================================
// Internal geometry
// ============================================================================

fn positive(value: u32, field: &'static str) -> Result<(), LayoutError> {
    if value == 0 {
        Err(LayoutError::ZeroDimension { field })
    } else {
        Ok(())
    }
}

/// Height pinned to `th`; width keeps the source aspect ratio.
fn fixed_height(sw: f64, sh: f64, th: f64) -> DimensionPlan {
    DimensionPlan::new(th * (sw / sh), th)
}

/// Width pinned to `tw`; height keeps the source aspect ratio.
fn fixed_width(sw: f64, sh: f64, tw: f64) -> DimensionPlan {
    DimensionPlan::new(tw, tw * (sh / sw))
}

/// Pick the anchored axis from the source orientation, or from the box
/// shape when the source is square.
fn auto_fit(sw: f64, sh: f64, tw: f64, th: f64) -> DimensionPlan {
    if sh < sw {
        fixed_width(sw, sh, tw)
    } else if sh > sw {
        fixed_height(sw, sh, th)
    } else if th < tw {
        fixed_width(sw, sh, tw)
    } else if th > tw {
        fixed_height(sw, sh, th)
    } else {
        DimensionPlan::new(tw, th)
    }
}

/// Scale by the smaller of the per-axis source/target ratios, so the
/// result covers the box on both axes.
fn cover(sw: f64, sh: f64, tw: f64, th: f64) -> DimensionPlan {
    let height_ratio = sh / th;
    let width_ratio = sw / tw;
    let ratio = if height_ratio < width_ratio {
        height_ratio
    } else {
        width_ratio
    };
    DimensionPlan::new(sw / ratio, sh / ratio)
}

/// Round half-up: `0.5` → `1.0`, `2.5` → `3.0`.
pub(crate) fn round_half_up(v: f64) -> f64 {
    Float::floor(v + 0.5)
}

fn to_pixels(v: f64, field: &'static str) -> Result<u32, LayoutError> {
    let px = round_half_up(v);
    if px > u32::MAX as f64 {
        return Err(LayoutError::DimensionOverflow {
            field,
            value: px as u64,
        });
    }
    let px = px as u32;
    Ok(if px == 0 { 1 } else { px })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planned(sw: u32, sh: u32, tw: u32, th: u32, mode: FitMode) -> Size {
        plan(sw, sh, tw, th, mode).unwrap().to_size().unwrap()
    }

    // ── FitMode names ───────────────────────────────────────────────────

    #[test]
    fn mode_names_ignore_case_and_whitespace() {
        assert_eq!(FitMode::from_name("CROP"), Some(FitMode::Crop));
        assert_eq!(FitMode::from_name("Portrait"), Some(FitMode::Portrait));
        assert_eq!(FitMode::from_name("  landscape "), Some(FitMode::Landscape));
        assert_eq!(FitMode::from_name("aUtO"), Some(FitMode::Auto));
        assert_eq!(FitMode::from_name("exact"), Some(FitMode::Exact));
    }

    #[test]
    fn unknown_mode_names_fall_back_to_exact() {
        assert_eq!(FitMode::from_name("default"), None);
        assert_eq!(FitMode::from_name_lenient("default"), FitMode::Exact);
        assert_eq!(FitMode::from_name_lenient("stretch"), FitMode::Exact);
        assert_eq!(FitMode::from_name_lenient(""), FitMode::Exact);
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in FitMode::ALL {
            assert_eq!(FitMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn default_mode_is_auto() {
        assert_eq!(FitMode::default(), FitMode::Auto);
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn zero_inputs_are_rejected() {
        assert_eq!(
            plan(0, 10, 5, 5, FitMode::Auto),
            Err(LayoutError::ZeroDimension {
                field: "source width"
            })
        );
        assert_eq!(
            plan(10, 0, 5, 5, FitMode::Auto),
            Err(LayoutError::ZeroDimension {
                field: "source height"
            })
        );
        assert_eq!(
            plan(10, 10, 0, 5, FitMode::Auto),
            Err(LayoutError::ZeroDimension {
                field: "target width"
            })
        );
        assert_eq!(
            plan(10, 10, 5, 0, FitMode::Auto),
            Err(LayoutError::ZeroDimension {
                field: "target height"
            })
        );
    }

    #[test]
    fn request_rejects_zero_target() {
        assert!(ResizeRequest::new(0, 100, FitMode::Crop).is_err());
        assert!(ResizeRequest::new(100, 0, FitMode::Crop).is_err());
        let r = ResizeRequest::with_mode_name(100, 50, "Landscape").unwrap();
        assert_eq!(r.mode(), FitMode::Landscape);
        assert_eq!(r.target(), Size::new(100, 50));
    }

    // ── no-upscale guard ────────────────────────────────────────────────

    #[test]
    fn larger_box_keeps_source_for_every_mode() {
        for mode in FitMode::ALL {
            assert_eq!(planned(200, 100, 400, 300, mode), Size::new(200, 100));
        }
    }

    #[test]
    fn guard_needs_both_axes_larger() {
        // Width larger, height equal: guard does not apply.
        assert_eq!(
            planned(200, 100, 400, 100, FitMode::Exact),
            Size::new(400, 100)
        );
    }

    // ── per-mode ────────────────────────────────────────────────────────

    #[test]
    fn exact_uses_box() {
        assert_eq!(
            planned(1000, 500, 300, 300, FitMode::Exact),
            Size::new(300, 300)
        );
    }

    #[test]
    fn portrait_pins_height() {
        let p = plan(1000, 500, 300, 100, FitMode::Portrait).unwrap();
        assert_eq!(p.height, 100.0);
        assert_eq!(p.width, 200.0);
    }

    #[test]
    fn landscape_pins_width() {
        let p = plan(1000, 500, 300, 100, FitMode::Landscape).unwrap();
        assert_eq!(p.width, 300.0);
        assert_eq!(p.height, 150.0);
    }

    #[test]
    fn auto_landscape_source_fits_width() {
        assert_eq!(
            planned(1000, 500, 400, 300, FitMode::Auto),
            Size::new(400, 200)
        );
    }

    #[test]
    fn auto_portrait_source_fits_height() {
        assert_eq!(
            planned(500, 1000, 400, 300, FitMode::Auto),
            Size::new(150, 300)
        );
    }

    #[test]
    fn auto_square_source_follows_box_shape() {
        assert_eq!(
            planned(500, 500, 300, 100, FitMode::Auto),
            Size::new(300, 300)
        );
        assert_eq!(
            planned(500, 500, 100, 300, FitMode::Auto),
            Size::new(300, 300)
        );
        assert_eq!(
            planned(500, 500, 200, 200, FitMode::Auto),
            Size::new(200, 200)
        );
    }

    #[test]
    fn crop_covers_box() {
        // Height ratio 5, width ratio 2.5 → divide by 2.5.
        assert_eq!(
            planned(1000, 500, 400, 100, FitMode::Crop),
            Size::new(400, 200)
        );
        // Height ratio 2.5, width ratio 5 → divide by 2.5.
        assert_eq!(
            planned(1000, 500, 200, 200, FitMode::Crop),
            Size::new(400, 200)
        );
    }

    #[test]
    fn crop_upscales_looser_axis_when_one_axis_is_larger() {
        // Box wider than source, shorter than source.
        assert_eq!(
            planned(100, 400, 200, 100, FitMode::Crop),
            Size::new(200, 800)
        );
    }

    // ── rounding ────────────────────────────────────────────────────────

    #[test]
    fn to_size_rounds_half_up() {
        assert_eq!(
            DimensionPlan::new(10.5, 3.49).to_size(),
            Ok(Size::new(11, 3))
        );
        assert_eq!(DimensionPlan::new(0.5, 2.5).to_size(), Ok(Size::new(1, 3)));
    }

    #[test]
    fn to_size_never_returns_zero() {
        assert_eq!(DimensionPlan::new(0.2, 0.0).to_size(), Ok(Size::new(1, 1)));
        // 1000×1 landscape at width 10 → height 0.01.
        assert_eq!(
            planned(1000, 1, 10, 1, FitMode::Landscape),
            Size::new(10, 1)
        );
    }

    #[test]
    fn to_size_rejects_axes_beyond_u32() {
        // Cover ratio is 2.5e-10, so the canvas is 8e9 × 4e9.
        let p = plan(2, 1, 1, 4_000_000_000, FitMode::Crop).unwrap();
        assert_eq!(
            p.to_size(),
            Err(LayoutError::DimensionOverflow {
                field: "planned width",
                value: 8_000_000_000,
            })
        );

        assert_eq!(
            DimensionPlan::new(1.0, u32::MAX as f64).to_size(),
            Ok(Size::new(1, u32::MAX))
        );
        assert!(matches!(
            DimensionPlan::new(1.0, u32::MAX as f64 + 0.5).to_size(),
            Err(LayoutError::DimensionOverflow {
                field: "planned height",
                ..
            })
        ));
    }

    // ── exhaustive grid ─────────────────────────────────────────────────

    const DIMS: [u32; 9] = [1, 2, 3, 7, 50, 99, 100, 333, 1024];

    #[test]
    fn grid_invariants_hold() {
        let mut failures = Vec::new();
        for sw in DIMS {
            for sh in DIMS {
                for tw in DIMS {
                    for th in DIMS {
                        for mode in FitMode::ALL {
                            check(sw, sh, tw, th, mode, &mut failures);
                        }
                    }
                }
            }
        }
        assert!(
            failures.is_empty(),
            "{} failures:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }

    fn check(sw: u32, sh: u32, tw: u32, th: u32, mode: FitMode, failures: &mut Vec<String>) {
        let p = plan(sw, sh, tw, th, mode).unwrap();
        let tag = format!("{mode} ({sw}x{sh} -> {tw}x{th})");
        let s = match p.to_size() {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{tag}: {e}"));
                return;
            }
        };

        if tw > sw && th > sh {
            if s != Size::new(sw, sh) {
                failures.push(format!("{tag}: enlarged to {s}"));
            }
            return;
        }

        let aspect = sw as f64 / sh as f64;
        match mode {
            FitMode::Exact => {
                if s != Size::new(tw, th) {
                    failures.push(format!("{tag}: got {s}"));
                }
            }
            FitMode::Portrait => {
                if p.height != th as f64 || (p.width / p.height - aspect).abs() > 1e-9 {
                    failures.push(format!("{tag}: got {p:?}"));
                }
            }
            FitMode::Landscape => {
                if p.width != tw as f64 || (p.width / p.height - aspect).abs() > 1e-9 {
                    failures.push(format!("{tag}: got {p:?}"));
                }
            }
            FitMode::Crop => {
                if s.width < tw || s.height < th {
                    failures.push(format!("{tag}: canvas {s} does not cover box"));
                }
            }
            FitMode::Auto => {
                if s.width != tw && s.height != th {
                    failures.push(format!("{tag}: no axis anchored, got {s}"));
                }
            }
        }
    }
}
