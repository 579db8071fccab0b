//! Centered crop placement.
//!
//! After a [`FitMode::Crop`](crate::FitMode::Crop) plan the canvas covers
//! the requested box and overflows it on one axis. The crop window is the
//! box placed at the geometric center of that canvas.

use crate::error::LayoutError;
use crate::plan::{Size, round_half_up};

/// Crop window on a canvas. The origin may be fractional.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropRect {
    /// Left edge on the canvas.
    pub x: f64,
    /// Top edge on the canvas.
    pub y: f64,
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
}

impl CropRect {
    /// Round the origin half-up to a whole-pixel [`Rect`].
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            round_half_up(self.x) as u32,
            round_half_up(self.y) as u32,
            self.width,
            self.height,
        )
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether this rect covers the whole of a `w`×`h` canvas.
    pub fn is_full(&self, w: u32, h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == w && self.height == h
    }

    /// Whether this rect lies entirely within a `w`×`h` canvas.
    pub fn fits_in(&self, w: u32, h: u32) -> bool {
        self.x as u64 + self.width as u64 <= w as u64
            && self.y as u64 + self.height as u64 <= h as u64
    }
}

/// Place a `target_w`×`target_h` window at the center of a
/// `canvas_w`×`canvas_h` canvas.
///
/// Fails when the window does not fit in the canvas on either axis.
///
/// ```
/// use boxfit::centered_crop;
///
/// let rect = centered_crop(200, 100, 100, 100).unwrap();
/// assert_eq!((rect.x, rect.y), (50.0, 0.0));
/// ```
pub fn centered_crop(
    canvas_w: u32,
    canvas_h: u32,
    target_w: u32,
    target_h: u32,
) -> Result<CropRect, LayoutError> {
    let canvas = Size::new(canvas_w, canvas_h);
    let target = Size::new(target_w, target_h);
    if target_w == 0 {
        return Err(LayoutError::ZeroDimension {
            field: "crop width",
        });
    }
    if target_h == 0 {
        return Err(LayoutError::ZeroDimension {
            field: "crop height",
        });
    }
    if !target.fits_within(canvas) {
        return Err(LayoutError::CropOutOfBounds { target, canvas });
    }

    Ok(CropRect {
        x: canvas_w as f64 / 2.0 - target_w as f64 / 2.0,
        y: canvas_h as f64 / 2.0 - target_h as f64 / 2.0,
        width: target_w,
        height: target_h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_canvas_crops_horizontally() {
        let r = centered_crop(200, 100, 100, 100).unwrap();
        assert_eq!(r.x, 50.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.to_rect(), Rect::new(50, 0, 100, 100));
    }

    #[test]
    fn tall_canvas_crops_vertically() {
        let r = centered_crop(400, 800, 400, 200).unwrap();
        assert_eq!(r.to_rect(), Rect::new(0, 300, 400, 200));
    }

    #[test]
    fn odd_overflow_rounds_half_up() {
        // 101 - 100 leaves one spare pixel: origin 0.5 → 1.
        let r = centered_crop(101, 100, 100, 100).unwrap();
        assert_eq!(r.x, 0.5);
        assert_eq!(r.to_rect(), Rect::new(1, 0, 100, 100));
        assert!(r.to_rect().fits_in(101, 100));
    }

    #[test]
    fn same_size_is_full() {
        let r = centered_crop(64, 48, 64, 48).unwrap().to_rect();
        assert!(r.is_full(64, 48));
    }

    #[test]
    fn oversize_box_is_rejected() {
        assert_eq!(
            centered_crop(200, 100, 201, 50),
            Err(LayoutError::CropOutOfBounds {
                target: Size::new(201, 50),
                canvas: Size::new(200, 100),
            })
        );
        assert!(centered_crop(200, 100, 50, 101).is_err());
    }

    #[test]
    fn zero_box_is_rejected() {
        assert!(matches!(
            centered_crop(10, 10, 0, 5),
            Err(LayoutError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn rounded_window_stays_inside_canvas() {
        let mut failures = Vec::new();
        for cw in 1..=40u32 {
            for ch in 1..=40u32 {
                for tw in 1..=cw {
                    for th in (1..=ch).step_by(3) {
                        let rect = centered_crop(cw, ch, tw, th).unwrap().to_rect();
                        if !rect.fits_in(cw, ch) {
                            failures.push(format!("{cw}x{ch} / {tw}x{th}: {rect:?}"));
                        }
                    }
                }
            }
        }
        assert!(failures.is_empty(), "{}", failures.join("\n"));
    }
}
