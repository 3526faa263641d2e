//! Horizontal zoom/pan view state.
//!
//! The transform maps base-scale pixels to screen pixels as
//! `screen = k * px + tx` and is applied only along x; the y scale is never
//! touched. The zoomed x scale is re-derived from the transform on demand
//! instead of mutating the base scale, so reset is exact.

use crate::scale::TimeScale;

/// Allowed zoom factor interval.
pub const DEFAULT_ZOOM_EXTENT: (f64, f64) = (1.0, 12.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom scale factor, clamped to the zoom extent.
    pub k: f64,
    /// Horizontal translation in pixels.
    pub tx: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self { k: 1.0, tx: 0.0 }
    }

    pub fn is_identity(&self) -> bool {
        self.k == 1.0 && self.tx == 0.0
    }

    /// Base-scale pixel to screen pixel.
    #[inline]
    pub fn apply_x(&self, px: f64) -> f64 {
        self.k * px + self.tx
    }

    /// Screen pixel to base-scale pixel.
    #[inline]
    pub fn invert_x(&self, px: f64) -> f64 {
        (px - self.tx) / self.k
    }

    /// One zoom-gesture tick: multiply the scale factor, clamp it to
    /// `extent`, and keep the point under `pixel_x` stationary.
    pub fn zoom_at(&mut self, pixel_x: f64, factor: f64, extent: (f64, f64)) {
        let anchor = self.invert_x(pixel_x);
        self.k = (self.k * factor).clamp(extent.0, extent.1);
        self.tx = pixel_x - self.k * anchor;
    }

    /// One pan-gesture tick. Translation is unconstrained.
    pub fn pan_by(&mut self, dx: f64) {
        self.tx += dx;
    }

    /// Restore the canonical idle state (`k = 1`, `tx = 0`).
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Derive the zoomed x scale: same pixel range, domain pulled through
    /// the inverse transform. At identity this returns `base` unchanged.
    pub fn rescale(&self, base: &TimeScale) -> TimeScale {
        let (r0, r1) = base.range();
        let t0 = base.invert(self.invert_x(r0));
        let t1 = base.invert(self.invert_x(r1));
        TimeScale::from_secs((t0, t1), (r0, r1))
    }
}
