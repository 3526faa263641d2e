//! Invertible time (x) and linear (y) scales.
//!
//! Scales are pure value-to-pixel mappings; the tooltip hit-test relies on
//! their inverses, so both directions are exposed. Degenerate domains are
//! widened at construction so no mapping ever divides by zero.

use crate::models::{date_to_secs, secs_to_datetime};
use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECS_PER_DAY: f64 = 86_400.0;

/// Horizontal time scale mapping a timestamp domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    t0: f64,
    t1: f64,
    px0: f64,
    px1: f64,
}

impl TimeScale {
    /// Scale over a calendar-date domain; a single-day domain is widened by
    /// one day on each side.
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if d0 == d1 {
            d0 = d0 - Duration::days(1);
            d1 = d1 + Duration::days(1);
        }
        Self::from_secs((date_to_secs(d0), date_to_secs(d1)), range)
    }

    /// Scale over a raw timestamp domain (used when re-deriving the zoomed
    /// scale, where domain edges are no longer whole days).
    pub fn from_secs(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (t0, mut t1) = domain;
        if (t1 - t0).abs() < f64::EPSILON {
            t1 = t0 + SECS_PER_DAY;
        }
        Self {
            t0,
            t1,
            px0: range.0,
            px1: range.1,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.t0, self.t1)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.px0, self.px1)
    }

    /// Pixel position of a timestamp.
    #[inline]
    pub fn px_at(&self, secs: f64) -> f64 {
        self.px0 + (secs - self.t0) / (self.t1 - self.t0) * (self.px1 - self.px0)
    }

    /// Pixel position of midnight at the start of `date`.
    #[inline]
    pub fn px(&self, date: NaiveDate) -> f64 {
        self.px_at(date_to_secs(date))
    }

    /// Timestamp under a pixel position.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        self.t0 + (px - self.px0) / (self.px1 - self.px0) * (self.t1 - self.t0)
    }

    /// Calendar time under a pixel position, if representable.
    pub fn invert_datetime(&self, px: f64) -> Option<NaiveDateTime> {
        secs_to_datetime(self.invert(px))
    }
}

/// Vertical value scale; the range is inverted (pixel y grows downward), so
/// higher values map to smaller pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    px0: f64,
    px1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if (d1 - d0).abs() < f64::EPSILON {
            d0 -= 1.0;
            d1 += 1.0;
        }
        Self {
            d0,
            d1,
            px0: range.0,
            px1: range.1,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.px0, self.px1)
    }

    #[inline]
    pub fn px(&self, value: f64) -> f64 {
        self.px0 + (value - self.d0) / (self.d1 - self.d0) * (self.px1 - self.px0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        self.d0 + (px - self.px0) / (self.px1 - self.px0) * (self.d1 - self.d0)
    }
}
