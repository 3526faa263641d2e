//! Tick generation for the value and time axes.
//!
//! Axes are re-derived from the current (possibly zoomed) scale on every
//! render, so tick generation has to be cheap and deterministic. Value ticks
//! use 1/2/5 stepping; time ticks pick a step from a day/month/year ladder
//! and carry a step-appropriate label format.

use crate::models::{date_to_secs, secs_to_datetime};
use crate::scale::{LinearScale, TimeScale};
use chrono::{Datelike, Duration, Months, NaiveDate};

/// One axis tick: pixel position along the axis plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub px: f64,
    pub label: String,
}

/// "Nice" ticks for the value axis, at most roughly `target` of them.
pub fn value_ticks(scale: &LinearScale, target: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain();
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }
    let step = nice_step(span / target as f64);
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let mut ticks = Vec::new();
    let mut v = (lo / step).ceil() * step;
    // Tolerance keeps the top tick when rounding lands a hair past the domain.
    while v <= hi + step * 1e-9 {
        ticks.push(Tick {
            px: scale.px(v),
            label: format!("{v:.decimals$}"),
        });
        v += step;
    }
    ticks
}

/// Round a raw step up to the nearest 1/2/5 × 10^k.
fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let residual = raw / mag;
    if residual <= 1.0 {
        mag
    } else if residual <= 2.0 {
        2.0 * mag
    } else if residual <= 5.0 {
        5.0 * mag
    } else {
        10.0 * mag
    }
}

const SECS_PER_DAY: f64 = 86_400.0;
// Average month/year lengths, only used to pick a rung on the ladder.
const SECS_PER_MONTH: f64 = 30.44 * SECS_PER_DAY;
const SECS_PER_YEAR: f64 = 365.25 * SECS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TimeStep {
    Days(i64),
    Months(u32),
    Years(i32),
}

impl TimeStep {
    fn approx_secs(self) -> f64 {
        match self {
            TimeStep::Days(n) => n as f64 * SECS_PER_DAY,
            TimeStep::Months(n) => n as f64 * SECS_PER_MONTH,
            TimeStep::Years(n) => n as f64 * SECS_PER_YEAR,
        }
    }

    fn label_format(self) -> &'static str {
        match self {
            TimeStep::Days(_) => "%d %b",
            TimeStep::Months(_) => "%b %Y",
            TimeStep::Years(_) => "%Y",
        }
    }
}

const TIME_STEP_LADDER: [TimeStep; 13] = [
    TimeStep::Days(1),
    TimeStep::Days(2),
    TimeStep::Days(7),
    TimeStep::Days(14),
    TimeStep::Months(1),
    TimeStep::Months(3),
    TimeStep::Months(6),
    TimeStep::Years(1),
    TimeStep::Years(2),
    TimeStep::Years(5),
    TimeStep::Years(10),
    TimeStep::Years(20),
    TimeStep::Years(50),
];

/// Calendar-aligned ticks for the time axis, at most roughly `target`.
pub fn time_ticks(scale: &TimeScale, target: usize) -> Vec<Tick> {
    let (t0, t1) = scale.domain();
    let span = t1 - t0;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }
    let step = *TIME_STEP_LADDER
        .iter()
        .find(|s| span / s.approx_secs() <= target as f64)
        .unwrap_or(&TimeStep::Years(100));
    let fmt = step.label_format();

    let mut ticks = Vec::new();
    let mut date = match first_aligned_date(t0, step) {
        Some(d) => d,
        None => return Vec::new(),
    };
    loop {
        let secs = date_to_secs(date);
        if secs > t1 {
            break;
        }
        if secs >= t0 {
            ticks.push(Tick {
                px: scale.px_at(secs),
                label: date.format(fmt).to_string(),
            });
        }
        date = match advance(date, step) {
            Some(d) => d,
            None => break,
        };
        if ticks.len() > target * 4 {
            // Safety stop if the ladder and the domain disagree wildly.
            break;
        }
    }
    ticks
}

/// First step-aligned calendar date at or after `t0`.
fn first_aligned_date(t0: f64, step: TimeStep) -> Option<NaiveDate> {
    let dt = secs_to_datetime(t0)?;
    let floor = dt.date();
    match step {
        TimeStep::Days(_) => {
            if date_to_secs(floor) >= t0 {
                Some(floor)
            } else {
                floor.succ_opt()
            }
        }
        TimeStep::Months(_) => {
            let first = NaiveDate::from_ymd_opt(floor.year(), floor.month(), 1)?;
            if date_to_secs(first) >= t0 {
                Some(first)
            } else {
                first.checked_add_months(Months::new(1))
            }
        }
        TimeStep::Years(n) => {
            let jan1 = NaiveDate::from_ymd_opt(floor.year(), 1, 1)?;
            let mut year = if date_to_secs(jan1) >= t0 {
                floor.year()
            } else {
                floor.year() + 1
            };
            // Align multi-year steps to multiples of the step.
            year = year.div_euclid(n) * n + if year.rem_euclid(n) == 0 { 0 } else { n };
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
    }
}

fn advance(date: NaiveDate, step: TimeStep) -> Option<NaiveDate> {
    match step {
        TimeStep::Days(n) => date.checked_add_signed(Duration::days(n)),
        TimeStep::Months(n) => date.checked_add_months(Months::new(n)),
        TimeStep::Years(n) => NaiveDate::from_ymd_opt(date.year() + n, 1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn nice_steps_snap_to_1_2_5() {
        assert_eq!(nice_step(1.7), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.2), 10.0);
        assert_eq!(nice_step(0.12), 0.2);
    }

    #[test]
    fn value_ticks_cover_domain_in_order() {
        let scale = LinearScale::new((9.0, 21.0), (230.0, 5.0));
        let ticks = value_ticks(&scale, 6);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 8);
        assert_eq!(ticks.first().unwrap().label, "10");
        assert_eq!(ticks.last().unwrap().label, "20");
        // Inverted range: later ticks sit higher on screen.
        assert!(ticks.first().unwrap().px > ticks.last().unwrap().px);
    }

    #[test]
    fn fractional_steps_keep_decimals() {
        let scale = LinearScale::new((0.0, 1.0), (230.0, 5.0));
        let ticks = value_ticks(&scale, 5);
        assert!(ticks.iter().any(|t| t.label == "0.2"));
    }

    #[test]
    fn month_span_uses_day_labels() {
        let scale = TimeScale::new((d(2020, 1, 1), d(2020, 1, 15)), (25.0, 775.0));
        let ticks = time_ticks(&scale, 8);
        assert!(!ticks.is_empty());
        assert_eq!(ticks[0].label, "01 Jan");
    }

    #[test]
    fn year_span_uses_month_labels() {
        let scale = TimeScale::new((d(2019, 1, 1), d(2020, 1, 1)), (25.0, 775.0));
        let ticks = time_ticks(&scale, 6);
        assert!(!ticks.is_empty());
        assert!(ticks[0].label.contains("2019"));
    }

    #[test]
    fn decade_span_uses_year_labels() {
        let scale = TimeScale::new((d(2000, 1, 1), d(2020, 1, 1)), (25.0, 775.0));
        let ticks = time_ticks(&scale, 6);
        assert!(ticks.iter().all(|t| t.label.len() == 4));
        assert!(ticks.iter().any(|t| t.label == "2010"));
    }

    #[test]
    fn ticks_stay_inside_pixel_range() {
        let scale = TimeScale::new((d(2020, 1, 1), d(2020, 6, 1)), (25.0, 775.0));
        for t in time_ticks(&scale, 10) {
            assert!(t.px >= 25.0 - 1e-6 && t.px <= 775.0 + 1e-6);
        }
    }
}
