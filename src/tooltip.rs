//! Nearest-day tooltip hit-testing and placement.
//!
//! Snapping is exact-day matching against the original date keys, not true
//! nearest-neighbor distance: a pointer over a gap day hides the tooltip
//! instead of jumping to the nearest available sample. That is intended.

use crate::models::{DATE_FORMAT, Sample, secs_to_datetime};
use crate::scale::{LinearScale, TimeScale};
use chrono::NaiveDate;

/// Fixed pointer-to-box offset, up and to the side.
const POINTER_OFFSET: f64 = 10.0;
/// Half a day in seconds; shifts the snap boundary to midday between samples.
const HALF_DAY_SECS: f64 = 43_200.0;
/// Axis/tooltip font size used for the width heuristic.
const FONT_PX: u32 = 11;
const LINE_HEIGHT: f64 = 14.0;

/// A visible tooltip anchored to one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Index of the matched sample in the original ordered list.
    pub index: usize,
    /// Highlight marker center, in current (zoomed) pixel coordinates.
    pub marker: (f64, f64),
    /// Top-left corner of the tooltip box.
    pub anchor: (f64, f64),
    /// Box size including padding.
    pub size: (f64, f64),
    /// First line: the date formatted `%d %b %Y`.
    pub date_line: String,
    /// Second line (bold): the temperature to one decimal place.
    pub value_line: String,
}

/// Tooltip visibility; recomputed per pointer move, last event wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(Tooltip),
}

impl TooltipState {
    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible(_))
    }
}

/// Snap a pixel position to a calendar day through the (zoomed) x scale.
///
/// Adds 12 hours before truncating so the day boundary falls exactly halfway
/// between two neighboring midnights.
pub fn snap_to_day(x_scale: &TimeScale, pixel_x: f64) -> Option<NaiveDate> {
    let secs = x_scale.invert(pixel_x);
    secs_to_datetime(secs + HALF_DAY_SECS).map(|dt| dt.date())
}

/// The two tooltip text lines for a sample.
pub fn tooltip_lines(sample: &Sample) -> (String, String) {
    (
        sample.date.format("%d %b %Y").to_string(),
        format!("{:.1}°C", sample.high_temperature),
    )
}

/// Heuristic text width (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> f64 {
    (text.chars().count() as f64) * (font_px as f64) * 0.60
}

/// Place the tooltip box above-right of the pointer, flipping to above-left
/// when its right edge would pass the chart width. Returns (anchor, size).
pub fn place_box(
    pointer: (f64, f64),
    lines: (&str, &str),
    padding: f64,
    chart_width: f64,
) -> ((f64, f64), (f64, f64)) {
    let text_w = estimate_text_width_px(lines.0, FONT_PX).max(estimate_text_width_px(lines.1, FONT_PX));
    let w = text_w + 2.0 * padding;
    let h = 2.0 * LINE_HEIGHT + 2.0 * padding;
    let top = pointer.1 - h - POINTER_OFFSET;
    let mut left = pointer.0 + POINTER_OFFSET;
    if left + w > chart_width {
        left = pointer.0 - w - POINTER_OFFSET;
    }
    ((left, top), (w, h))
}

/// Full hit-test for one pointer-move event.
///
/// The lookup key is the *unzoomed* original date string, while the marker
/// position uses the current x scale so it tracks zoom.
pub fn hover(
    samples: &[Sample],
    date_keys: &[String],
    x_scale: &TimeScale,
    y_scale: &LinearScale,
    pointer: (f64, f64),
    padding: f64,
    chart_width: f64,
) -> TooltipState {
    let Some(day) = snap_to_day(x_scale, pointer.0) else {
        return TooltipState::Hidden;
    };
    let key = day.format(DATE_FORMAT).to_string();
    let Some(index) = date_keys.iter().position(|k| *k == key) else {
        return TooltipState::Hidden;
    };
    let sample = &samples[index];
    let (date_line, value_line) = tooltip_lines(sample);
    let (anchor, size) = place_box(
        pointer,
        (&date_line, &value_line),
        padding,
        chart_width,
    );
    TooltipState::Visible(Tooltip {
        index,
        marker: (x_scale.px(sample.date), y_scale.px(sample.high_temperature)),
        anchor,
        size,
        date_line,
        value_line,
    })
}
