//! SVG serialization of the current chart state.
//!
//! Geometry comes from this crate's own scales; Plotters is used purely as
//! the SVG emitter, so the pixel contract (margins, tick positions, marker
//! placement) is exact. Pan/zoom is realized by recomputing point positions
//! against the zoomed x scale and clipping the series to the plot rectangle,
//! which keeps the stroke width constant at any zoom level.

use crate::axis::{self, Tick};
use crate::chart::{ChartRenderer, Rgb};
use crate::tooltip::TooltipState;
use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontStyle};
use plotters_svg::SVGBackend;

const TICK_LABEL_GAP: f64 = 4.0;
const TIME_TICK_SPACING_PX: f64 = 80.0;
const VALUE_TICK_SPACING_PX: f64 = 30.0;
const TOOLTIP_LINE_HEIGHT: f64 = 14.0;

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Render the chart state into an SVG document string.
pub fn render_to_string(chart: &ChartRenderer) -> Result<String> {
    let cfg = chart.config();
    let mut out = String::new();
    {
        let root =
            SVGBackend::with_string(&mut out, (cfg.width, cfg.height)).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root, chart)?;
        root.present()?;
    }
    Ok(out)
}

fn draw(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    chart: &ChartRenderer,
) -> Result<()> {
    let cfg = chart.config();
    let (x0, y0, x1, y1) = chart.plot_area();
    let zoomed = chart.zoomed_x_scale();

    let left_style: TextStyle = TextStyle::from((FontFamily::SansSerif, cfg.axis_font_px))
        .pos(Pos::new(HPos::Right, VPos::Center));
    let right_style: TextStyle = TextStyle::from((FontFamily::SansSerif, cfg.axis_font_px))
        .pos(Pos::new(HPos::Left, VPos::Center));
    let bottom_style: TextStyle = TextStyle::from((FontFamily::SansSerif, cfg.axis_font_px))
        .pos(Pos::new(HPos::Center, VPos::Top));

    // Left value axis: full-width tick lines double as gridlines; the right
    // axis mirrors the same ticks without lines.
    let value_target = (((y1 - y0) / VALUE_TICK_SPACING_PX) as usize).max(2);
    let grid_style = rgb(cfg.grid_color).stroke_width(1);
    for Tick { px, label } in axis::value_ticks(chart.y_scale(), value_target) {
        let y = px.round() as i32;
        root.draw(&PathElement::new(
            vec![(x0.round() as i32, y), (x1.round() as i32, y)],
            grid_style,
        ))?;
        root.draw(&Text::new(
            label.clone(),
            ((x0 - TICK_LABEL_GAP).round() as i32, y),
            left_style.clone(),
        ))?;
        root.draw(&Text::new(
            label,
            ((x1 + TICK_LABEL_GAP).round() as i32, y),
            right_style.clone(),
        ))?;
    }

    // Bottom time axis, re-derived from the zoomed domain.
    let time_target = (((x1 - x0) / TIME_TICK_SPACING_PX) as usize).max(2);
    for Tick { px, label } in axis::time_ticks(&zoomed, time_target) {
        root.draw(&Text::new(
            label,
            (px.round() as i32, (y1 + TICK_LABEL_GAP).round() as i32),
            bottom_style.clone(),
        ))?;
    }

    // Series polyline, clipped to the plot rectangle's x extent.
    let points: Vec<(f64, f64)> = chart
        .samples()
        .iter()
        .map(|s| (zoomed.px(s.date), chart.y_scale().px(s.high_temperature)))
        .collect();
    let series_style = rgb(cfg.series_color).stroke_width(cfg.series_stroke_width);
    for chunk in clip_polyline_x(&points, x0, x1) {
        let path: Vec<(i32, i32)> = chunk
            .iter()
            .map(|&(x, y)| (x.round() as i32, y.round() as i32))
            .collect();
        root.draw(&PathElement::new(path, series_style))?;
    }

    if let TooltipState::Visible(tt) = chart.tooltip() {
        // Highlight marker on the anchored sample.
        root.draw(&Circle::new(
            (tt.marker.0.round() as i32, tt.marker.1.round() as i32),
            cfg.highlight_radius.round() as i32,
            rgb(cfg.series_color).filled(),
        ))?;

        // Tooltip box: filled background plus border.
        let (bx, by) = (tt.anchor.0.round() as i32, tt.anchor.1.round() as i32);
        let (bw, bh) = (tt.size.0.round() as i32, tt.size.1.round() as i32);
        root.draw(&Rectangle::new(
            [(bx, by), (bx + bw, by + bh)],
            rgb(cfg.tooltip_background).filled(),
        ))?;
        root.draw(&Rectangle::new(
            [(bx, by), (bx + bw, by + bh)],
            rgb(cfg.tooltip_border).stroke_width(1),
        ))?;

        let pad = cfg.tooltip_padding;
        let text_style: TextStyle = TextStyle::from((FontFamily::SansSerif, cfg.axis_font_px))
            .pos(Pos::new(HPos::Left, VPos::Top));
        let bold_style: TextStyle =
            TextStyle::from((FontFamily::SansSerif, cfg.axis_font_px, FontStyle::Bold))
                .pos(Pos::new(HPos::Left, VPos::Top));
        root.draw(&Text::new(
            tt.date_line.clone(),
            (
                (tt.anchor.0 + pad).round() as i32,
                (tt.anchor.1 + pad).round() as i32,
            ),
            text_style,
        ))?;
        root.draw(&Text::new(
            tt.value_line.clone(),
            (
                (tt.anchor.0 + pad).round() as i32,
                (tt.anchor.1 + pad + TOOLTIP_LINE_HEIGHT).round() as i32,
            ),
            bold_style,
        ))?;
    }

    Ok(())
}

/// Clip a polyline to the horizontal band `[x0, x1]`, returning the visible
/// runs. Interpolated crossing points keep segment slopes intact.
fn clip_polyline_x(points: &[(f64, f64)], x0: f64, x1: f64) -> Vec<Vec<(f64, f64)>> {
    let mut chunks: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        match clip_segment_x(a, b, x0, x1) {
            Some((ca, cb)) => {
                if let Some(&last) = current.last() {
                    if (last.0 - ca.0).abs() > 1e-6 || (last.1 - ca.1).abs() > 1e-6 {
                        chunks.push(std::mem::take(&mut current));
                        current.push(ca);
                    }
                } else {
                    current.push(ca);
                }
                current.push(cb);
            }
            None => {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks.retain(|c| c.len() >= 2);
    chunks
}

fn clip_segment_x(
    a: (f64, f64),
    b: (f64, f64),
    x0: f64,
    x1: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let dx = b.0 - a.0;
    let (mut ta, mut tb) = (0.0_f64, 1.0_f64);
    if dx.abs() < f64::EPSILON {
        if a.0 < x0 || a.0 > x1 {
            return None;
        }
    } else {
        let t_lo = (x0 - a.0) / dx;
        let t_hi = (x1 - a.0) / dx;
        let (tmin, tmax) = if t_lo <= t_hi { (t_lo, t_hi) } else { (t_hi, t_lo) };
        ta = ta.max(tmin);
        tb = tb.min(tmax);
        if ta > tb {
            return None;
        }
    }
    let at = |t: f64| (a.0 + dx * t, a.1 + (b.1 - a.1) * t);
    Some((at(ta), at(tb)))
}
