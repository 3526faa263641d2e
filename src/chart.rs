//! The chart renderer: owns the data, scales, view transform, and tooltip
//! state, and exposes the pointer/zoom event surface.
//!
//! There is no DOM here; each event method mutates the renderer and
//! [`ChartRenderer::render_svg`] serializes the current state as a fresh SVG
//! snapshot. All state lives on the instance, never in globals.

use crate::loader;
use crate::models::{Sample, date_extent, padded_value_extent};
use crate::render;
use crate::scale::{LinearScale, TimeScale};
use crate::tooltip::{self, TooltipState};
use crate::view::{DEFAULT_ZOOM_EXTENT, ViewTransform};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// RGB color (SVG output only, no alpha needed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    /// Gridline gray `#BBB`.
    pub const GRID: Rgb = Rgb(0xBB, 0xBB, 0xBB);
    /// Tooltip border `#AAA`.
    pub const TOOLTIP_BORDER: Rgb = Rgb(0xAA, 0xAA, 0xAA);
    /// Tooltip background `#F5F5F5`.
    pub const TOOLTIP_BG: Rgb = Rgb(0xF5, 0xF5, 0xF5);
}

/// Visual configuration. The defaults produce an 800×250 chart with a red
/// 1px series line and light-gray gridlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub series_color: Rgb,
    pub series_stroke_width: u32,
    pub grid_color: Rgb,
    pub tooltip_background: Rgb,
    pub tooltip_border: Rgb,
    pub tooltip_padding: f64,
    pub highlight_radius: f64,
    pub axis_font_px: u32,
    /// Allowed zoom factor interval.
    pub zoom_extent: (f64, f64),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 250,
            margins: Margins {
                top: 5.0,
                right: 25.0,
                bottom: 20.0,
                left: 25.0,
            },
            series_color: Rgb::RED,
            series_stroke_width: 1,
            grid_color: Rgb::GRID,
            tooltip_background: Rgb::TOOLTIP_BG,
            tooltip_border: Rgb::TOOLTIP_BORDER,
            tooltip_padding: 5.0,
            highlight_radius: 5.0,
            axis_font_px: 11,
            zoom_extent: DEFAULT_ZOOM_EXTENT,
        }
    }
}

/// One chart instance. Create per chart; there are no process-wide
/// singletons.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    pub(crate) samples: Vec<Sample>,
    /// Original `DD/MM/YYYY` strings, the tooltip lookup table.
    pub(crate) date_keys: Vec<String>,
    pub(crate) x_scale: TimeScale,
    pub(crate) y_scale: LinearScale,
    pub(crate) view: ViewTransform,
    pub(crate) tooltip: TooltipState,
    pub(crate) config: ChartConfig,
}

impl ChartRenderer {
    /// Build scales from the full data extent and start at identity view.
    pub fn new(samples: Vec<Sample>, config: ChartConfig) -> Result<Self> {
        let (min_date, max_date) =
            date_extent(&samples).ok_or_else(|| anyhow!("no data to plot"))?;
        let (y_lo, y_hi) =
            padded_value_extent(&samples).ok_or_else(|| anyhow!("no numeric values to plot"))?;
        let x_scale = TimeScale::new(
            (min_date, max_date),
            (config.margins.left, config.width as f64 - config.margins.right),
        );
        let y_scale = LinearScale::new(
            (y_lo, y_hi),
            (config.height as f64 - config.margins.bottom, config.margins.top),
        );
        let date_keys = samples.iter().map(|s| s.date_key()).collect();
        Ok(Self {
            samples,
            date_keys,
            x_scale,
            y_scale,
            view: ViewTransform::identity(),
            tooltip: TooltipState::Hidden,
            config,
        })
    }

    /// Convenience: load the CSV and build the renderer in one step.
    pub fn from_csv<P: AsRef<Path>>(path: P, config: ChartConfig) -> Result<Self> {
        let samples = loader::load_csv(path)?;
        Self::new(samples, config)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The base (unzoomed) x scale over the full data extent.
    pub fn x_scale(&self) -> &TimeScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// The x scale reflecting the current zoom/pan transform.
    pub fn zoomed_x_scale(&self) -> TimeScale {
        self.view.rescale(&self.x_scale)
    }

    /// Plot rectangle `(x0, y0, x1, y1)`; doubles as the gesture area.
    pub fn plot_area(&self) -> (f64, f64, f64, f64) {
        let m = &self.config.margins;
        (
            m.left,
            m.top,
            self.config.width as f64 - m.right,
            self.config.height as f64 - m.bottom,
        )
    }

    fn in_plot_area(&self, x: f64, y: f64) -> bool {
        let (x0, y0, x1, y1) = self.plot_area();
        x >= x0 && x <= x1 && y >= y0 && y <= y1
    }

    /// Zoom-gesture tick anchored at `pixel_x`; the factor is clamped so the
    /// cumulative zoom stays inside the configured extent.
    pub fn zoom_at(&mut self, pixel_x: f64, factor: f64) {
        self.view.zoom_at(pixel_x, factor, self.config.zoom_extent);
        log::trace!("zoom k={} tx={}", self.view.k, self.view.tx);
    }

    /// Pan-gesture tick by `dx` pixels.
    pub fn pan_by(&mut self, dx: f64) {
        self.view.pan_by(dx);
    }

    /// Restore the identity transform and the original full x domain.
    pub fn reset_zoom(&mut self) {
        self.view.reset();
    }

    /// Pointer-move handler. Outside the gesture area this behaves like
    /// leaving the chart: tooltip and highlight are hidden.
    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        if !self.in_plot_area(x, y) {
            self.tooltip = TooltipState::Hidden;
            return;
        }
        let zoomed = self.zoomed_x_scale();
        self.tooltip = tooltip::hover(
            &self.samples,
            &self.date_keys,
            &zoomed,
            &self.y_scale,
            (x, y),
            self.config.tooltip_padding,
            self.config.width as f64,
        );
    }

    /// Pointer-out handler: hide tooltip and highlight unconditionally.
    pub fn on_mouse_out(&mut self) {
        self.tooltip = TooltipState::Hidden;
    }

    /// Serialize the current chart state as an SVG document.
    pub fn render_svg(&self) -> Result<String> {
        render::render_to_string(self)
    }

    /// Write the current chart state to an SVG file.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let svg = self.render_svg()?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("wrote chart to {}", path.as_ref().display());
        Ok(())
    }
}
