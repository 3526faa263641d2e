//! tempgraph
//!
//! A lightweight Rust library for rendering an interactive-style daily
//! temperature chart: CSV in, SVG out. Pairs with the `tempgraph` CLI.
//!
//! ### Features
//! - Load and validate `Date`/`HighTemperature` CSV data
//! - Invertible time/value scales over the full data extent
//! - Horizontal zoom/pan (factor clamped to [1, 12]) with exact reset
//! - Nearest-day hover tooltip with a point highlight
//! - Render any chart state to an SVG string or file
//!
//! ### Example
//! ```no_run
//! use tempgraph::{ChartConfig, ChartRenderer};
//!
//! let samples = tempgraph::loader::load_csv("temperature-data.csv")?;
//! let mut chart = ChartRenderer::new(samples, ChartConfig::default())?;
//! chart.zoom_at(400.0, 2.0);
//! chart.on_mouse_move(400.0, 120.0);
//! chart.render_to_file("chart.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod axis;
pub mod chart;
pub mod loader;
pub mod models;
pub mod render;
pub mod scale;
pub mod tooltip;
pub mod view;

pub use chart::{ChartConfig, ChartRenderer, Margins, Rgb};
pub use loader::LoadError;
pub use models::Sample;
pub use tooltip::TooltipState;
pub use view::ViewTransform;
