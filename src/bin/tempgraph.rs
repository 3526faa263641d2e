use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tempgraph::models::DATE_FORMAT;
use tempgraph::{ChartConfig, ChartRenderer, loader};

#[derive(Parser, Debug)]
#[command(
    name = "tempgraph",
    version,
    about = "Render a daily temperature CSV as a pan/zoom-able SVG line chart"
)]
struct Cli {
    /// Input CSV with Date (DD/MM/YYYY) and HighTemperature columns.
    input: PathBuf,
    /// Output SVG path.
    #[arg(short, long, default_value = "chart.svg")]
    out: PathBuf,
    /// Chart width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Chart height in pixels.
    #[arg(long, default_value_t = 250)]
    height: u32,
    /// Zoom factor applied around the plot center (clamped to [1, 12]).
    #[arg(long)]
    zoom: Option<f64>,
    /// Horizontal pan in pixels, applied after zooming.
    #[arg(long)]
    pan: Option<f64>,
    /// Render with the tooltip shown for this date (DD/MM/YYYY).
    #[arg(long)]
    hover: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let samples = loader::load_csv(&cli.input)?;
    log::info!(
        "loaded {} samples from {}",
        samples.len(),
        cli.input.display()
    );

    let config = ChartConfig {
        width: cli.width,
        height: cli.height,
        ..ChartConfig::default()
    };
    let mut chart = ChartRenderer::new(samples, config)?;

    if let Some(factor) = cli.zoom {
        let (x0, _, x1, _) = chart.plot_area();
        chart.zoom_at((x0 + x1) / 2.0, factor);
    }
    if let Some(dx) = cli.pan {
        chart.pan_by(dx);
    }
    if let Some(date_str) = cli.hover {
        let date = NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).map_err(|_| {
            anyhow::anyhow!("invalid --hover date {date_str:?}, expected DD/MM/YYYY")
        })?;
        let sample = chart
            .samples()
            .iter()
            .find(|s| s.date == date)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no sample on {date_str}"))?;
        let x = chart.zoomed_x_scale().px(sample.date);
        let y = chart.y_scale().px(sample.high_temperature);
        chart.on_mouse_move(x, y);
        if !chart.tooltip().is_visible() {
            log::warn!("hover date {date_str} is outside the visible plot area");
        }
    }

    chart.render_to_file(&cli.out)?;
    eprintln!("Wrote chart to {}", cli.out.display());
    Ok(())
}
