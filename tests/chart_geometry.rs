use chrono::NaiveDate;
use tempgraph::{ChartConfig, ChartRenderer, Sample};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn january_samples() -> Vec<Sample> {
    (1..=31)
        .map(|day| Sample::new(d(2020, 1, day), 10.0 + (day as f64) * 0.5))
        .collect()
}

#[test]
fn x_scale_endpoints_hit_the_margins_exactly() {
    let chart = ChartRenderer::new(january_samples(), ChartConfig::default()).unwrap();
    let x = chart.x_scale();
    // width 800, margins left/right 25.
    assert_eq!(x.px(d(2020, 1, 1)), 25.0);
    assert_eq!(x.px(d(2020, 1, 31)), 775.0);
}

#[test]
fn y_scale_is_monotonically_decreasing_in_value() {
    let chart = ChartRenderer::new(january_samples(), ChartConfig::default()).unwrap();
    let y = chart.y_scale();
    let mut last = f64::INFINITY;
    for v in [10.0, 12.0, 15.0, 20.0, 25.5] {
        let px = y.px(v);
        assert!(px < last, "higher value must map to smaller pixel y");
        last = px;
    }
}

#[test]
fn y_domain_is_padded_ten_percent() {
    // Values span 10..20, so the padded domain is 9..21 and its edges map
    // to the bottom/top of the plot area (height 250, bottom 20, top 5).
    let samples = vec![Sample::new(d(2020, 1, 1), 10.0), Sample::new(d(2020, 1, 2), 20.0)];
    let chart = ChartRenderer::new(samples, ChartConfig::default()).unwrap();
    let y = chart.y_scale();
    assert!((y.px(9.0) - 230.0).abs() < 1e-9);
    assert!((y.px(21.0) - 5.0).abs() < 1e-9);
}

#[test]
fn flat_series_still_renders_with_finite_geometry() {
    let samples = vec![
        Sample::new(d(2020, 1, 1), 15.0),
        Sample::new(d(2020, 1, 2), 15.0),
        Sample::new(d(2020, 1, 3), 15.0),
    ];
    let chart = ChartRenderer::new(samples, ChartConfig::default()).unwrap();
    assert!(chart.y_scale().px(15.0).is_finite());
    let svg = chart.render_svg().unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn single_sample_widens_the_time_domain() {
    let samples = vec![Sample::new(d(2020, 6, 1), 18.0)];
    let chart = ChartRenderer::new(samples, ChartConfig::default()).unwrap();
    let px = chart.x_scale().px(d(2020, 6, 1));
    assert!(px.is_finite());
    assert!(px > 25.0 && px < 775.0);
}

#[test]
fn empty_dataset_is_an_error() {
    assert!(ChartRenderer::new(Vec::new(), ChartConfig::default()).is_err());
}

#[test]
fn custom_size_moves_the_plot_area() {
    let config = ChartConfig {
        width: 1000,
        height: 400,
        ..ChartConfig::default()
    };
    let chart = ChartRenderer::new(january_samples(), config).unwrap();
    let (x0, y0, x1, y1) = chart.plot_area();
    assert_eq!((x0, y0, x1, y1), (25.0, 5.0, 975.0, 380.0));
    assert_eq!(chart.x_scale().px(d(2020, 1, 31)), 975.0);
}
