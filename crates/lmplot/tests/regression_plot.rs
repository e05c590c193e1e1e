// File: crates/lmplot/tests/regression_plot.rs
// Purpose: Line, band, grid and layer behavior of a regression plot with supplied posteriors.

use approx::assert_relative_eq;
use lmplot::{plot_regression, Figure, PlotOptions, SamplePair, GRID_POINTS};
use ndarray::Array2;
use plot_core::{RenderOptions, SeriesKind};
use posterior::Posterior;

fn data() -> SamplePair {
    SamplePair::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![2.0, 4.0, 5.0, 4.0, 6.0]).unwrap()
}

/// Deterministic posterior with spread in both parameters.
fn spread_posterior() -> Posterior {
    let a = Array2::from_shape_fn((2, 200), |(c, d)| 1.0 + 0.3 * (((c * 200 + d) as f64) * 0.731).sin());
    let b = Array2::from_shape_fn((2, 200), |(c, d)| 0.8 + 0.1 * (((c * 200 + d) as f64) * 1.37).cos());
    Posterior::default()
        .with_param("Intercept", a)
        .unwrap()
        .with_param("x", b)
        .unwrap()
}

fn constant_posterior(intercept: f64, slope: f64) -> Posterior {
    Posterior::default()
        .with_param("Intercept", Array2::from_elem((4, 250), intercept))
        .unwrap()
        .with_param("x", Array2::from_elem((4, 250), slope))
        .unwrap()
}

#[test]
fn line_is_posterior_mean_regression() {
    let mut fig = Figure::new();
    let plot = plot_regression(&mut fig, &data(), Some(spread_posterior()), &PlotOptions::default()).unwrap();

    let a = plot.summary.mean("Intercept").unwrap();
    let b = plot.summary.mean("x").unwrap();
    assert_eq!(plot.grid.len(), GRID_POINTS);
    assert_eq!(plot.line.len(), GRID_POINTS);
    for (x, y) in plot.grid.iter().zip(&plot.line) {
        assert_relative_eq!(*y, a + b * x, epsilon = 1e-12);
    }

    // The line layer carries the same values.
    let chart = fig.chart(plot.axis).unwrap();
    let line = chart.series.iter().find(|s| matches!(s.kind, SeriesKind::Line { .. })).unwrap();
    let ys: Vec<f64> = line.data_xy.iter().map(|&(_, y)| y).collect();
    assert_eq!(ys, plot.line);
}

#[test]
fn grid_defaults_to_observed_span() {
    let mut fig = Figure::new();
    let plot = plot_regression(&mut fig, &data(), Some(spread_posterior()), &PlotOptions::default()).unwrap();
    assert_eq!(plot.grid[0], 1.0);
    assert_eq!(plot.grid[GRID_POINTS - 1], 5.0);
}

#[test]
fn band_lower_never_exceeds_upper() {
    for mass in [0.01, 0.5, 0.8, 0.95, 0.999] {
        let mut fig = Figure::new();
        let opts = PlotOptions::default().with_credible_mass(mass);
        let plot = plot_regression(&mut fig, &data(), Some(spread_posterior()), &opts).unwrap();
        assert_eq!(plot.lower.len(), GRID_POINTS);
        for (lo, hi) in plot.lower.iter().zip(&plot.upper) {
            assert!(lo <= hi, "mass {mass}: {lo} > {hi}");
        }
    }
}

#[test]
fn wider_mass_gives_wider_band() {
    let mut fig = Figure::new();
    let narrow = plot_regression(&mut fig, &data(), Some(spread_posterior()), &PlotOptions::default().with_credible_mass(0.5)).unwrap();
    let wide = plot_regression(&mut fig, &data(), Some(spread_posterior()), &PlotOptions::default().with_credible_mass(0.95)).unwrap();
    for i in 0..GRID_POINTS {
        assert!(wide.lower[i] <= narrow.lower[i]);
        assert!(wide.upper[i] >= narrow.upper[i]);
    }
}

#[test]
fn same_posterior_same_arrays() {
    let opts = PlotOptions::default();
    let first = plot_regression(&mut Figure::new(), &data(), Some(spread_posterior()), &opts).unwrap();
    let second = plot_regression(&mut Figure::new(), &data(), Some(spread_posterior()), &opts).unwrap();
    assert_eq!(first.grid, second.grid);
    assert_eq!(first.line, second.line);
    assert_eq!(first.lower, second.lower);
    assert_eq!(first.upper, second.upper);
}

#[test]
fn x_range_overrides_data_span() {
    let mut fig = Figure::new();
    let opts = PlotOptions::default().with_x_range(0.0, 10.0);
    let plot = plot_regression(&mut fig, &data(), Some(spread_posterior()), &opts).unwrap();
    assert_eq!(plot.grid.len(), 100);
    assert_eq!(plot.grid[0], 0.0);
    assert_eq!(plot.grid[99], 10.0);
    assert_relative_eq!(plot.grid[1], 10.0 / 99.0, epsilon = 1e-12);

    let chart = fig.chart(plot.axis).unwrap();
    let band = chart.series.iter().find(|s| matches!(s.kind, SeriesKind::Band { .. })).unwrap();
    assert_eq!(band.data_xy.first().unwrap().0, 0.0);
    assert_eq!(band.data_xy.last().unwrap().0, 10.0);
}

#[test]
fn descending_x_range_reverses_grid_with_same_line() {
    let post = spread_posterior();
    let up = PlotOptions::default().with_x_range(0.0, 10.0);
    let down = PlotOptions::default().with_x_range(10.0, 0.0);
    let forward = plot_regression(&mut Figure::new(), &data(), Some(post.clone()), &up).unwrap();
    let backward = plot_regression(&mut Figure::new(), &data(), Some(post), &down).unwrap();

    assert_eq!(backward.grid[0], 10.0);
    assert_eq!(backward.grid[99], 0.0);
    for (f, b) in forward.line.iter().zip(backward.line.iter().rev()) {
        assert_relative_eq!(*f, *b, epsilon = 1e-9);
    }
    for (f, b) in forward.upper.iter().zip(backward.upper.iter().rev()) {
        assert_relative_eq!(*f, *b, epsilon = 1e-9);
    }
}

#[test]
fn zero_variance_posterior_collapses_band_onto_line() {
    let mut fig = Figure::new();
    let plot = plot_regression(&mut fig, &data(), Some(constant_posterior(1.0, 1.0)), &PlotOptions::default()).unwrap();
    for i in 0..GRID_POINTS {
        let expected = 1.0 + 1.0 * plot.grid[i];
        assert_eq!(plot.line[i], expected);
        assert_eq!(plot.lower[i], expected);
        assert_eq!(plot.upper[i], expected);
    }
    let row = plot.summary.get("x").unwrap();
    assert_eq!((row.lower, row.upper), (1.0, 1.0));
}

#[test]
fn adds_scatter_line_and_band_layers() {
    let mut fig = Figure::new();
    let plot = plot_regression(&mut fig, &data(), Some(spread_posterior()), &PlotOptions::default()).unwrap();
    let chart = fig.chart(plot.axis).unwrap();
    assert_eq!(chart.series.len(), 3);

    let scatter = &chart.series[0];
    assert!(matches!(scatter.kind, SeriesKind::Scatter { .. }));
    assert_eq!(scatter.data_xy, data().points());
    assert_eq!(scatter.style.color, plot.scatter_color);

    let line = &chart.series[1];
    assert!(matches!(line.kind, SeriesKind::Line { .. }));
    assert_eq!(line.style.color, plot.line_color);

    let band = &chart.series[2];
    match &band.kind {
        SeriesKind::Band { lower, edge_width } => {
            assert_eq!(lower, &plot.lower);
            assert_eq!(*edge_width, 0.0);
        }
        other => panic!("expected band, got {other:?}"),
    }
    assert_eq!(band.style.opacity, 0.6);
    assert_eq!(band.style.color, plot.line_color);

    // Line below scatter, band above line.
    let order: Vec<_> = chart
        .paint_order()
        .iter()
        .map(|s| match s.kind {
            SeriesKind::Scatter { .. } => "scatter",
            SeriesKind::Line { .. } => "line",
            SeriesKind::Band { .. } => "band",
        })
        .collect();
    assert_eq!(order, vec!["line", "scatter", "band"]);
}

#[test]
fn supplied_posterior_is_returned() {
    let post = spread_posterior();
    let plot = plot_regression(&mut Figure::new(), &data(), Some(post.clone()), &PlotOptions::default()).unwrap();
    assert_eq!(plot.posterior, post);
    assert_eq!(plot.summary.len(), 2);
    assert_eq!(plot.summary.credible_mass(), 0.95);
}

#[test]
fn renders_to_png() {
    let mut fig = Figure::new();
    let plot = plot_regression(&mut fig, &data(), Some(spread_posterior()), &PlotOptions::default()).unwrap();
    let chart = fig.chart_mut(plot.axis).unwrap();
    chart.autoscale_axes(0.05);
    assert!(chart.y_axis.min <= plot.lower.iter().cloned().fold(f64::INFINITY, f64::min));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
