// File: crates/plot-core/tests/layers.rs
// Purpose: Color cycle, figure bookkeeping, linspace endpoints and paint order.

use approx::assert_relative_eq;
use plot_core::{linspace, AxisId, Chart, ColorCycle, Figure, Series, SeriesStyle, Theme, TAB10};

#[test]
fn color_cycle_wraps() {
    let mut cycle = ColorCycle::default();
    let first: Vec<_> = (0..TAB10.len()).map(|_| cycle.next_color()).collect();
    assert_eq!(first, TAB10.to_vec());
    assert_eq!(cycle.next_color(), TAB10[0]);
    assert_eq!(cycle.peek(), TAB10[1]);
    cycle.reset();
    assert_eq!(cycle.peek(), TAB10[0]);
}

#[test]
fn empty_palette_falls_back_to_tab10() {
    let cycle = ColorCycle::new(Vec::new());
    assert_eq!(cycle.palette(), &TAB10[..]);
}

#[test]
fn figure_gca_creates_once() {
    let mut fig = Figure::new();
    assert!(fig.is_empty());
    let a = fig.gca();
    let b = fig.gca();
    assert_eq!(a, b);
    assert_eq!(fig.len(), 1);

    let c = fig.add_chart();
    assert_eq!(fig.gca(), c);
    assert!(fig.set_current(a));
    assert_eq!(fig.gca(), a);
    assert!(!fig.set_current(AxisId(7)));
    assert!(fig.chart(AxisId(7)).is_none());
}

#[test]
fn figure_charts_cycle_from_theme_palette() {
    let theme = Theme::solarized_dark();
    let mut fig = Figure::with_theme(theme);
    assert_eq!(fig.theme().name, theme.name);
    let id = fig.gca();
    let chart = fig.chart_mut(id).unwrap();
    assert_eq!(chart.next_color(), theme.palette[0]);
}

#[test]
fn linspace_hits_endpoints_exactly() {
    let xs = linspace(0.0, 10.0, 100);
    assert_eq!(xs.len(), 100);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[99], 10.0);
    assert_relative_eq!(xs[1] - xs[0], 10.0 / 99.0, epsilon = 1e-12);

    let odd = linspace(0.1, 0.7, 7);
    assert_eq!(*odd.last().unwrap(), 0.7);
    assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
    assert!(linspace(3.0, 5.0, 0).is_empty());
}

#[test]
fn paint_order_sorts_by_z_then_insertion() {
    let mut chart = Chart::new();
    let c = TAB10[0];
    chart.add_series(Series::scatter(vec![(0.0, 0.0)], 3.0, SeriesStyle::new(c).with_z_order(1.0)).with_label("points"));
    chart.add_series(Series::line(vec![(0.0, 0.0), (1.0, 1.0)], 1.0, SeriesStyle::new(c).with_z_order(0.0)).with_label("line"));
    chart.add_series(Series::band(&[0.0, 1.0], &[0.0, 0.5], &[1.0, 1.5], SeriesStyle::new(c).with_z_order(1.0)).with_label("band"));

    let order: Vec<_> = chart.paint_order().iter().map(|s| s.label.clone().unwrap()).collect();
    assert_eq!(order, vec!["line", "points", "band"]);
}
