// File: crates/plot-core/src/series.rs
// Summary: Layer model for scatter points, polylines, and filled bands.

use crate::types::Color;

/// Geometry of a layer. Points live in [`Series::data_xy`]; a band also
/// carries its lower curve, evaluated at the same x coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesKind {
    /// Filled circular markers, `radius` in pixels.
    Scatter { radius: f32 },
    /// Polyline through the points, `width` in pixels.
    Line { width: f32 },
    /// Region between `lower` and the points, with an optional outline.
    Band { lower: Vec<f64>, edge_width: f32 },
}

/// Paint attributes shared by every layer kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    /// 0.0 (transparent) ..= 1.0 (opaque).
    pub opacity: f32,
    /// Layers paint in ascending z-order; ties keep insertion order.
    pub z_order: f32,
}

impl SeriesStyle {
    pub fn new(color: Color) -> Self {
        Self { color, opacity: 1.0, z_order: 0.0 }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.z_order = z_order;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    pub label: Option<String>,
}

impl Series {
    pub fn scatter(data: Vec<(f64, f64)>, radius: f32, style: SeriesStyle) -> Self {
        Self { kind: SeriesKind::Scatter { radius }, data_xy: data, style, label: None }
    }

    pub fn line(data: Vec<(f64, f64)>, width: f32, style: SeriesStyle) -> Self {
        Self { kind: SeriesKind::Line { width }, data_xy: data, style, label: None }
    }

    /// Filled region between `lower` and `upper`, both evaluated on `xs`.
    /// Curves longer than `xs` are truncated to its length.
    pub fn band(xs: &[f64], lower: &[f64], upper: &[f64], style: SeriesStyle) -> Self {
        let n = xs.len().min(lower.len()).min(upper.len());
        let data = xs[..n].iter().copied().zip(upper[..n].iter().copied()).collect();
        Self {
            kind: SeriesKind::Band { lower: lower[..n].to_vec(), edge_width: 0.0 },
            data_xy: data,
            style,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Data-space bounds `(x_min, x_max, y_min, y_max)` over every finite
    /// coordinate of the layer, or `None` when it has none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let lower: &[f64] = match &self.kind {
            SeriesKind::Band { lower, .. } => lower.as_slice(),
            _ => &[],
        };
        for (i, &(x, y)) in self.data_xy.iter().enumerate() {
            if !x.is_finite() { continue; }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            for v in std::iter::once(y).chain(lower.get(i).copied()) {
                if v.is_finite() {
                    y_min = y_min.min(v);
                    y_max = y_max.max(v);
                }
            }
        }
        if x_min.is_finite() && y_min.is_finite() {
            Some((x_min, x_max, y_min, y_max))
        } else {
            None
        }
    }
}
