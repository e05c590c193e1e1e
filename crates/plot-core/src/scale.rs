// File: crates/plot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps an axis range onto a pixel interval. Y scales are flipped so larger
/// values land nearer the top of the surface.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { vmin, vmax, px_start, px_end };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn horizontal(axis: &Axis, rect: &RectI32) -> Self {
        Self::new(axis.min, axis.max, rect.left as f32, rect.right as f32)
    }

    pub fn vertical(axis: &Axis, rect: &RectI32) -> Self {
        Self::new(axis.min, axis.max, rect.bottom as f32, rect.top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + frac as f32 * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let frac = ((px - self.px_start) / (self.px_end - self.px_start)) as f64;
        self.vmin + frac * (self.vmax - self.vmin)
    }
}
