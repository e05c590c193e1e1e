// File: crates/plot-core/src/color.rs
// Summary: Qualitative palettes and the per-chart color cycle.

use skia_safe as skia;

use crate::types::Color;

/// The ten-color "tab10" qualitative palette.
pub const TAB10: [Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

/// Solarized accent colors, in the order they are handed out.
pub const SOLARIZED: [Color; 8] = [
    skia::Color::new(0xff268bd2),
    skia::Color::new(0xffdc322f),
    skia::Color::new(0xff859900),
    skia::Color::new(0xffb58900),
    skia::Color::new(0xff6c71c4),
    skia::Color::new(0xff2aa198),
    skia::Color::new(0xffd33682),
    skia::Color::new(0xffcb4b16),
];

/// Saturated colors for the high-contrast theme.
pub const HIGH_CONTRAST: [Color; 6] = [
    skia::Color::new(0xff00ffff),
    skia::Color::new(0xffffff00),
    skia::Color::new(0xffff00ff),
    skia::Color::new(0xff00ff00),
    skia::Color::new(0xffff8000),
    skia::Color::new(0xffffffff),
];

/// Sequence of default colors handed to successive series on a chart.
///
/// The cycle owns its cursor; callers ask for the next color explicitly
/// instead of peeking into renderer state.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorCycle {
    palette: Vec<Color>,
    cursor: usize,
}

impl ColorCycle {
    /// Build a cycle over `palette`. An empty palette falls back to [`TAB10`].
    pub fn new(palette: impl Into<Vec<Color>>) -> Self {
        let mut palette = palette.into();
        if palette.is_empty() {
            palette = TAB10.to_vec();
        }
        Self { palette, cursor: 0 }
    }

    /// Return the current color and advance, wrapping at the end of the palette.
    pub fn next_color(&mut self) -> Color {
        let color = self.palette[self.cursor];
        self.cursor = (self.cursor + 1) % self.palette.len();
        color
    }

    /// Color the next call to [`next_color`](Self::next_color) will return.
    pub fn peek(&self) -> Color {
        self.palette[self.cursor]
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(TAB10)
    }
}
