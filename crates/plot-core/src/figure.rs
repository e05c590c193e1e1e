// File: crates/plot-core/src/figure.rs
// Summary: Figure owning one or more charts and tracking the current one.

use crate::axis::AxisId;
use crate::chart::Chart;
use crate::theme::Theme;

/// A collection of charts with a notion of the "current" axes that plotting
/// helpers draw on when no explicit target is given.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    charts: Vec<Chart>,
    current: Option<AxisId>,
    theme: Theme,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Figure whose charts start their color cycles from `theme`'s palette.
    pub fn with_theme(theme: Theme) -> Self {
        Self { charts: Vec::new(), current: None, theme }
    }

    /// Append a fresh chart and make it current.
    pub fn add_chart(&mut self) -> AxisId {
        self.charts.push(Chart::with_cycle(self.theme.color_cycle()));
        let id = AxisId(self.charts.len() - 1);
        self.current = Some(id);
        id
    }

    /// Current axes, creating a chart if the figure has none yet.
    pub fn gca(&mut self) -> AxisId {
        match self.current {
            Some(id) => id,
            None => self.add_chart(),
        }
    }

    /// Make `id` current. Returns false when the figure has no such chart.
    pub fn set_current(&mut self, id: AxisId) -> bool {
        if id.0 < self.charts.len() {
            self.current = Some(id);
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<AxisId> { self.current }

    pub fn chart(&self, id: AxisId) -> Option<&Chart> { self.charts.get(id.0) }

    pub fn chart_mut(&mut self, id: AxisId) -> Option<&mut Chart> { self.charts.get_mut(id.0) }

    pub fn charts(&self) -> &[Chart] { &self.charts }

    pub fn theme(&self) -> &Theme { &self.theme }

    pub fn len(&self) -> usize { self.charts.len() }

    pub fn is_empty(&self) -> bool { self.charts.is_empty() }
}
