// File: crates/plot-core/src/lib.rs
// Summary: Plot surface entry point; exports figures, charts, layers, colors and rendering.

pub mod axis;
pub mod chart;
pub mod color;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, AxisId};
pub use chart::{Chart, RenderOptions};
pub use color::{ColorCycle, TAB10};
pub use figure::Figure;
pub use grid::linspace;
pub use series::{Series, SeriesKind, SeriesStyle};
pub use theme::Theme;
pub use types::{Color, Insets};
pub use view::ViewState;
