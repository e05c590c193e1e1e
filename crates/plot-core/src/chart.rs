// File: crates/plot-core/src/chart.rs
// Summary: Chart (one set of axes) and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::color::ColorCycle;
use crate::geometry::RectI32;
use crate::grid::linspace;
use crate::scale::LinearScale;
use crate::series::{Series, SeriesKind};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Axis labels and tick values; disable for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// One plotting area: its layers, axis ranges, and the color cycle new
/// layers draw their default color from.
#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub cycle: ColorCycle,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self::with_cycle(ColorCycle::default())
    }

    pub fn with_cycle(cycle: ColorCycle) -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            cycle,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        debug!(kind = series.kind_name(), points = series.len(), "add series");
        self.series.push(series);
    }

    /// Next default color for a new layer.
    pub fn next_color(&mut self) -> skia::Color {
        self.cycle.next_color()
    }

    /// Fit both axes to the data of every layer, padded by `margin` of each span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Layers in paint order: ascending z-order, insertion order on ties.
    pub fn paint_order(&self) -> Vec<&Series> {
        let mut layers: Vec<&Series> = self.series.iter().collect();
        layers.sort_by(|a, b| a.style.z_order.total_cmp(&b.style.z_order));
        layers
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let rect = RectI32::inset(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::horizontal(&self.x_axis, &rect);
        let sy = LinearScale::vertical(&self.y_axis, &rect);

        draw_grid(canvas, &rect, &opts.theme);

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32),
            skia::ClipOp::Intersect,
            true,
        );
        for s in self.paint_order() {
            match &s.kind {
                SeriesKind::Scatter { radius } => draw_scatter(canvas, &sx, &sy, s, *radius),
                SeriesKind::Line { width } => draw_line(canvas, &sx, &sy, s, *width),
                SeriesKind::Band { lower, edge_width } => draw_band(canvas, &sx, &sy, s, lower, *edge_width),
            }
        }
        canvas.restore();

        draw_axes(canvas, &rect, &self.x_axis, &self.y_axis, &opts.theme, opts.draw_labels);
        Ok(surface)
    }
}

impl Series {
    fn kind_name(&self) -> &'static str {
        match self.kind {
            SeriesKind::Scatter { .. } => "scatter",
            SeriesKind::Line { .. } => "line",
            SeriesKind::Band { .. } => "band",
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(style: &crate::SeriesStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(style.color);
    paint.set_alpha_f(style.opacity * style.color.a() as f32 / 255.0);
    paint
}

fn draw_grid(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (rect.left as f64, rect.top as f64, rect.right as f64, rect.bottom as f64);
    // verticals
    for x in linspace(l, r, 6) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t, b, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    rect: &RectI32,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    draw_labels: bool,
) {
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if !draw_labels {
        return;
    }

    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(14.0);
    canvas.draw_str(&x.label, (r - 40.0, b + 36.0), &font, &paint_text);
    canvas.draw_str(&y.label, (l - 48.0, t + 14.0), &font, &paint_text);

    // Tick values at the grid lines.
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    font.set_size(11.0);
    for (v, px) in linspace(x.min, x.max, 6).into_iter().zip(linspace(l as f64, r as f64, 6)) {
        canvas.draw_str(format!("{:.2}", v), (px as f32 - 12.0, b + 16.0), &font, &tick_paint);
    }
    for (v, py) in linspace(y.min, y.max, 6).into_iter().zip(linspace(b as f64, t as f64, 6)) {
        canvas.draw_str(format!("{:.2}", v), (l - 44.0, py as f32 + 4.0), &font, &tick_paint);
    }
}

fn draw_scatter(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, radius: f32) {
    let paint = fill_paint(&series.style);
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() { continue; }
        canvas.draw_circle((sx.to_px(x), sy.to_px(y)), radius.max(0.5), &paint);
    }
}

fn draw_line(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, width: f32) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    let mut stroke = fill_paint(&series.style);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    canvas.draw_path(&path, &stroke);
}

fn draw_band(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    lower: &[f64],
    edge_width: f32,
) {
    let n = series.data_xy.len().min(lower.len());
    if n < 2 {
        return;
    }

    // Upper curve left to right, then lower curve back.
    let mut path = skia::Path::new();
    let (x0, y0) = series.data_xy[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in series.data_xy[1..n].iter() {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }
    for i in (0..n).rev() {
        path.line_to((sx.to_px(series.data_xy[i].0), sy.to_px(lower[i])));
    }
    path.close();

    let mut fill = fill_paint(&series.style);
    fill.set_style(skia::paint::Style::Fill);
    canvas.draw_path(&path, &fill);

    if edge_width > 0.0 {
        let mut edge = fill_paint(&series.style);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(edge_width);
        canvas.draw_path(&path, &edge);
    }
}
