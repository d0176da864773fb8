// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG / RGBA) using Skia CPU raster surfaces.

use anyhow::{anyhow, bail, Result};
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::grid::{linspace, nice_ticks};
use crate::scale::LinearScale;
use crate::series::{Series, SeriesType};
use crate::text::{Anchor, Font, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LEGEND_ROW, LEGEND_SWATCH, WIDTH};
use crate::view::ViewState;
use crate::Axis;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Axis titles, tick labels, chart title and legend text.
    pub draw_labels: bool,
    pub draw_legend: bool,
    pub line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            draw_legend: true,
            line_width: 2.0,
        }
    }
}

/// CPU raster surface a chart draws into.
/// Allocated before any drawing so a missing surface is reported up front.
pub struct RasterTarget {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl RasterTarget {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            bail!("invalid surface size {width}x{height}");
        }
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        Ok(Self { surface, width, height })
    }

    pub fn for_options(opts: &RenderOptions) -> Result<Self> {
        Self::new(opts.width, opts.height)
    }

    pub fn size(&self) -> (i32, i32) { (self.width, self.height) }

    /// Encode the current surface contents as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Copy out unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("reading surface pixels failed");
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }
}

#[derive(Clone)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Replace the whole series list.
    pub fn set_series(&mut self, series: Vec<Series>) {
        self.series = series;
    }

    /// Fit both axes to the data, padding Y by `margin` (fraction of span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        let view = self.fitted_view(margin);
        view.apply_to_chart(self);
    }

    /// Fit only the Y axis; categorical X axes keep their slots.
    pub fn autoscale_y(&mut self, margin: f64) {
        let view = self.fitted_view(margin);
        view.apply_y(self);
    }

    fn fitted_view(&self, margin: f64) -> ViewState {
        let raw = ViewState::from_chart(self);
        if !self.y_axis.begin_at_zero {
            return raw.padded(margin);
        }
        let mut view = raw.with_zero().padded(margin);
        if raw.y_min >= 0.0 {
            view.y_min = 0.0;
        }
        view
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

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut target = RasterTarget::for_options(opts)?;
        self.draw(&mut target, opts);
        target.encode_png()
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut target = RasterTarget::for_options(opts)?;
        self.draw(&mut target, opts);
        target.read_rgba8()
    }

    /// Paint the full chart into `target`, replacing its previous contents.
    /// Geometry follows the target size; `opts.width/height` only size new targets.
    pub fn draw(&self, target: &mut RasterTarget, opts: &RenderOptions) {
        let (width, height) = target.size();
        let theme = &opts.theme;
        let canvas = target.surface.canvas();
        canvas.clear(theme.background);

        let plot = RectI32::inset(width, height, &opts.insets);
        let sx = LinearScale::new(self.x_axis.min, self.x_axis.max, plot.left as f32, plot.right as f32);
        let sy = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom as f32, plot.top as f32);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, 6);

        draw_grid(canvas, theme, &plot, &self.x_axis, &sx, &sy, &y_ticks);
        draw_axes(canvas, theme, &plot);

        let shaper = opts.draw_labels.then(TextShaper::new);
        if let Some(shaper) = &shaper {
            draw_labels(canvas, shaper, theme, &plot, self, &sx, &sy, &y_ticks);
        }

        // Bars first so lines stay visible on mixed charts
        let bar_count = self.series.iter().filter(|s| s.series_type == SeriesType::Histogram).count();
        let mut bar_slot = 0usize;
        for (i, s) in self.series.iter().enumerate() {
            if s.series_type == SeriesType::Histogram {
                let color = s.color.unwrap_or_else(|| theme.series_color(i));
                draw_histogram_series(canvas, &plot, &sx, &sy, s, color, bar_slot, bar_count);
                bar_slot += 1;
            }
        }
        for (i, s) in self.series.iter().enumerate() {
            if s.series_type == SeriesType::Line {
                let color = s.color.unwrap_or_else(|| theme.series_color(i));
                draw_line_series(canvas, &sx, &sy, s, color, opts.line_width);
            }
        }

        if opts.draw_legend {
            draw_legend(canvas, shaper.as_ref(), theme, &plot, width, &self.series);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn format_tick(v: f64) -> String {
    if v.abs() >= 100.0 || (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &RectI32,
    x_axis: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    y_ticks: &[f64],
) {
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals: slot centres on categorical axes, even spacing otherwise
    let xs: Vec<f32> = if x_axis.is_categorical() {
        (0..x_axis.ticks.len()).map(|i| sx.map(i as f64)).collect()
    } else {
        linspace(l as f64, r as f64, 10).into_iter().map(|x| x as f32).collect()
    };
    for x in xs {
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals
    for &v in y_ticks {
        let y = sy.map(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    plot: &RectI32,
    chart: &Chart,
    sx: &LinearScale,
    sy: &LinearScale,
    y_ticks: &[f64],
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let tick = Font::label(12.0, theme.tick);
    let axis_title = Font::label(13.0, theme.axis_label);

    if let Some(title) = &chart.title {
        shaper.draw(canvas, title, ((l + r) * 0.5, t - 18.0), Anchor::Middle, &Font::label(18.0, theme.title));
    }

    let value = Font::numeric(12.0, theme.tick);
    for &v in y_ticks {
        shaper.draw(canvas, &format_tick(v), (l - 8.0, sy.map(v) + 4.0), Anchor::End, &value);
    }
    for (i, name) in chart.x_axis.ticks.iter().enumerate() {
        shaper.draw(canvas, name, (sx.map(i as f64), b + 18.0), Anchor::Middle, &tick);
    }

    shaper.draw(canvas, &chart.x_axis.label, ((l + r) * 0.5, b + 38.0), Anchor::Middle, &axis_title);
    shaper.draw(canvas, &chart.y_axis.label, (8.0, t - 4.0), Anchor::Start, &axis_title);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    color: skia::Color,
    width: f32,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.map(x0), sy.map(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.map(x), sy.map(y)));
    }
    canvas.draw_path(&path, &stroke_paint(color, width));

    // point markers
    let dot = fill_paint(color);
    for &(x, y) in data {
        canvas.draw_circle((sx.map(x), sy.map(y)), width + 1.0, &dot);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_histogram_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    color: skia::Color,
    slot: usize,
    slots: usize,
) {
    if series.data_xy.is_empty() || slots == 0 {
        return;
    }
    let band = sx.unit_px() * 0.8;
    let bar_w = (band / slots as f32).max(1.0);
    let base_y = sy.map(0.0).clamp(plot.top as f32, plot.bottom as f32);
    let paint = fill_paint(color);

    for &(x, y) in &series.data_xy {
        let left = sx.map(x) - band * 0.5 + bar_w * slot as f32;
        let py = sy.map(y);
        let (top, bottom) = if py < base_y { (py, base_y) } else { (base_y, py) };
        let rect = skia::Rect::from_ltrb(left, top, left + bar_w * 0.92, bottom.max(top + 1.0));
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    theme: &Theme,
    plot: &RectI32,
    width: i32,
    series: &[Series],
) {
    let font = Font::label(12.0, theme.axis_label);
    let mut x = plot.left as f32;
    let mut y = plot.bottom as f32 + 52.0;
    for (i, s) in series.iter().enumerate() {
        let Some(label) = &s.label else { continue };
        let text_w = shaper.map(|sh| sh.measure_width(label, &font)).unwrap_or(48.0);
        let entry_w = LEGEND_SWATCH + 6.0 + text_w + 18.0;
        if x + entry_w > width as f32 && x > plot.left as f32 {
            x = plot.left as f32;
            y += LEGEND_ROW;
        }
        let color = s.color.unwrap_or_else(|| theme.series_color(i));
        let swatch = skia::Rect::from_xywh(x, y - LEGEND_SWATCH, LEGEND_SWATCH, LEGEND_SWATCH);
        canvas.draw_rect(swatch, &fill_paint(color));
        if let Some(sh) = shaper {
            sh.draw(canvas, label, (x + LEGEND_SWATCH + 6.0, y), Anchor::Start, &font);
        }
        x += entry_w;
    }
}
