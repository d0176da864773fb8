// File: crates/crop-engine/src/render.rs
// Summary: chart-core (Skia) backend: a `ChartSurface` for the crops line chart and
// builders for the static dashboard charts.

use anyhow::Result;
use chart_core::{theme, Axis, Chart, Color, RasterTarget, RenderOptions, Series, SeriesType};
use tracing::debug;

use crate::color::Rgba;
use crate::config::RenderSettings;
use crate::derive::SeriesDescriptor;
use crate::payload::{AggregatePayload, CostGainPayload, ThresholdBarPayload};
use crate::sync::ChartSurface;

const COST_COLOR: Rgba = Rgba::opaque(255, 99, 132).with_alpha(204);
const REVENUE_COLOR: Rgba = Rgba::opaque(76, 175, 80).with_alpha(204);
const GAIN_COLOR: Rgba = Rgba::opaque(54, 162, 235).with_alpha(178);
const THRESHOLD_COLOR: Rgba = Rgba::opaque(255, 99, 132).with_alpha(230);

pub fn to_skia(c: Rgba) -> Color {
    Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn render_options(settings: &RenderSettings) -> RenderOptions {
    RenderOptions {
        width: settings.width,
        height: settings.height,
        theme: theme::find(&settings.theme),
        draw_labels: settings.draw_labels,
        ..RenderOptions::default()
    }
}

fn line_series(d: SeriesDescriptor) -> Series {
    Series::from_values(SeriesType::Line, &d.values)
        .with_label(d.label)
        .with_color(to_skia(d.color))
}

/// Empty monthly harvest chart, one slot per month.
fn crops_chart(months: &[String]) -> Chart {
    let mut chart = Chart::new().with_title("Monthly harvest by crop");
    chart.x_axis = Axis::categorical("Month", months.to_vec());
    chart.y_axis = Axis::new("Harvest (kg)", 0.0, 1.0).from_zero();
    chart
}

/// Live crops line chart backed by an eagerly allocated raster target.
pub struct SkiaChartSurface {
    chart: Chart,
    opts: RenderOptions,
    target: RasterTarget,
    dirty: bool,
    frames: u64,
}

impl SkiaChartSurface {
    /// Fails when the raster target cannot be allocated.
    pub fn new(months: &[String], opts: RenderOptions) -> Result<Self> {
        let target = RasterTarget::for_options(&opts)?;
        Ok(Self { chart: crops_chart(months), opts, target, dirty: true, frames: 0 })
    }

    pub fn chart(&self) -> &Chart { &self.chart }

    pub fn is_dirty(&self) -> bool { self.dirty }

    /// Number of completed redraws.
    pub fn frames(&self) -> u64 { self.frames }

    /// Reallocate the target at a new size and schedule a redraw.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        self.target = RasterTarget::new(width, height)?;
        self.opts.width = width;
        self.opts.height = height;
        self.dirty = true;
        Ok(())
    }

    /// Draw if a redraw is pending; returns whether anything was drawn.
    pub fn render_pending(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.chart.draw(&mut self.target, &self.opts);
        self.dirty = false;
        self.frames += 1;
        debug!(frame = self.frames, series = self.chart.series.len(), "chart redrawn");
        true
    }

    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.render_pending();
        self.target.read_rgba8()
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        self.render_pending();
        self.target.encode_png()
    }
}

impl ChartSurface for SkiaChartSurface {
    fn replace_series(&mut self, series: Vec<SeriesDescriptor>) {
        self.chart.set_series(series.into_iter().map(line_series).collect());
        self.chart.autoscale_y(0.05);
    }

    fn request_redraw(&mut self) {
        self.dirty = true;
    }
}

/// Grouped bars of annual cost and revenue per crop.
pub fn aggregate_chart(payload: &AggregatePayload) -> Chart {
    let mut chart = Chart::new().with_title("Annual costs and revenue by crop");
    chart.x_axis = Axis::categorical("Crop", payload.labels.clone());
    chart.y_axis = Axis::new("Euro (€)", 0.0, 1.0).from_zero();
    chart.add_series(
        Series::from_values(SeriesType::Histogram, &payload.annual_cost)
            .with_label("Annual cost (€)")
            .with_color(to_skia(COST_COLOR)),
    );
    chart.add_series(
        Series::from_values(SeriesType::Histogram, &payload.annual_revenue)
            .with_label("Annual revenue (€)")
            .with_color(to_skia(REVENUE_COLOR)),
    );
    chart.autoscale_y(0.05);
    chart
}

/// Monthly bars plus a flat line at the payload threshold.
pub fn threshold_chart(title: &str, y_label: &str, payload: &ThresholdBarPayload, bar_color: Rgba) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::categorical("Month", payload.labels.clone());
    chart.y_axis = Axis::new(y_label, 0.0, 1.0).from_zero();
    chart.add_series(
        Series::from_values(SeriesType::Histogram, &payload.values)
            .with_label(y_label)
            .with_color(to_skia(bar_color)),
    );
    let flat = vec![payload.threshold; payload.values.len()];
    chart.add_series(
        Series::from_values(SeriesType::Line, &flat)
            .with_label("Average")
            .with_color(to_skia(THRESHOLD_COLOR)),
    );
    chart.autoscale_y(0.05);
    chart
}

/// Monthly costs next to monthly gains.
pub fn cost_gain_chart(payload: &CostGainPayload) -> Chart {
    let mut chart = Chart::new().with_title("Monthly costs and gains");
    chart.x_axis = Axis::categorical("Month", payload.labels.clone());
    chart.y_axis = Axis::new("Euro (€)", 0.0, 1.0).from_zero();
    chart.add_series(
        Series::from_values(SeriesType::Histogram, &payload.costs)
            .with_label("Costs (€)")
            .with_color(to_skia(COST_COLOR)),
    );
    chart.add_series(
        Series::from_values(SeriesType::Histogram, &payload.gains)
            .with_label("Gains (€)")
            .with_color(to_skia(GAIN_COLOR)),
    );
    chart.autoscale_y(0.05);
    chart
}
