// File: crates/chart-core/src/view.rs
// Visible data ranges and the autoscale helpers built on them.

use crate::series::SeriesType;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Tight extents over every series; unit box when the chart holds no data.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for &(x, _) in &s.data_xy {
                // bars occupy a whole slot around their x
                let pad = if s.series_type == SeriesType::Histogram { 0.5 } else { 0.0 };
                x_min = x_min.min(x - pad);
                x_max = x_max.max(x + pad);
            }
            if let Some((lo, hi)) = s.y_extent() {
                y_min = y_min.min(lo);
                y_max = y_max.max(hi);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Grow the Y range by `frac` of its span on both sides.
    pub fn padded(self, frac: f64) -> Self {
        let m = (self.y_max - self.y_min) * frac.max(0.0);
        Self { y_min: self.y_min - m, y_max: self.y_max + m, ..self }
    }

    /// Stretch the Y range so that it contains zero.
    pub fn with_zero(self) -> Self {
        Self { y_min: self.y_min.min(0.0), y_max: self.y_max.max(0.0), ..self }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        self.apply_y(chart);
    }

    pub fn apply_y(&self, chart: &mut Chart) {
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
