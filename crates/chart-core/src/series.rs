// File: crates/chart-core/src/series.rs
// Summary: Series model for labelled line and bar (histogram) data.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Histogram,   // (x, y) bars rising from 0; several histograms share each slot
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub label: Option<String>,        // legend entry
    pub color: Option<skia::Color>,   // falls back to the theme palette
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, data_xy: Vec::new(), label: None, color: None }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    /// One point per value, placed at x = 0, 1, 2, ... (categorical slots).
    pub fn from_values(series_type: SeriesType, values: &[f64]) -> Self {
        let data = values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        Self::with_data(series_type, data)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Min/max of the Y values (zero included for histograms), `None` when empty.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let mut it = self.data_xy.iter().map(|&(_, y)| y);
        let first = it.next()?;
        let (mut lo, mut hi) = it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        if self.series_type == SeriesType::Histogram {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        Some((lo, hi))
    }
}
