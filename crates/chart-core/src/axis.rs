// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and optional categorical ticks.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Category names drawn at integer positions 0, 1, 2, ... (empty = numeric ticks).
    pub ticks: Vec<String>,
    /// Autoscale keeps zero inside the range.
    pub begin_at_zero: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Vec::new(), begin_at_zero: false }
    }

    /// Categorical axis: one slot per tick, centred on integer positions.
    pub fn categorical(label: impl Into<String>, ticks: Vec<String>) -> Self {
        let n = ticks.len().max(1) as f64;
        Self { label: label.into(), min: -0.5, max: n - 0.5, ticks, begin_at_zero: false }
    }

    pub fn from_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }

    pub fn is_categorical(&self) -> bool { !self.ticks.is_empty() }

    pub fn default_x() -> Self {
        Self::new("Month", 0.0, 11.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0).from_zero()
    }
}
