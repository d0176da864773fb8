// File: crates/crop-engine/src/analytics.rs
// Summary: Selection-independent monthly analytics: totals, water use, means and production snapshots.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;
use crate::crops::KnownCrop;
use crate::error::{EngineError, Result};
use crate::payload::{CostGainPayload, ThresholdBarPayload};

/// Per-month sums over all categories.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub harvest: Vec<f64>,
    pub cost: Vec<f64>,
    /// Revenue minus cost: `yield * unit_price - cost`, summed per month.
    pub profit: Vec<f64>,
}

impl MonthlyTotals {
    /// Gross takings per month (profit + cost).
    pub fn gains(&self) -> Vec<f64> {
        self.profit.iter().zip(&self.cost).map(|(p, c)| p + c).collect()
    }

    pub fn cost_gain_payload(&self, labels: &[String]) -> CostGainPayload {
        CostGainPayload { labels: labels.to_vec(), costs: self.cost.clone(), gains: self.gains() }
    }
}

fn month_count(categories: &[Category]) -> usize {
    categories.iter().map(Category::months).max().unwrap_or(0)
}

pub fn monthly_totals(categories: &[Category]) -> MonthlyTotals {
    let n = month_count(categories);
    let mut totals = MonthlyTotals { harvest: vec![0.0; n], cost: vec![0.0; n], profit: vec![0.0; n] };
    for c in categories {
        for (m, (&y, &cost)) in c.monthly_yield.iter().zip(&c.monthly_cost).enumerate() {
            totals.harvest[m] += y;
            totals.cost[m] += cost;
            totals.profit[m] += y * c.unit_price - cost;
        }
    }
    totals
}

/// Water needed per unit of yield, by category name.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterUsage {
    per_unit: BTreeMap<String, f64>,
}

impl Default for WaterUsage {
    /// The built-in crop coefficients.
    fn default() -> Self {
        let per_unit = KnownCrop::ALL.iter().map(|c| (c.name().to_string(), c.water_per_unit())).collect();
        Self { per_unit }
    }
}

impl WaterUsage {
    /// No coefficients at all.
    pub fn empty() -> Self {
        Self { per_unit: BTreeMap::new() }
    }

    pub fn with_coefficient(mut self, name: impl Into<String>, per_unit: f64) -> Self {
        self.per_unit.insert(name.into(), per_unit);
        self
    }

    /// Coefficient for `name`; unknown categories consume nothing.
    pub fn coefficient(&self, name: &str) -> f64 {
        self.per_unit.get(name).copied().unwrap_or(0.0)
    }
}

/// Per-month water consumption over all categories.
pub fn water_consumption(categories: &[Category], usage: &WaterUsage) -> Vec<f64> {
    let mut total = vec![0.0; month_count(categories)];
    for c in categories {
        let coeff = usage.coefficient(&c.name);
        for (m, &y) in c.monthly_yield.iter().enumerate() {
            total[m] += y * coeff;
        }
    }
    total
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn threshold_payload(labels: &[String], values: Vec<f64>) -> ThresholdBarPayload {
    let threshold = mean(&values);
    ThresholdBarPayload { labels: labels.to_vec(), values, threshold }
}

/// Production figures for one month (`month` 1-based) or, with `month == 0`, a whole year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ProductionSnapshot {
    pub month: usize,
    pub harvest: f64,
    pub water: f64,
    pub cost: f64,
    pub profit: f64,
}

pub fn monthly_snapshot(categories: &[Category], usage: &WaterUsage, month: usize) -> Result<ProductionSnapshot> {
    let months = month_count(categories);
    if month == 0 || month > months {
        return Err(EngineError::MonthOutOfRange { month, months });
    }
    let idx = month - 1;
    let mut snap = ProductionSnapshot { month, ..Default::default() };
    for c in categories {
        // categories shorter than the longest one have no value for this month
        let (Some(&y), Some(&cost)) = (c.monthly_yield.get(idx), c.monthly_cost.get(idx)) else {
            return Err(EngineError::LabelCountMismatch { name: c.name.clone(), len: c.months(), labels: months });
        };
        snap.harvest += y;
        snap.cost += cost;
        snap.profit += y * c.unit_price - cost;
        snap.water += y * usage.coefficient(&c.name);
    }
    Ok(snap)
}

/// Sum of every monthly snapshot, reported as month 0.
pub fn annual_snapshot(categories: &[Category], usage: &WaterUsage) -> Result<ProductionSnapshot> {
    let mut year = ProductionSnapshot::default();
    for month in 1..=month_count(categories) {
        let m = monthly_snapshot(categories, usage, month)?;
        year.harvest += m.harvest;
        year.cost += m.cost;
        year.profit += m.profit;
        year.water += m.water;
    }
    Ok(year)
}
