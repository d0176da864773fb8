// File: crates/crop-engine/src/payload.rs
// Summary: Serializable chart payloads handed to the charting collaborator.

use serde::Serialize;

use crate::analytics::ProductionSnapshot;
use crate::derive::{AggregateRow, SeriesDescriptor};
use crate::simulate::EnvironmentSample;

/// Interactive line chart: `{ labels, series: [{label, values, color}] }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineChartPayload {
    pub labels: Vec<String>,
    pub series: Vec<SeriesDescriptor>,
}

/// Annual bar chart: category labels with parallel cost / revenue arrays.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatePayload {
    pub labels: Vec<String>,
    pub annual_cost: Vec<f64>,
    pub annual_revenue: Vec<f64>,
}

impl From<&[AggregateRow]> for AggregatePayload {
    fn from(rows: &[AggregateRow]) -> Self {
        Self {
            labels: rows.iter().map(|r| r.label.clone()).collect(),
            annual_cost: rows.iter().map(|r| r.annual_cost).collect(),
            annual_revenue: rows.iter().map(|r| r.annual_revenue).collect(),
        }
    }
}

/// Monthly bars with a flat reference line at `threshold` (the mean).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThresholdBarPayload {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub threshold: f64,
}

/// Monthly costs next to monthly gains (profit + cost).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostGainPayload {
    pub labels: Vec<String>,
    pub costs: Vec<f64>,
    pub gains: Vec<f64>,
}

/// Everything a dashboard page set needs, in one document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardPayload {
    pub crops: LineChartPayload,
    pub aggregates: AggregatePayload,
    pub harvest: ThresholdBarPayload,
    pub water: ThresholdBarPayload,
    pub costs: CostGainPayload,
}

/// One month of the analysis pages: production figures next to that month's weather.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthReport {
    pub label: String,
    pub production: ProductionSnapshot,
    pub environment: EnvironmentSample,
}
