// File: crates/crop-engine/src/derive.rs
// Summary: Pure projections from the category list: line series for the active subset
// and per-category annual aggregates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::color::Rgba;
use crate::registry::CategoryRegistry;

/// Chart-ready line for one category: its monthly yield in its display colour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub label: String,
    pub values: Vec<f64>,
    pub color: Rgba,
}

/// Builds series descriptors for the active categories.
#[derive(Clone, Debug, Default)]
pub struct SeriesDeriver {
    registry: CategoryRegistry,
}

impl SeriesDeriver {
    pub fn new(registry: CategoryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CategoryRegistry { &self.registry }

    /// Categories whose name is in `active`, in input order.
    /// Active names with no matching category are ignored; an empty set yields no series.
    pub fn derive(&self, categories: &[Category], active: &BTreeSet<String>) -> Vec<SeriesDescriptor> {
        categories
            .iter()
            .filter(|c| active.contains(&c.name))
            .map(|c| SeriesDescriptor {
                label: c.name.clone(),
                values: c.monthly_yield.clone(),
                color: self.registry.color_for(&c.name),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRow {
    pub label: String,
    pub annual_cost: f64,
    pub annual_revenue: f64,
}

/// One row per category in input order, regardless of any selection.
pub fn derive_aggregates(categories: &[Category]) -> Vec<AggregateRow> {
    categories
        .iter()
        .map(|c| AggregateRow {
            label: c.name.clone(),
            annual_cost: c.annual_cost(),
            annual_revenue: c.annual_revenue(),
        })
        .collect()
}
