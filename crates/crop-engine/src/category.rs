// File: crates/crop-engine/src/category.rs
// Summary: Category (crop) record, annual figures, and the validated dataset handed to a view.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::months::default_month_labels;

/// One selectable category: twelve monthly yields and costs plus a unit price.
/// `name` is the join key for selection, colour lookup and data lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub monthly_yield: Vec<f64>,
    pub monthly_cost: Vec<f64>,
    pub unit_price: f64,
}

impl Category {
    /// Build a category, rejecting an empty name or yield/cost arrays of different length.
    pub fn new(name: impl Into<String>, monthly_yield: Vec<f64>, monthly_cost: Vec<f64>, unit_price: f64) -> Result<Self> {
        let category = Self { name: name.into(), monthly_yield, monthly_cost, unit_price };
        category.validate()?;
        Ok(category)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::EmptyName);
        }
        if self.monthly_yield.len() != self.monthly_cost.len() {
            return Err(EngineError::MismatchedLengths {
                name: self.name.clone(),
                yield_len: self.monthly_yield.len(),
                cost_len: self.monthly_cost.len(),
            });
        }
        Ok(())
    }

    /// Number of monthly values (equal for yield and cost once validated).
    pub fn months(&self) -> usize { self.monthly_yield.len() }

    pub fn annual_quantity(&self) -> f64 {
        self.monthly_yield.iter().sum()
    }

    pub fn annual_cost(&self) -> f64 {
        self.monthly_cost.iter().sum()
    }

    /// Summed yield times unit price; one multiplication after the sum.
    pub fn annual_revenue(&self) -> f64 {
        self.annual_quantity() * self.unit_price
    }

    pub fn annual_profit(&self) -> f64 {
        self.annual_revenue() - self.annual_cost()
    }

    /// Profit per unit produced; 0 when nothing was produced.
    pub fn margin_per_unit(&self) -> f64 {
        let q = self.annual_quantity();
        if q > 0.0 { self.annual_profit() / q } else { 0.0 }
    }
}

/// Validated input of one view: month labels plus an ordered category list.
///
/// Invariants: names are unique and non-empty, and every category carries
/// exactly `months.len()` yield and cost values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    months: Vec<String>,
    categories: Vec<Category>,
}

impl Dataset {
    pub fn new(months: Vec<String>, categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(categories.len());
        for c in &categories {
            c.validate()?;
            if c.months() != months.len() {
                return Err(EngineError::LabelCountMismatch { name: c.name.clone(), len: c.months(), labels: months.len() });
            }
            if !seen.insert(c.name.as_str()) {
                return Err(EngineError::DuplicateName(c.name.clone()));
            }
        }
        Ok(Self { months, categories })
    }

    /// Generated short month names sized to the first category (twelve when empty).
    pub fn with_default_months(categories: Vec<Category>) -> Result<Self> {
        let n = categories.first().map(Category::months).unwrap_or(12);
        Self::new(default_month_labels(n), categories)
    }

    /// Swap the month labels, re-checking the length invariant.
    pub fn relabel(self, months: Vec<String>) -> Result<Self> {
        Self::new(months, self.categories)
    }

    pub fn months(&self) -> &[String] { &self.months }

    pub fn categories(&self) -> &[Category] { &self.categories }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Category>) {
        (self.months, self.categories)
    }
}
