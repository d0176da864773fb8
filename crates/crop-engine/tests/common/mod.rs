// File: crates/crop-engine/tests/common/mod.rs
// Purpose: Shared fixtures for the crop-engine integration tests.
#![allow(dead_code)]

use crop_engine::{Category, Dataset};

/// Category with constant monthly yield and cost over twelve months.
pub fn flat(name: &str, harvest: f64, cost: f64, price: f64) -> Category {
    Category::new(name, vec![harvest; 12], vec![cost; 12], price).expect("valid category")
}

/// Category whose yields count up from `start`, so series are told apart by value.
pub fn ramp(name: &str, start: f64) -> Category {
    let monthly_yield = (0..12).map(|m| start + m as f64).collect();
    Category::new(name, monthly_yield, vec![1.0; 12], 1.0).expect("valid category")
}

pub fn dataset(categories: Vec<Category>) -> Dataset {
    Dataset::with_default_months(categories).expect("valid dataset")
}
