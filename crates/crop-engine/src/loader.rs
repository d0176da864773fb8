// File: crates/crop-engine/src/loader.rs
// Summary: Load category datasets from JSON documents or long-format CSV.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::category::{Category, Dataset};
use crate::error::{EngineError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Bare(Vec<Category>),
    Labelled {
        #[serde(default)]
        months: Vec<String>,
        categories: Vec<Category>,
    },
}

/// Parse either a bare category array or `{ "months": [...], "categories": [...] }`.
/// Missing or empty `months` falls back to generated labels.
pub fn parse_json(text: &str) -> Result<Dataset> {
    match serde_json::from_str::<JsonInput>(text)? {
        JsonInput::Bare(categories) => Dataset::with_default_months(categories),
        JsonInput::Labelled { months, categories } if months.is_empty() => Dataset::with_default_months(categories),
        JsonInput::Labelled { months, categories } => Dataset::new(months, categories),
    }
}

pub fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    let dataset = parse_json(&text)?;
    info!(path = %path.display(), categories = dataset.categories().len(), "loaded JSON dataset");
    Ok(dataset)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    month: usize,
    #[serde(rename = "yield")]
    harvest: f64,
    cost: f64,
    unit_price: f64,
}

struct Pending {
    name: String,
    unit_price: f64,
    months: BTreeMap<usize, (f64, f64)>,
}

/// Read `name,month,yield,cost,unit_price` rows, one per category and month.
///
/// Categories keep their first-appearance order. Each category needs months
/// 1..=n without gaps or repeats and a single unit price.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let mut pending: Vec<Pending> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for rec in rdr.deserialize::<CsvRow>() {
        let row = rec?;
        if row.month == 0 {
            return Err(EngineError::InvalidCsv(format!("'{}': months are numbered from 1", row.name)));
        }
        let slot = *index.entry(row.name.clone()).or_insert_with(|| {
            pending.push(Pending { name: row.name.clone(), unit_price: row.unit_price, months: BTreeMap::new() });
            pending.len() - 1
        });
        let entry = &mut pending[slot];
        if entry.unit_price != row.unit_price {
            return Err(EngineError::InvalidCsv(format!(
                "'{}': unit price {} conflicts with {}",
                row.name, row.unit_price, entry.unit_price
            )));
        }
        if entry.months.insert(row.month, (row.harvest, row.cost)).is_some() {
            return Err(EngineError::InvalidCsv(format!("'{}': month {} listed twice", row.name, row.month)));
        }
    }

    if pending.is_empty() {
        warn!("CSV input holds no rows");
    }

    let mut categories = Vec::with_capacity(pending.len());
    for p in pending {
        let n = p.months.len();
        if p.months.keys().next_back() != Some(&n) {
            return Err(EngineError::InvalidCsv(format!("'{}': months must run 1..={} without gaps", p.name, n)));
        }
        let (monthly_yield, monthly_cost): (Vec<f64>, Vec<f64>) = p.months.into_values().unzip();
        categories.push(Category::new(p.name, monthly_yield, monthly_cost, p.unit_price)?);
    }
    Dataset::with_default_months(categories)
}

pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    let dataset = read_csv(file)?;
    info!(path = %path.display(), categories = dataset.categories().len(), "loaded CSV dataset");
    Ok(dataset)
}

/// Dispatch on extension: `.csv` → CSV, anything else → JSON.
pub fn load_path(path: &Path) -> Result<Dataset> {
    let is_csv = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv { load_csv(path) } else { load_json(path) }
}
