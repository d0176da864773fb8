// File: crates/crop-engine/src/error.rs
// Summary: Engine error type; every variant is an upstream precondition violation or an I/O failure.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("category '{name}': monthly yield has {yield_len} values but monthly cost has {cost_len}")]
    MismatchedLengths { name: String, yield_len: usize, cost_len: usize },

    #[error("category '{name}' has {len} monthly values but {labels} month labels are in use")]
    LabelCountMismatch { name: String, len: usize, labels: usize },

    #[error("Duplicate category name: {0}")]
    DuplicateName(String),

    #[error("Category name must not be empty")]
    EmptyName,

    #[error("Invalid colour literal: {0}")]
    InvalidColor(String),

    #[error("Month {month} out of range 1..={months}")]
    MonthOutOfRange { month: usize, months: usize },

    #[error("Invalid CSV input: {0}")]
    InvalidCsv(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
