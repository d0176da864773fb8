// File: crates/crop-engine/src/lib.rs
// Summary: Crop engine entry point; selection state, series/aggregate derivation and chart sync.

pub mod error;
pub mod color;
pub mod crops;
pub mod category;
pub mod registry;
pub mod selection;
pub mod derive;
pub mod sync;
pub mod view;
pub mod payload;
pub mod analytics;
pub mod months;
pub mod loader;
pub mod simulate;
pub mod config;
#[cfg(feature = "render")]
pub mod render;

pub use error::{EngineError, Result};
pub use color::Rgba;
pub use crops::KnownCrop;
pub use category::{Category, Dataset};
pub use registry::{CategoryRegistry, FALLBACK_COLOR};
pub use selection::SelectionStore;
pub use derive::{derive_aggregates, AggregateRow, SeriesDeriver, SeriesDescriptor};
pub use sync::{ChartSurface, ChartSync, MemorySurface};
pub use view::CropsView;
pub use payload::{AggregatePayload, CostGainPayload, DashboardPayload, LineChartPayload, MonthReport, ThresholdBarPayload};
pub use analytics::{MonthlyTotals, ProductionSnapshot, WaterUsage};
pub use simulate::{EnvironmentSample, Simulator};
pub use config::{DashboardConfig, RenderSettings};
