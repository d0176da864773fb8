// File: crates/crop-engine/src/config.rs
// Summary: TOML dashboard configuration (colours, water coefficients, month labels, render settings).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analytics::WaterUsage;
use crate::category::Dataset;
use crate::color::Rgba;
use crate::error::Result;
use crate::registry::CategoryRegistry;

/// Every section is optional; an empty file equals `DashboardConfig::default()`.
///
/// ```toml
/// months = ["Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic"]
///
/// [colors]
/// "Mais" = "#FFAA00"
///
/// [water]
/// "Mais" = 1.8
///
/// [render]
/// theme = "dark"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Extra or overriding category colours.
    pub colors: BTreeMap<String, Rgba>,
    /// Extra or overriding water coefficients (litres per unit of yield).
    pub water: BTreeMap<String, f64>,
    /// Month labels replacing the generated ones.
    pub months: Option<Vec<String>>,
    pub render: RenderSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: i32,
    pub height: i32,
    /// Theme preset name; unknown names fall back to the dark preset.
    pub theme: String,
    pub draw_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { width: 1024, height: 640, theme: "light".to_string(), draw_labels: true }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), colors = config.colors.len(), water = config.water.len(), "loaded config");
        Ok(config)
    }

    pub fn registry(&self) -> CategoryRegistry {
        self.colors
            .iter()
            .fold(CategoryRegistry::new(), |reg, (name, color)| reg.with_color(name.clone(), *color))
    }

    pub fn water_usage(&self) -> WaterUsage {
        self.water
            .iter()
            .fold(WaterUsage::default(), |usage, (name, v)| usage.with_coefficient(name.clone(), *v))
    }

    /// Apply the configured month labels, if any.
    pub fn apply_months(&self, dataset: Dataset) -> Result<Dataset> {
        match &self.months {
            Some(months) => dataset.relabel(months.clone()),
            None => Ok(dataset),
        }
    }
}
