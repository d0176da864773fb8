// File: crates/crop-engine/src/simulate.rs
// Summary: Seeded generator for demo datasets (crop yields/costs and monthly weather).

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::category::{Category, Dataset};
use crate::crops::KnownCrop;
use crate::error::{EngineError, Result};
use crate::months::default_month_labels;

/// Weather for one month.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnvironmentSample {
    /// °C
    pub temperature: f64,
    /// relative humidity, %
    pub humidity: f64,
    /// mm
    pub rainfall: f64,
    /// km/h
    pub wind_speed: f64,
    /// lux
    pub light: f64,
}

/// Deterministic for a given seed and call order.
///
/// Weather is drawn once per month and kept: asking for a month again returns
/// the same sample.
pub struct Simulator {
    rng: ChaCha8Rng,
    weather: BTreeMap<usize, EnvironmentSample>,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), weather: BTreeMap::new() }
    }

    /// One category per catalogue crop: yield follows the seasonal profile
    /// scaled by a random base, cost is a fixed 5 plus 50-100% of the yield.
    pub fn crops(&mut self) -> Vec<Category> {
        KnownCrop::ALL
            .iter()
            .map(|&crop| {
                let profile = crop.seasonal_profile();
                let mut monthly_yield = Vec::with_capacity(12);
                let mut monthly_cost = Vec::with_capacity(12);
                for p in profile {
                    let base = 20.0 + self.rng.gen::<f64>() * 80.0;
                    let harvest = base * p;
                    monthly_yield.push(harvest);
                    monthly_cost.push(5.0 + harvest * (0.5 + self.rng.gen::<f64>() * 0.5));
                }
                Category {
                    name: crop.name().to_string(),
                    monthly_yield,
                    monthly_cost,
                    unit_price: crop.unit_price(),
                }
            })
            .collect()
    }

    pub fn dataset(&mut self) -> Result<Dataset> {
        let categories = self.crops();
        info!(categories = categories.len(), "simulated crop dataset");
        Dataset::new(default_month_labels(12), categories)
    }

    /// Weather for `month` (1-based); rainfall, wind and light are folded to be non-negative.
    pub fn environment(&mut self, month: usize) -> Result<EnvironmentSample> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::MonthOutOfRange { month, months: 12 });
        }
        Ok(self.weather_for(month))
    }

    /// Weather for all twelve months, January first.
    pub fn environment_year(&mut self) -> Vec<EnvironmentSample> {
        (1..=12).map(|m| self.weather_for(m)).collect()
    }

    fn weather_for(&mut self, month: usize) -> EnvironmentSample {
        if let Some(sample) = self.weather.get(&month) {
            return *sample;
        }
        let sample = EnvironmentSample {
            temperature: self.gauss(18.0, 7.0),
            humidity: self.gauss(55.0, 15.0),
            rainfall: self.gauss(80.0, 40.0).abs(),
            wind_speed: self.gauss(3.0, 1.0).abs(),
            light: self.gauss(20_000.0, 8_000.0).abs(),
        };
        self.weather.insert(month, sample);
        sample
    }

    // Box-Muller; 1 - u keeps the log argument in (0, 1].
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = 1.0 - self.rng.gen::<f64>();
        let u2 = self.rng.gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + z * std_dev
    }
}
