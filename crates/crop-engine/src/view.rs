// File: crates/crop-engine/src/view.rs
// Summary: Owned state of one crops-comparison view and its toggle → derive → apply loop.

use tracing::{debug, info};

use crate::analytics::{monthly_snapshot, monthly_totals, threshold_payload, water_consumption, WaterUsage};
use crate::category::{Category, Dataset};
use crate::derive::{derive_aggregates, SeriesDeriver, SeriesDescriptor};
use crate::error::Result;
use crate::payload::{AggregatePayload, DashboardPayload, LineChartPayload, MonthReport};
use crate::registry::CategoryRegistry;
use crate::selection::SelectionStore;
use crate::simulate::EnvironmentSample;
use crate::sync::{ChartSurface, ChartSync};

/// One crops-comparison view.
///
/// The selection is the single source of truth; the chart behind the sync is
/// rebuilt from it after every toggle. Aggregates are computed once, over all
/// categories, when the view is built.
pub struct CropsView<S: ChartSurface> {
    months: Vec<String>,
    categories: Vec<Category>,
    selection: SelectionStore,
    deriver: SeriesDeriver,
    sync: ChartSync<S>,
    aggregates: AggregatePayload,
}

impl<S: ChartSurface> CropsView<S> {
    /// Build the view with every category active and push the initial series.
    pub fn new(dataset: Dataset, registry: CategoryRegistry, surface: S) -> Self {
        let (months, categories) = dataset.into_parts();
        let selection = SelectionStore::new(&categories);
        let aggregates = AggregatePayload::from(derive_aggregates(&categories).as_slice());
        info!(categories = categories.len(), months = months.len(), "crops view ready");

        let mut view = Self {
            months,
            categories,
            selection,
            deriver: SeriesDeriver::new(registry),
            sync: ChartSync::new(surface),
            aggregates,
        };
        view.refresh();
        view
    }

    /// Flip `name` and redraw; returns whether it is active afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        let now_active = self.selection.toggle(name);
        if !self.categories.iter().any(|c| c.name == name) {
            debug!(name, "toggled a name with no matching category");
        }
        self.refresh();
        now_active
    }

    fn refresh(&mut self) {
        let series = self.current_series();
        self.sync.apply(series);
    }

    /// Series for the current selection.
    pub fn current_series(&self) -> Vec<SeriesDescriptor> {
        self.deriver.derive(&self.categories, self.selection.active_names())
    }

    pub fn line_payload(&self) -> LineChartPayload {
        LineChartPayload { labels: self.months.clone(), series: self.current_series() }
    }

    /// Annual cost / revenue per category, fixed at construction.
    pub fn aggregate_payload(&self) -> &AggregatePayload { &self.aggregates }

    /// Every chart payload of the dashboard for the current selection.
    pub fn dashboard(&self, usage: &WaterUsage) -> DashboardPayload {
        let totals = monthly_totals(&self.categories);
        DashboardPayload {
            crops: self.line_payload(),
            aggregates: self.aggregates.clone(),
            harvest: threshold_payload(&self.months, totals.harvest.clone()),
            water: threshold_payload(&self.months, water_consumption(&self.categories, usage)),
            costs: totals.cost_gain_payload(&self.months),
        }
    }

    /// Production snapshot for `month` (1-based) paired with its weather.
    pub fn month_report(&self, usage: &WaterUsage, month: usize, environment: EnvironmentSample) -> Result<MonthReport> {
        let production = monthly_snapshot(&self.categories, usage, month)?;
        Ok(MonthReport { label: self.months[month - 1].clone(), production, environment })
    }

    pub fn months(&self) -> &[String] { &self.months }

    pub fn categories(&self) -> &[Category] { &self.categories }

    pub fn selection(&self) -> &SelectionStore { &self.selection }

    pub fn surface(&self) -> &S { self.sync.surface() }

    pub fn surface_mut(&mut self) -> &mut S { self.sync.surface_mut() }
}
