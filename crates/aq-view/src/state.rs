//! The dashboard state container and its action-driven updates

use aq_api::Snapshot;
use aq_core::{
    filter_by_month_and_city, hourly_patterns, merge_for_chart, monthly_averages,
    project_for_correlation, unique_days_analyzed, ActiveView, ChartPoint, CityMetrics,
    CorrelationPoint, HealthRisk, HeatmapPoint, HourlyPattern, MonthlyAverage, PollutantLevel,
    Prediction, Record, Selection, ALL_CITIES,
};
use tracing::debug;

/// Collections derived from (records, predictions, selection).
///
/// Recomputed as a whole so consumers never observe a mix of old and new
/// views; nothing here outlives its inputs.
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    pub filtered: Vec<Record>,
    pub monthly_averages: Vec<MonthlyAverage>,
    pub hourly_patterns: Vec<HourlyPattern>,
    pub chart_series: Vec<ChartPoint>,
    pub correlation: Vec<CorrelationPoint>,
    pub unique_days: usize,
}

/// All user-visible dashboard state
#[derive(Debug, Default)]
pub struct DashboardState {
    pub cities: Vec<String>,
    pub selection: Selection,
    pub loading: bool,
    pub error: Option<String>,

    pub records: Vec<Record>,
    pub predictions: Vec<Prediction>,
    pub pollutants: Vec<PollutantLevel>,
    pub health_risk: HealthRisk,
    pub metrics: CityMetrics,
    pub heatmap: Vec<HeatmapPoint>,

    pub derived: DerivedViews,

    generation: u64,
}

/// The only ways state may change
#[derive(Debug)]
pub enum Action {
    SelectCity(String),
    SelectMonth(String),
    SelectView(ActiveView),
    CitiesLoaded(Vec<String>),
    DataLoaded {
        generation: u64,
        snapshot: Snapshot,
    },
    DataFailed {
        generation: u64,
        message: String,
    },
}

/// Side effect requested by an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a fresh snapshot for `city` under refresh `generation`.
    Refresh { generation: u64, city: String },
}

impl DashboardState {
    /// Current refresh generation; results fetched under an older generation
    /// are ignored when applied.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one action, returning the side effect to run, if any.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::SelectCity(city) => {
                self.selection.city = city;
                self.generation += 1;
                self.loading = true;
                self.error = None;
                Some(Effect::Refresh {
                    generation: self.generation,
                    city: self.selection.city_param().to_string(),
                })
            }
            Action::SelectMonth(month) => {
                // Month changes never touch the network
                self.selection.month = month;
                self.rederive_filtered();
                None
            }
            Action::SelectView(view) => {
                self.selection.view = view;
                None
            }
            Action::CitiesLoaded(cities) => {
                let mut all = Vec::with_capacity(cities.len() + 1);
                all.push(ALL_CITIES.to_string());
                all.extend(cities);
                self.cities = all;
                None
            }
            Action::DataLoaded {
                generation,
                snapshot,
            } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "dropping stale snapshot");
                    return None;
                }
                self.records = snapshot.records;
                self.predictions = snapshot.predictions;
                self.pollutants = snapshot.pollutants;
                self.health_risk = snapshot.health_risk;
                self.metrics = snapshot.metrics;
                self.heatmap = snapshot.heatmap;
                self.rederive_all();
                self.loading = false;
                self.error = None;
                None
            }
            Action::DataFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "dropping stale failure");
                    return None;
                }
                // Previous data stays visible behind the error banner
                self.loading = false;
                self.error = Some(message);
                None
            }
        }
    }

    /// Recompute every derived view in one batch.
    fn rederive_all(&mut self) {
        // Monthly and hourly views read the full fetched set; the month
        // selection only narrows the chart, correlation, and day count.
        self.derived.monthly_averages = monthly_averages(&self.records);
        self.derived.hourly_patterns = hourly_patterns(&self.records);
        self.rederive_filtered();
    }

    fn rederive_filtered(&mut self) {
        self.derived.filtered =
            filter_by_month_and_city(&self.records, &self.selection.month, &self.selection.city);
        self.derived.chart_series = merge_for_chart(&self.derived.filtered, &self.predictions);
        self.derived.correlation = project_for_correlation(&self.derived.filtered);
        self.derived.unique_days = unique_days_analyzed(&self.derived.filtered);
    }
}
