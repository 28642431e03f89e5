//! Async controller driving refresh cycles through the API seam

use crate::state::{Action, DashboardState, Effect};
use aq_api::{fetch_snapshot, AirQualityApi};
use aq_core::ActiveView;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the dashboard state and the API handle.
///
/// Every mutation goes through [`DashboardState::apply`]; the controller's
/// job is to run the effects those actions request and feed the results back
/// in as actions.
pub struct ViewController {
    api: Arc<dyn AirQualityApi>,
    pub state: DashboardState,
}

impl ViewController {
    pub fn new(api: Arc<dyn AirQualityApi>) -> Self {
        Self {
            api,
            state: DashboardState::default(),
        }
    }

    /// Populate the city list. A failure surfaces as the usual error banner
    /// and leaves the state interactive.
    pub async fn load_cities(&mut self) {
        match self.api.cities().await {
            Ok(cities) => {
                self.state.apply(Action::CitiesLoaded(cities));
            }
            Err(err) => {
                error!(%err, "city list fetch failed");
                let generation = self.state.generation();
                self.state.apply(Action::DataFailed {
                    generation,
                    message: err.to_string(),
                });
            }
        }
    }

    /// Select a city and run the full refresh cycle it requests.
    pub async fn select_city(&mut self, city: &str) {
        let effect = self.state.apply(Action::SelectCity(city.to_string()));
        if let Some(Effect::Refresh { generation, city }) = effect {
            self.refresh(generation, &city).await;
        }
    }

    /// Re-fetch for the currently selected city.
    pub async fn reload(&mut self) {
        let city = self.state.selection.city.clone();
        self.select_city(&city).await;
    }

    /// Select a month; derived views recompute locally, no network involved.
    pub fn select_month(&mut self, month: &str) {
        self.state.apply(Action::SelectMonth(month.to_string()));
    }

    pub fn select_view(&mut self, view: ActiveView) {
        self.state.apply(Action::SelectView(view));
    }

    async fn refresh(&mut self, generation: u64, city: &str) {
        info!(city, generation, "refreshing snapshot");
        let action = match fetch_snapshot(self.api.as_ref(), city).await {
            Ok(snapshot) => Action::DataLoaded {
                generation,
                snapshot,
            },
            Err(err) => {
                error!(%err, city, "refresh failed");
                Action::DataFailed {
                    generation,
                    message: err.to_string(),
                }
            }
        };
        self.state.apply(action);
    }
}
