//! CLI configuration from environment variables

use anyhow::Result;
use aq_core::{ActiveView, ALL_CITIES, ALL_MONTHS};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the metrics API
    pub api_url: String,

    /// City selection (default: all cities)
    pub city: String,

    /// Month selection (default: all months)
    pub month: String,

    /// Which dashboard view to render
    pub view: ActiveView,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url =
            env::var("AQ_API_URL").unwrap_or_else(|_| "http://localhost:5500/api".to_string());

        let city = env::var("AQ_CITY").unwrap_or_else(|_| ALL_CITIES.to_string());
        let month = env::var("AQ_MONTH").unwrap_or_else(|_| ALL_MONTHS.to_string());

        let view = env::var("AQ_VIEW")
            .unwrap_or_else(|_| "prediction".to_string())
            .parse::<ActiveView>()
            .map_err(|err| err.context("Invalid AQ_VIEW"))?;

        Ok(Self {
            api_url,
            city,
            month,
            view,
        })
    }
}
