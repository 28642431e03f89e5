//! API client trait and reqwest-backed implementation

use crate::error::{ApiError, ApiResult};
use crate::wire::{pollutant_levels, DailyResponse, HealthRiskDto, PollutantMap, PredictionRow};
use aq_core::{CityMetrics, HealthRisk, HeatmapPoint, PollutantLevel, Prediction, Record};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Everything fetched for one city selection, applied atomically on success
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub records: Vec<Record>,
    pub predictions: Vec<Prediction>,
    pub pollutants: Vec<PollutantLevel>,
    pub health_risk: HealthRisk,
    pub metrics: CityMetrics,
    pub heatmap: Vec<HeatmapPoint>,
}

/// The read-only metrics API consumed by the dashboard.
///
/// The trait seam lets the view layer and its tests run against an in-memory
/// fake instead of a live server.
#[async_trait::async_trait]
pub trait AirQualityApi: Send + Sync {
    /// City names known to the API.
    async fn cities(&self) -> ApiResult<Vec<String>>;

    /// Pre-aggregated daily records for a city (`"all"` for every city).
    async fn historical_daily(&self, city: &str) -> ApiResult<Vec<Record>>;

    /// Forecast AQI values for the next `days` days.
    async fn predictions(&self, city: &str, days: u32) -> ApiResult<Vec<Prediction>>;

    /// Average concentration per pollutant code.
    async fn pollutants(&self, city: &str) -> ApiResult<Vec<PollutantLevel>>;

    /// Health-risk descriptor for the latest AQI.
    async fn health_risk(&self, city: &str) -> ApiResult<HealthRisk>;

    /// Summary metrics (average AQI, primary pollutant, trend).
    async fn metrics(&self, city: &str) -> ApiResult<CityMetrics>;

    /// Map markers; a non-success status degrades to an empty list.
    async fn heatmap(&self, city: &str) -> ApiResult<Vec<HeatmapPoint>>;
}

/// Issue the six data fetches for one city concurrently and assemble a
/// [`Snapshot`] once all settle.
///
/// Any single failure (other than a heatmap status error, which the client
/// already degrades) aborts the whole refresh; no partial snapshot is ever
/// returned.
pub async fn fetch_snapshot(api: &dyn AirQualityApi, city: &str) -> ApiResult<Snapshot> {
    let (records, predictions, pollutants, health_risk, metrics, heatmap) = tokio::try_join!(
        api.historical_daily(city),
        api.predictions(city, 7),
        api.pollutants(city),
        api.health_risk(city),
        api.metrics(city),
        api.heatmap(city),
    )?;

    debug!(
        records = records.len(),
        predictions = predictions.len(),
        heatmap = heatmap.len(),
        "snapshot assembled"
    );

    Ok(Snapshot {
        records,
        predictions,
        pollutants,
        health_risk,
        metrics,
        heatmap,
    })
}

/// Reqwest-backed client for the Flask metrics API
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    /// Build a client for the given API base URL, e.g.
    /// `http://localhost:5500/api`.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        // Url::join drops the last path segment without a trailing slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|source| ApiError::Transport {
                resource: "client setup",
                source,
            })?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Url> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &'static str, url: Url) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { resource, status });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { resource, source })
    }
}

#[async_trait::async_trait]
impl AirQualityApi for HttpApi {
    async fn cities(&self) -> ApiResult<Vec<String>> {
        let url = self.endpoint("cities", &[])?;
        self.get_json("cities", url).await
    }

    async fn historical_daily(&self, city: &str) -> ApiResult<Vec<Record>> {
        let url = self.endpoint("historical/daily", &[("city", city)])?;
        let response: DailyResponse = self.get_json("daily data", url).await?;
        Ok(response.data.into_iter().map(Record::from).collect())
    }

    async fn predictions(&self, city: &str, days: u32) -> ApiResult<Vec<Prediction>> {
        let days = days.to_string();
        let url = self.endpoint("predictions", &[("city", city), ("days", &days)])?;
        let rows: Vec<PredictionRow> = self.get_json("predictions", url).await?;
        Ok(rows.into_iter().map(Prediction::from).collect())
    }

    async fn pollutants(&self, city: &str) -> ApiResult<Vec<PollutantLevel>> {
        let url = self.endpoint("pollutants", &[("city", city)])?;
        let map: PollutantMap = self.get_json("pollutant data", url).await?;
        Ok(pollutant_levels(map))
    }

    async fn health_risk(&self, city: &str) -> ApiResult<HealthRisk> {
        let url = self.endpoint("health-risk", &[("city", city)])?;
        let dto: HealthRiskDto = self.get_json("health risk", url).await?;
        Ok(dto.into())
    }

    async fn metrics(&self, city: &str) -> ApiResult<CityMetrics> {
        let url = self.endpoint("metrics", &[("city", city)])?;
        self.get_json("metrics", url).await
    }

    async fn heatmap(&self, city: &str) -> ApiResult<Vec<HeatmapPoint>> {
        let url = self.endpoint("heatmap", &[("city", city)])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                resource: "heatmap",
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // Heatmap is best-effort; the rest of the refresh proceeds
            warn!(%status, "heatmap fetch failed, rendering without markers");
            return Ok(Vec::new());
        }

        response.json().await.map_err(|source| ApiError::Decode {
            resource: "heatmap",
            source,
        })
    }
}
