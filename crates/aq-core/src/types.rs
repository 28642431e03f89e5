//! Core data types for air-quality observations and derived views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel city selection meaning "no city filter".
pub const ALL_CITIES: &str = "All Cities";

/// Sentinel month selection meaning "no month filter".
pub const ALL_MONTHS: &str = "All Months";

/// Short month names in calendar order, as used by month selection.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Pollutant concentrations for one observation (ug/m3)
///
/// Fields are optional because upstream rows may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm2_5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub so2: Option<f64>,
}

/// One historical observation for a city
///
/// `datetime` is `None` when the upstream timestamp failed to parse; such
/// records are excluded from date-based derivations but otherwise kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub datetime: Option<DateTime<Utc>>,
    pub city_name: String,
    pub aqi: f64,
    pub components: Components,
}

/// A forecast observation from the predictions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub datetime: Option<DateTime<Utc>>,
    pub aqi: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

/// Mean AQI for one calendar month present in the data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAverage {
    pub month: String,
    pub aqi: f64,
}

/// Mean AQI for one hour of day; always 24 of these, `aqi == 0.0` when the
/// hour had no observations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPattern {
    pub hour: String,
    pub aqi: f64,
}

/// Provenance of a point in the merged chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Historical,
    Prediction,
}

/// One point of the merged historical + prediction chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub datetime: Option<DateTime<Utc>>,
    pub aqi: f64,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
}

impl ChartPoint {
    pub fn is_prediction(&self) -> bool {
        self.kind == SeriesKind::Prediction
    }
}

/// Projection of a record for the pollutant-correlation scatter view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub aqi: f64,
    pub display_date: String,
}

/// Average concentration of one pollutant, chart-ready
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantLevel {
    pub name: String,
    pub value: f64,
}

/// Health-risk descriptor with the upstream color resolved to a CSS class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRisk {
    pub level: String,
    pub css_class: String,
    pub description: String,
}

impl Default for HealthRisk {
    fn default() -> Self {
        Self {
            level: "N/A".to_string(),
            css_class: color_class(None).to_string(),
            description: "N/A".to_string(),
        }
    }
}

/// Map an upstream risk color to its display class.
///
/// Unknown or absent colors fall back to the neutral class.
pub fn color_class(color: Option<&str>) -> &'static str {
    match color {
        Some("green") => "bg-green-500",
        Some("yellow") => "bg-yellow-500",
        Some("orange") => "bg-orange-500",
        Some("red") => "bg-red-500",
        Some("purple") => "bg-purple-500",
        _ => "bg-blue-500",
    }
}

/// Summary metrics for the selected city
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityMetrics {
    #[serde(default)]
    pub average_aqi: f64,
    #[serde(default)]
    pub primary_pollutant: String,
    #[serde(default)]
    pub trend: String,
}

/// One city marker for the AQI heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub lat: f64,
    pub lon: f64,
    pub avg_aqi: f64,
    pub city_name: String,
    pub data_points: u64,
}

/// The dashboard view a consumer is currently showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Prediction,
    Components,
    Monthly,
    Patterns,
    Health,
    Heatmap,
    Correlations,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Prediction => "prediction",
            ActiveView::Components => "components",
            ActiveView::Monthly => "monthly",
            ActiveView::Patterns => "patterns",
            ActiveView::Health => "health",
            ActiveView::Heatmap => "heatmap",
            ActiveView::Correlations => "correlations",
        }
    }
}

impl std::str::FromStr for ActiveView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prediction" => Ok(ActiveView::Prediction),
            "components" => Ok(ActiveView::Components),
            "monthly" => Ok(ActiveView::Monthly),
            "patterns" => Ok(ActiveView::Patterns),
            "health" => Ok(ActiveView::Health),
            "heatmap" => Ok(ActiveView::Heatmap),
            "correlations" => Ok(ActiveView::Correlations),
            other => Err(anyhow::anyhow!("unknown view: {other}")),
        }
    }
}

/// User-controlled selection driving every derived view
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub city: String,
    pub month: String,
    pub view: ActiveView,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            city: ALL_CITIES.to_string(),
            month: ALL_MONTHS.to_string(),
            view: ActiveView::default(),
        }
    }
}

impl Selection {
    /// Value of the `city` query parameter for the API.
    pub fn city_param(&self) -> &str {
        if self.city == ALL_CITIES {
            "all"
        } else {
            &self.city
        }
    }
}

/// AQI severity band (index thresholds 1/2/3/4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
}

impl AqiBand {
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 1.0 {
            AqiBand::Good
        } else if aqi <= 2.0 {
            AqiBand::Moderate
        } else if aqi <= 3.0 {
            AqiBand::UnhealthySensitive
        } else if aqi <= 4.0 {
            AqiBand::Unhealthy
        } else {
            AqiBand::VeryUnhealthy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Moderate => "Moderate",
            AqiBand::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiBand::Unhealthy => "Unhealthy",
            AqiBand::VeryUnhealthy => "Very Unhealthy",
        }
    }
}
