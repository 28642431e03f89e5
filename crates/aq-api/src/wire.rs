//! Wire DTOs for the metrics API and their domain conversions
//!
//! The API flattens nested keys into dotted field names (`main.aqi`,
//! `components.pm2_5`) and encodes NaN as `null`, so every numeric field
//! arrives as an `Option`. Conversion into `aq-core` types happens here and
//! nowhere else.

use aq_core::{
    color_class, parse_datetime, Components, HealthRisk, PollutantLevel, Prediction, Record,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Envelope of `/historical/daily`
#[derive(Debug, Deserialize)]
pub struct DailyResponse {
    pub data: Vec<DailyRow>,
}

/// One row of pre-aggregated daily data
#[derive(Debug, Deserialize)]
pub struct DailyRow {
    pub date: String,
    #[serde(rename = "main.aqi", default)]
    pub aqi: Option<f64>,
    #[serde(rename = "components.pm2_5", default)]
    pub pm2_5: Option<f64>,
    #[serde(rename = "components.pm10", default)]
    pub pm10: Option<f64>,
    #[serde(rename = "components.o3", default)]
    pub o3: Option<f64>,
    #[serde(rename = "components.no2", default)]
    pub no2: Option<f64>,
    #[serde(rename = "components.so2", default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub city_name: String,
}

impl From<DailyRow> for Record {
    fn from(row: DailyRow) -> Self {
        Record {
            datetime: parse_datetime(&row.date),
            city_name: row.city_name,
            aqi: row.aqi.unwrap_or(0.0),
            components: Components {
                pm2_5: row.pm2_5,
                pm10: row.pm10,
                o3: row.o3,
                no2: row.no2,
                so2: row.so2,
            },
        }
    }
}

/// One row of `/predictions`
#[derive(Debug, Deserialize)]
pub struct PredictionRow {
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub predicted_aqi: Option<f64>,
    #[serde(default)]
    pub city_name: Option<String>,
}

impl From<PredictionRow> for Prediction {
    fn from(row: PredictionRow) -> Self {
        Prediction {
            datetime: row.datetime.as_deref().and_then(parse_datetime),
            aqi: row.predicted_aqi.unwrap_or(0.0),
            city_name: row.city_name,
        }
    }
}

/// `/pollutants` returns a map of pollutant code to average concentration.
/// A BTreeMap keeps the derived bar order deterministic (alphabetical).
pub type PollutantMap = BTreeMap<String, Option<f64>>;

pub fn pollutant_levels(map: PollutantMap) -> Vec<PollutantLevel> {
    map.into_iter()
        .filter_map(|(name, value)| value.map(|value| PollutantLevel { name, value }))
        .collect()
}

/// Body of `/health-risk`; all fields degrade individually when absent
#[derive(Debug, Deserialize)]
pub struct HealthRiskDto {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<HealthRiskDto> for HealthRisk {
    fn from(dto: HealthRiskDto) -> Self {
        HealthRisk {
            level: dto.level.unwrap_or_else(|| "N/A".to_string()),
            css_class: color_class(dto.color.as_deref()).to_string(),
            description: dto.description.unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_row_decodes_dotted_keys() {
        let json = r#"{
            "date": "2024-01-05",
            "main.aqi": 2.5,
            "components.pm2_5": 12.0,
            "components.pm10": 30.0,
            "components.o3": 40.0,
            "components.no2": 5.0,
            "components.so2": null,
            "city_name": "Manila"
        }"#;
        let row: DailyRow = serde_json::from_str(json).unwrap();
        let record: Record = row.into();

        assert!(record.datetime.is_some());
        assert_eq!(record.aqi, 2.5);
        assert_eq!(record.city_name, "Manila");
        assert_eq!(record.components.pm2_5, Some(12.0));
        assert_eq!(record.components.so2, None);
    }

    #[test]
    fn test_daily_row_null_aqi_defaults_to_zero() {
        let json = r#"{"date": "2024-01-05", "main.aqi": null, "city_name": "Manila"}"#;
        let row: DailyRow = serde_json::from_str(json).unwrap();
        let record: Record = row.into();
        assert_eq!(record.aqi, 0.0);
    }

    #[test]
    fn test_prediction_row_maps_predicted_aqi() {
        let json = r#"{"datetime": "2024-06-01T00:00:00+08:00", "predicted_aqi": 3.2}"#;
        let row: PredictionRow = serde_json::from_str(json).unwrap();
        let prediction: Prediction = row.into();
        assert_eq!(prediction.aqi, 3.2);
        assert!(prediction.datetime.is_some());
        assert_eq!(prediction.city_name, None);
    }

    #[test]
    fn test_pollutant_levels_sorted_and_nulls_dropped() {
        let json = r#"{"SO2": 4.0, "PM2_5": 15.0, "O3": null}"#;
        let map: PollutantMap = serde_json::from_str(json).unwrap();
        let levels = pollutant_levels(map);
        let names: Vec<&str> = levels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["PM2_5", "SO2"]);
    }

    #[test]
    fn test_health_risk_fallbacks() {
        let dto: HealthRiskDto = serde_json::from_str(r#"{"level": "Good"}"#).unwrap();
        let risk: HealthRisk = dto.into();
        assert_eq!(risk.level, "Good");
        assert_eq!(risk.css_class, "bg-blue-500");
        assert_eq!(risk.description, "N/A");

        let dto: HealthRiskDto =
            serde_json::from_str(r#"{"level": "Moderate", "color": "yellow", "description": "ok"}"#)
                .unwrap();
        let risk: HealthRisk = dto.into();
        assert_eq!(risk.css_class, "bg-yellow-500");
    }
}
