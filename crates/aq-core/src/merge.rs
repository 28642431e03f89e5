//! Merging historical and predicted series into one chart series

use crate::types::{ChartPoint, Prediction, Record, SeriesKind};

/// Combine filtered records and predictions into one chronologically ordered
/// series, tagging each point's provenance.
///
/// The sort is stable, so for equal timestamps the concatenation order holds
/// (historical before prediction). Undated points order before dated ones.
/// Output length is always `records.len() + predictions.len()`.
pub fn merge_for_chart(records: &[Record], predictions: &[Prediction]) -> Vec<ChartPoint> {
    let mut series: Vec<ChartPoint> = Vec::with_capacity(records.len() + predictions.len());

    series.extend(records.iter().map(|record| ChartPoint {
        datetime: record.datetime,
        aqi: record.aqi,
        kind: SeriesKind::Historical,
    }));
    series.extend(predictions.iter().map(|prediction| ChartPoint {
        datetime: prediction.datetime,
        aqi: prediction.aqi,
        kind: SeriesKind::Prediction,
    }));

    series.sort_by_key(|point| point.datetime);
    series
}
