//! Projection of records for the pollutant-correlation view

use crate::format::format_parsed;
use crate::types::{CorrelationPoint, Record};

/// Select the correlation fields from each record, 1:1 with the input.
///
/// No filtering happens here; undated records keep their row with the
/// `"Invalid Date"` display string.
pub fn project_for_correlation(records: &[Record]) -> Vec<CorrelationPoint> {
    records
        .iter()
        .map(|record| CorrelationPoint {
            pm25: record.components.pm2_5,
            pm10: record.components.pm10,
            o3: record.components.o3,
            aqi: record.aqi,
            display_date: format_parsed(record.datetime),
        })
        .collect()
}
