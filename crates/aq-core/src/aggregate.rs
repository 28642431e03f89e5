//! Aggregation of dated records into monthly and hourly views

use crate::format::manila;
use crate::types::{HourlyPattern, MonthlyAverage, Record};
use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};
use std::collections::{HashMap, HashSet};

/// Running sum/count accumulator for arithmetic means
#[derive(Debug, Clone, Copy, Default)]
struct MeanAccumulator {
    sum: f64,
    count: u32,
}

impl MeanAccumulator {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64)
    }
}

/// Short month name of a timestamp in the system-local zone.
pub(crate) fn local_month_name(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%b").to_string()
}

/// Calendar index (1..=12) of a short month name, obtained by parsing
/// `"<month> 1, 2000"`. Unknown names sort last.
fn month_index(month: &str) -> u32 {
    NaiveDate::parse_from_str(&format!("{month} 1, 2000"), "%b %d, %Y")
        .map(|date| {
            use chrono::Datelike;
            date.month()
        })
        .unwrap_or(u32::MAX)
}

/// Mean AQI per calendar month present in the data, in calendar order.
///
/// Months with no records are absent (no padding); undated records are
/// excluded. No rounding happens here; consumers round for display.
pub fn monthly_averages(records: &[Record]) -> Vec<MonthlyAverage> {
    let mut groups: HashMap<String, MeanAccumulator> = HashMap::new();

    for record in records {
        let Some(dt) = record.datetime else {
            continue;
        };
        groups.entry(local_month_name(dt)).or_default().add(record.aqi);
    }

    let mut averages: Vec<MonthlyAverage> = groups
        .into_iter()
        .filter_map(|(month, acc)| acc.mean().map(|aqi| MonthlyAverage { month, aqi }))
        .collect();

    averages.sort_by_key(|avg| month_index(&avg.month));
    averages
}

/// Mean AQI per hour of day, always 24 entries `"0:00"`..`"23:00"`.
///
/// Hours are extracted in the system-local zone (unlike display formatting,
/// which is pinned to Manila). An hour with no observations reports `0.0`;
/// that value is indistinguishable from a true zero mean.
pub fn hourly_patterns(records: &[Record]) -> Vec<HourlyPattern> {
    let mut buckets = [MeanAccumulator::default(); 24];

    for record in records {
        let Some(dt) = record.datetime else {
            continue;
        };
        let hour = dt.with_timezone(&Local).hour() as usize;
        buckets[hour].add(record.aqi);
    }

    buckets
        .iter()
        .enumerate()
        .map(|(hour, acc)| HourlyPattern {
            hour: format!("{hour}:00"),
            aqi: acc.mean().unwrap_or(0.0),
        })
        .collect()
}

/// Number of distinct Manila-zone calendar dates among dated records.
pub fn unique_days_analyzed(records: &[Record]) -> usize {
    records
        .iter()
        .filter_map(|record| record.datetime)
        .map(|dt| dt.with_timezone(&manila()).date_naive())
        .collect::<HashSet<_>>()
        .len()
}
