//! Record filtering by selected month and city

use crate::aggregate::local_month_name;
use crate::types::{Record, ALL_CITIES, ALL_MONTHS};

/// Narrow `records` to the selected month and city, order preserved.
///
/// The two filters compose as an AND. The month filter matches the record's
/// short month name in the system-local zone and silently drops undated
/// records; the city filter is an exact, case-sensitive match. With both
/// sentinels selected this is a plain copy of the input.
pub fn filter_by_month_and_city(records: &[Record], month: &str, city: &str) -> Vec<Record> {
    let mut filtered: Vec<Record> = records.to_vec();

    if month != ALL_MONTHS {
        filtered.retain(|record| {
            record
                .datetime
                .map(|dt| local_month_name(dt) == month)
                .unwrap_or(false)
        });
    }

    if city != ALL_CITIES {
        filtered.retain(|record| record.city_name == city);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_datetime;
    use crate::types::Components;
    use chrono::Local;

    fn record(datetime: &str, city: &str) -> Record {
        Record {
            datetime: parse_datetime(datetime),
            city_name: city.to_string(),
            aqi: 1.0,
            components: Components::default(),
        }
    }

    #[test]
    fn test_no_filters_is_full_passthrough() {
        let records = vec![
            record("2024-01-15T10:00:00Z", "A"),
            record("2024-02-15T10:00:00Z", "B"),
            record("not-a-date", "A"),
        ];
        let filtered = filter_by_month_and_city(&records, ALL_MONTHS, ALL_CITIES);
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_city_filter_exact_match() {
        let records = vec![
            record("2024-01-15T10:00:00Z", "A"),
            record("2024-02-15T10:00:00Z", "A"),
        ];
        assert_eq!(filter_by_month_and_city(&records, ALL_MONTHS, "A").len(), 2);
        assert!(filter_by_month_and_city(&records, ALL_MONTHS, "B").is_empty());
        // Case-sensitive
        assert!(filter_by_month_and_city(&records, ALL_MONTHS, "a").is_empty());
    }

    #[test]
    fn test_month_filter_uses_local_month_name() {
        let records = vec![
            record("2024-01-15T10:00:00Z", "A"),
            record("2024-02-15T10:00:00Z", "A"),
        ];
        // Derive the expected name the same way the filter does
        let jan = records[0]
            .datetime
            .unwrap()
            .with_timezone(&Local)
            .format("%b")
            .to_string();
        let filtered = filter_by_month_and_city(&records, &jan, ALL_CITIES);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0], records[0]);
    }

    #[test]
    fn test_month_filter_drops_undated_records() {
        let records = vec![record("not-a-date", "A")];
        assert!(filter_by_month_and_city(&records, "Jan", ALL_CITIES).is_empty());
        // But they pass a city-only filter untouched
        assert_eq!(filter_by_month_and_city(&records, ALL_MONTHS, "A").len(), 1);
    }

    #[test]
    fn test_filters_compose() {
        let records = vec![
            record("2024-06-15T10:00:00Z", "A"),
            record("2024-06-15T10:00:00Z", "B"),
            record("2024-07-15T10:00:00Z", "A"),
        ];
        let jun = records[0]
            .datetime
            .unwrap()
            .with_timezone(&Local)
            .format("%b")
            .to_string();
        let filtered = filter_by_month_and_city(&records, &jun, "A");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].city_name, "A");
    }
}
