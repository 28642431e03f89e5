//! Timestamp parsing and fixed-zone display formatting
//!
//! Display strings are always rendered in Asia/Manila (UTC+8, no DST) so the
//! dashboard reads the same regardless of where it runs. Note that hourly
//! bucketing in [`crate::aggregate`] intentionally uses the system-local zone
//! instead; the two behaviors are distinct on purpose.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Sentinel returned for absent or unparseable timestamps.
pub const INVALID_DATE: &str = "Invalid Date";

/// Asia/Manila as a fixed offset. The zone has used UTC+8 without DST for the
/// whole data range, so no tz table is needed.
pub fn manila() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid offset")
}

/// Parse an upstream timestamp string.
///
/// Accepts RFC 3339 (with zone), a bare `YYYY-MM-DDTHH:MM:SS` (taken as UTC),
/// and a bare `YYYY-MM-DD` (midnight UTC, matching how the daily endpoint's
/// `date` field is consumed). Returns `None` for anything else.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Render an already-parsed timestamp as `"<short month> <day>"` in Manila.
pub fn format_parsed(datetime: Option<DateTime<Utc>>) -> String {
    match datetime {
        Some(dt) => dt.with_timezone(&manila()).format("%b %-d").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Render a raw timestamp string for display, or `"Invalid Date"` when the
/// input is absent or does not parse.
pub fn format_date(raw: Option<&str>) -> String {
    format_parsed(raw.and_then(parse_datetime))
}
