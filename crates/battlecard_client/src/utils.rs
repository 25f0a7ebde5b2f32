//! Date normalization for the `call_date` column.

use chrono::NaiveDate;

/// Parse a call date into a calendar day.
///
/// Accepts:
/// - YYYY-MM-DD
/// - RFC3339 datetime (date in the datetime's own offset)
/// - Naive datetime YYYY-MM-DDTHH:MM:SS, with optional fractional seconds
pub fn parse_call_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ndt.date());
    }
    None
}
