//! Date parsing with ordered fallback formats.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

/// Accepted timestamp formats for official receipts, tried in order. The
/// second is the older date-only layout some receipts still carry.
pub const OFFICIAL_DATE_FORMATS: &[&str] = &["%m/%d/%Y, %I:%M:%S %p", "%d-%b-%Y"];

/// Parse `raw` against each format in order and return the first success.
/// Date-only formats resolve to midnight.
///
/// A raw string that was located by regex but parses under no format is a
/// data-quality signal, logged as a warning rather than treated as an error.
pub fn parse_date_any(raw: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    for fmt in formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(datetime);
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    warn!("date found but could not parse: {raw:?}");
    None
}
