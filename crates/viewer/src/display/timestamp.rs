//! Timestamp formatting for display. Parse-time timestamps stay as source
//! text; this is the only place they are interpreted.

use chrono::{DateTime, NaiveDateTime};

/// Shown for entries with no timestamp at all.
pub const NO_TIMESTAMP: &str = "No timestamp";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `04/Jun/2025 10:51:18`
const BRACKETED_FORMAT: &str = "%d/%b/%Y %H:%M:%S";
/// `2025-06-04 10:51:18,412`
const DJANGO_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Render a source timestamp uniformly. Anything unrecognised is returned
/// unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    let trimmed = timestamp.trim();
    if trimmed.is_empty() {
        return NO_TIMESTAMP.to_string();
    }

    match parse_timestamp(trimmed) {
        Some(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

/// Interpret any of the source formats as a naive datetime.
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    if timestamp.contains('/') {
        return NaiveDateTime::parse_from_str(timestamp, BRACKETED_FORMAT).ok();
    }
    if timestamp.contains('T') {
        return DateTime::parse_from_rfc3339(timestamp).ok().map(|dt| dt.naive_utc());
    }
    if timestamp.contains(',') {
        return NaiveDateTime::parse_from_str(timestamp, DJANGO_FORMAT).ok();
    }
    NaiveDateTime::parse_from_str(timestamp, DISPLAY_FORMAT).ok()
}
