//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Formats accepted for front-matter dates without an explicit offset
const NAIVE_DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

const NAIVE_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"];

/// Parse a front-matter date string into a comparable timestamp
///
/// Values without an offset are taken as UTC.
///
/// # Examples
/// ```
/// use mdblog::helpers::parse_date;
///
/// let a = parse_date("2024-01-01").unwrap();
/// let b = parse_date("2024-06-01T08:00:00+02:00").unwrap();
/// assert!(b > a);
/// assert!(parse_date("next tuesday").is_none());
/// ```
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}

/// Format a raw front-matter date for display, falling back to the raw text
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => raw.trim().to_string(),
    }
}
