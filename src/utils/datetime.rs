//! Date utility functions for access windows.

use chrono::{Local, NaiveDate};

/// Date format used by the API for access start/end dates.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, API_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(API_DATE_FORMAT).to_string()
}

/// Render an access window as shown on student rows, e.g. "2025-01-01 → 2025-06-30".
pub fn format_access_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{} → {}", format_ymd(s), format_ymd(e)),
        (Some(s), None) => format!("from {}", format_ymd(s)),
        (None, Some(e)) => format!("until {}", format_ymd(e)),
        (None, None) => "unlimited".to_string(),
    }
}

/// Days remaining in an access window, `None` when open-ended.
pub fn days_remaining(end: Option<NaiveDate>) -> Option<i64> {
    end.map(|e| (e - Local::now().date_naive()).num_days())
}
