/// Utilities for date and time formatting
///
/// Server timestamps are ISO 8601 strings; everything is shown in UTC.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2025-10-09T08:15:00.000Z" -> "09.10.2025 08:15:00"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.naive_utc().format("%d.%m.%Y %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y %H:%M:%S").to_string();
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2025-10-09" or "2025-10-09T08:15:00Z" -> "09.10.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_naive_date(date),
        Err(_) => date_str.to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
