/// Utilities for date and time formatting
///
/// Backend timestamps are RFC 3339; anything else is shown as-is.
use chrono::{DateTime, NaiveDate};

/// Format an RFC 3339 timestamp as `DD.MM.YYYY HH:MM`.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

/// Format an ISO date as `DD.MM.YYYY`.
/// Example: "2024-03-15" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
