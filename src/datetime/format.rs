use std::fmt::Write;

use chrono::NaiveDateTime;

pub const HOUR_FORMAT: &str = "%I";
pub const MINUTE_FORMAT: &str = "%M";
pub const PERIOD_FORMAT: &str = "%p";

/// Format a date-time, returning `fallback` if the format string is invalid.
pub fn safe_format(dt: &NaiveDateTime, fmt: &str, fallback: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", dt.format(fmt)) {
        Ok(()) if !out.is_empty() => out,
        _ => fallback.to_string(),
    }
}

pub fn display_hour(dt: &NaiveDateTime) -> String {
    safe_format(dt, HOUR_FORMAT, "12")
}

pub fn display_minute(dt: &NaiveDateTime) -> String {
    safe_format(dt, MINUTE_FORMAT, "00")
}

pub fn display_period(dt: &NaiveDateTime) -> String {
    safe_format(dt, PERIOD_FORMAT, "AM")
}
