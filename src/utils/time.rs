//! Time utilities: parsing HH:MM, elapsed minutes, formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Signed minutes from `start` to `end` on the same day.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// "7.50" style rendering used by tables and exports.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// "07h 30m" rendering of fractional hours.
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
