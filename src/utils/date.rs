use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Every calendar day from `start` to `end` inclusive; empty when start > end.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Short weekday label ("Mon", "Tue", ...).
pub fn weekday_label(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
