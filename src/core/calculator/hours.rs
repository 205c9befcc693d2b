//! Billable hours of one day: elapsed time minus the lunch break.

use crate::utils::time::minutes_between;
use chrono::NaiveTime;

/// Upper bound of a single day's hours.
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Lunch-break deduction settings (from the config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourPolicy {
    /// Minutes deducted for lunch.
    pub lunch_break_minutes: i64,
    /// The deduction applies only when elapsed minutes exceed this value.
    pub lunch_threshold_minutes: i64,
}

impl Default for HourPolicy {
    fn default() -> Self {
        Self {
            lunch_break_minutes: 60,
            lunch_threshold_minutes: 0,
        }
    }
}

/// Hours between `time_in` and `time_out`, lunch deducted, clamped to
/// `[0, 24]`.
///
/// Missing times give `0`. A `time_out` earlier than `time_in` is not
/// wrapped to the next day: it also gives `0`, and the confirmation gate
/// refuses such an entry.
pub fn compute_hours(
    time_in: Option<NaiveTime>,
    time_out: Option<NaiveTime>,
    policy: &HourPolicy,
) -> f64 {
    let (Some(start), Some(end)) = (time_in, time_out) else {
        return 0.0;
    };

    let elapsed = minutes_between(start, end);
    if elapsed <= 0 {
        return 0.0;
    }

    let worked = if elapsed > policy.lunch_threshold_minutes {
        elapsed - policy.lunch_break_minutes
    } else {
        elapsed
    };

    (worked as f64 / 60.0).clamp(0.0, MAX_DAILY_HOURS)
}
