//! Pure single-entry edits over a materialized list.
//!
//! Every function replaces the entry whose id matches and returns the list;
//! an unknown id leaves the list untouched. Nothing here checks whether the
//! edit is allowed: that is the gate's job.

use crate::core::calculator::hours::{HourPolicy, compute_hours};
use crate::models::entry::{EntryId, ReportEntry};
use crate::models::entry_status::EntryStatus;
use chrono::NaiveTime;

fn update<F>(entries: Vec<ReportEntry>, id: &EntryId, f: F) -> Vec<ReportEntry>
where
    F: Fn(&mut ReportEntry),
{
    entries
        .into_iter()
        .map(|mut e| {
            if e.id == *id {
                f(&mut e);
            }
            e
        })
        .collect()
}

pub fn set_time_in(
    entries: Vec<ReportEntry>,
    id: &EntryId,
    value: Option<NaiveTime>,
    policy: &HourPolicy,
) -> Vec<ReportEntry> {
    update(entries, id, |e| {
        e.time_in = value;
        e.total_hours = compute_hours(e.time_in, e.time_out, policy);
    })
}

pub fn set_time_out(
    entries: Vec<ReportEntry>,
    id: &EntryId,
    value: Option<NaiveTime>,
    policy: &HourPolicy,
) -> Vec<ReportEntry> {
    update(entries, id, |e| {
        e.time_out = value;
        e.total_hours = compute_hours(e.time_in, e.time_out, policy);
    })
}

pub fn set_accomplishments(
    entries: Vec<ReportEntry>,
    id: &EntryId,
    value: Option<String>,
) -> Vec<ReportEntry> {
    update(entries, id, |e| e.daily_accomplishments = value.clone())
}

pub fn set_additional_notes(
    entries: Vec<ReportEntry>,
    id: &EntryId,
    value: Option<String>,
) -> Vec<ReportEntry> {
    update(entries, id, |e| e.additional_notes = value.clone())
}

/// Present / late (or unset). Absent and holiday go through the toggles.
pub fn set_status(
    entries: Vec<ReportEntry>,
    id: &EntryId,
    value: Option<EntryStatus>,
) -> Vec<ReportEntry> {
    update(entries, id, |e| e.status = value)
}

fn toggle(entries: Vec<ReportEntry>, id: &EntryId, flag: EntryStatus) -> Vec<ReportEntry> {
    update(entries, id, |e| {
        e.status = if e.status == Some(flag) {
            None
        } else {
            Some(flag)
        };
    })
}

/// Flip the absent flag; clears holiday when set. Times are kept.
pub fn toggle_absent(entries: Vec<ReportEntry>, id: &EntryId) -> Vec<ReportEntry> {
    toggle(entries, id, EntryStatus::Absent)
}

/// Flip the holiday flag; clears absent when set. Times are kept.
pub fn toggle_holiday(entries: Vec<ReportEntry>, id: &EntryId) -> Vec<ReportEntry> {
    toggle(entries, id, EntryStatus::Holiday)
}

/// Recompute every entry's hours (after a policy change, or on load).
pub fn recompute_all(entries: Vec<ReportEntry>, policy: &HourPolicy) -> Vec<ReportEntry> {
    entries
        .into_iter()
        .map(|mut e| {
            e.total_hours = compute_hours(e.time_in, e.time_out, policy);
            e
        })
        .collect()
}
