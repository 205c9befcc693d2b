//! Build the gap-free day list of a report from its sparse stored entries.

use crate::models::entry::ReportEntry;
use crate::utils::date::days_inclusive;
use chrono::NaiveDate;
use std::collections::HashMap;

/// One entry per calendar day of `[start_date, end_date]`, ascending.
///
/// Days with a stored entry reuse it verbatim; the others get a blank entry
/// with a temporary id. Stored entries outside the range are ignored and,
/// should storage hold two rows for one day, the first wins. An inverted
/// range yields an empty list.
pub fn materialize(
    start_date: NaiveDate,
    end_date: NaiveDate,
    persisted: &[ReportEntry],
    report_id: i64,
) -> Vec<ReportEntry> {
    let mut by_date: HashMap<NaiveDate, &ReportEntry> = HashMap::with_capacity(persisted.len());
    for entry in persisted {
        by_date.entry(entry.entry_date).or_insert(entry);
    }

    days_inclusive(start_date, end_date)
        .into_iter()
        .map(|day| match by_date.get(&day) {
            Some(stored) => ReportEntry {
                report_id,
                ..(*stored).clone()
            },
            None => ReportEntry::blank(report_id, day),
        })
        .collect()
}

/// Position of `date` in a materialized list (the day-tab index).
pub fn day_index(entries: &[ReportEntry], date: NaiveDate) -> Option<usize> {
    entries.binary_search_by_key(&date, |e| e.entry_date).ok()
}
