use ojtlog::core::materializer::{day_index, materialize};
use ojtlog::models::entry::{EntryId, ReportEntry};
use std::collections::HashSet;

mod common;
use common::{d, stored_entry};

#[test]
fn test_one_entry_per_day_in_order() {
    let entries = materialize(d("2025-02-24"), d("2025-03-02"), &[], 1);

    assert_eq!(entries.len(), 7);
    assert!(entries.windows(2).all(|w| w[0].entry_date < w[1].entry_date));

    let dates: HashSet<_> = entries.iter().map(|e| e.entry_date).collect();
    assert_eq!(dates.len(), 7);
    assert_eq!(entries[0].entry_date, d("2025-02-24"));
    assert_eq!(entries[6].entry_date, d("2025-03-02"));
}

#[test]
fn test_single_day_range() {
    let entries = materialize(d("2025-03-03"), d("2025-03-03"), &[], 1);
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_inverted_range_is_empty() {
    let entries = materialize(d("2025-03-10"), d("2025-03-03"), &[], 1);
    assert!(entries.is_empty());
}

#[test]
fn test_blank_days_are_temporary_and_unconfirmed() {
    let entries = materialize(d("2025-03-03"), d("2025-03-04"), &[], 9);

    for e in &entries {
        assert!(e.id.is_temporary());
        assert_eq!(e.report_id, 9);
        assert_eq!(e.total_hours, 0.0);
        assert!(e.time_in.is_none() && e.time_out.is_none());
        assert!(e.daily_accomplishments.is_none());
        assert!(e.status.is_none());
        assert!(!e.is_confirmed);
    }
    assert_eq!(entries[0].id.to_string(), "temp-2025-03-03");
}

#[test]
fn test_stored_entries_are_copied_verbatim() {
    let stored = vec![
        stored_entry(41, 1, "2025-03-05", true),
        stored_entry(42, 1, "2025-03-03", false),
    ];

    let entries = materialize(d("2025-03-03"), d("2025-03-07"), &stored, 1);
    assert_eq!(entries.len(), 5);

    let idx = day_index(&entries, d("2025-03-05")).unwrap();
    assert_eq!(idx, 2);

    let e = &entries[idx];
    assert_eq!(e.id, EntryId::Persisted(41));
    assert_eq!(e.time_in, stored[0].time_in);
    assert_eq!(e.time_out, stored[0].time_out);
    assert_eq!(e.daily_accomplishments, stored[0].daily_accomplishments);
    assert!(e.is_confirmed);

    assert_eq!(entries[0].id.persisted(), Some(42));
    assert!(entries[1].id.is_temporary());
}

#[test]
fn test_entries_outside_range_are_ignored() {
    let stored = vec![stored_entry(7, 1, "2025-01-01", true)];
    let entries = materialize(d("2025-03-03"), d("2025-03-04"), &stored, 1);

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.id.is_temporary()));
}

#[test]
fn test_rematerialization_is_stable() {
    let stored = vec![stored_entry(5, 3, "2025-03-04", false)];

    let first: Vec<ReportEntry> = materialize(d("2025-03-03"), d("2025-03-09"), &stored, 3);
    let second: Vec<ReportEntry> = materialize(d("2025-03-03"), d("2025-03-09"), &stored, 3);

    assert_eq!(first, second);
}
