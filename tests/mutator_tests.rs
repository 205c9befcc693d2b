use ojtlog::core::calculator::hours::HourPolicy;
use ojtlog::core::materializer::materialize;
use ojtlog::core::mutator::{
    set_accomplishments, set_additional_notes, set_status, set_time_in, set_time_out,
    toggle_absent, toggle_holiday,
};
use ojtlog::models::entry::EntryId;
use ojtlog::models::entry_status::EntryStatus;

mod common;
use common::{d, t};

fn week() -> Vec<ojtlog::models::entry::ReportEntry> {
    materialize(d("2025-03-03"), d("2025-03-07"), &[], 1)
}

#[test]
fn test_times_recompute_hours() {
    let policy = HourPolicy::default();
    let id = EntryId::Temporary(d("2025-03-04"));

    let entries = set_time_in(week(), &id, Some(t("08:00")), &policy);
    assert_eq!(entries[1].total_hours, 0.0);

    let entries = set_time_out(entries, &id, Some(t("17:00")), &policy);
    assert_eq!(entries[1].total_hours, 8.0);

    let entries = set_time_in(entries, &id, None, &policy);
    assert_eq!(entries[1].total_hours, 0.0);
    assert_eq!(entries[1].time_out, Some(t("17:00")));
}

#[test]
fn test_only_the_target_entry_changes() {
    let id = EntryId::Temporary(d("2025-03-05"));
    let before = week();
    let after = set_accomplishments(before.clone(), &id, Some("Cabling".into()));

    for (i, (a, b)) in after.iter().zip(before.iter()).enumerate() {
        if i == 2 {
            assert_eq!(a.daily_accomplishments.as_deref(), Some("Cabling"));
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_text_fields_do_not_touch_hours() {
    let policy = HourPolicy::default();
    let id = EntryId::Temporary(d("2025-03-03"));
    let entries = set_time_out(
        set_time_in(week(), &id, Some(t("09:00")), &policy),
        &id,
        Some(t("17:00")),
        &policy,
    );
    let entries = set_additional_notes(entries, &id, Some("Site visit".into()));

    assert_eq!(entries[0].total_hours, 7.0);
    assert_eq!(entries[0].additional_notes.as_deref(), Some("Site visit"));
}

#[test]
fn test_absent_and_holiday_are_exclusive() {
    let id = EntryId::Temporary(d("2025-03-03"));

    let entries = toggle_absent(week(), &id);
    assert_eq!(entries[0].status, Some(EntryStatus::Absent));

    let entries = toggle_holiday(entries, &id);
    assert_eq!(entries[0].status, Some(EntryStatus::Holiday));

    let entries = toggle_holiday(entries, &id);
    assert_eq!(entries[0].status, None);
}

#[test]
fn test_toggle_keeps_times() {
    let policy = HourPolicy::default();
    let id = EntryId::Temporary(d("2025-03-03"));
    let entries = set_time_in(week(), &id, Some(t("08:00")), &policy);
    let entries = toggle_absent(entries, &id);

    assert_eq!(entries[0].time_in, Some(t("08:00")));
}

#[test]
fn test_unknown_id_is_a_no_op() {
    let policy = HourPolicy::default();
    let missing = EntryId::Persisted(999);
    let original = week();

    assert_eq!(set_time_in(original.clone(), &missing, Some(t("08:00")), &policy), original);
    assert_eq!(set_time_out(original.clone(), &missing, Some(t("17:00")), &policy), original);
    assert_eq!(set_accomplishments(original.clone(), &missing, Some("x".into())), original);
    assert_eq!(set_additional_notes(original.clone(), &missing, Some("x".into())), original);
    assert_eq!(set_status(original.clone(), &missing, Some(EntryStatus::Late)), original);
    assert_eq!(toggle_absent(original.clone(), &missing), original);
    assert_eq!(toggle_holiday(original.clone(), &missing), original);
}
