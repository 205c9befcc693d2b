use ojtlog::core::calculator::hours::HourPolicy;
use ojtlog::core::session::ReportSession;
use ojtlog::errors::AppError;
use ojtlog::models::entry::EntryId;
use ojtlog::models::report::ReviewDecision;
use ojtlog::models::report_status::ReportStatus;

mod common;
use common::{MemoryStore, d, report, stored_entry, t};

const MON: &str = "2025-03-03";
const TUE: &str = "2025-03-04";

fn two_day_store() -> MemoryStore {
    MemoryStore::with_report(report(1, MON, TUE, ReportStatus::NotSubmitted))
}

fn fill_day(session: &mut ReportSession<'_, MemoryStore>, day: &str) {
    session.set_time_in(d(day), Some(t("08:00"))).unwrap();
    session.set_time_out(d(day), Some(t("17:00"))).unwrap();
    session
        .set_accomplishments(d(day), Some("Inventory of lab equipment".into()))
        .unwrap();
}

#[test]
fn test_load_materializes_and_totals() {
    let mut store = two_day_store();
    store.entries.push(stored_entry(10, 1, TUE, false));

    let session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();

    assert_eq!(session.entries().len(), 2);
    assert!(session.entries()[0].id.is_temporary());
    assert_eq!(session.entries()[1].id, EntryId::Persisted(10));
    assert_eq!(session.report().total_hours, 7.0);
}

#[test]
fn test_load_unknown_report() {
    let mut store = two_day_store();
    let err = ReportSession::load(&mut store, 42, HourPolicy::default()).err().unwrap();
    assert!(matches!(err, AppError::ReportNotFound(42)));
}

#[test]
fn test_edit_updates_period_total() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();

    fill_day(&mut session, MON);
    fill_day(&mut session, TUE);

    assert_eq!(session.report().total_hours, 16.0);
}

#[test]
fn test_confirm_requires_accomplishments_without_persisting() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    session.set_time_in(d(MON), Some(t("08:00"))).unwrap();
    session.set_time_out(d(MON), Some(t("17:00"))).unwrap();

    let err = session.confirm(d(MON)).unwrap_err();

    assert!(matches!(err, AppError::MissingAccomplishments(_)));
    assert!(err.is_validation());
    assert!(!session.entry(d(MON)).unwrap().is_confirmed);
    assert_eq!(session.store().persist_entry_calls, 0);
}

#[test]
fn test_confirm_requires_both_times() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    session.set_time_in(d(MON), Some(t("08:00"))).unwrap();
    session.set_accomplishments(d(MON), Some("Docs".into())).unwrap();

    let err = session.confirm(d(MON)).unwrap_err();
    assert!(matches!(err, AppError::MissingTimes(_)));
    assert_eq!(session.store().persist_entry_calls, 0);
}

#[test]
fn test_blank_accomplishments_do_not_count() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    fill_day(&mut session, MON);
    session.set_accomplishments(d(MON), Some("   ".into())).unwrap();

    assert!(matches!(
        session.confirm(d(MON)).unwrap_err(),
        AppError::MissingAccomplishments(_)
    ));
}

#[test]
fn test_absent_day_confirms_without_times() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    session.toggle_absent(d(MON)).unwrap();
    session.set_accomplishments(d(MON), Some("Sick leave".into())).unwrap();

    let e = session.confirm(d(MON)).unwrap();
    assert!(e.is_confirmed);
    assert_eq!(e.id, EntryId::Persisted(101));
    assert_eq!(session.store().persist_entry_calls, 1);
}

#[test]
fn test_times_disabled_on_holiday() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    session.toggle_holiday(d(MON)).unwrap();

    let err = session.set_time_in(d(MON), Some(t("08:00"))).unwrap_err();
    assert!(matches!(err, AppError::TimesDisabled(_)));
}

#[test]
fn test_overnight_entry_is_refused() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    session.set_time_in(d(MON), Some(t("22:00"))).unwrap();
    session.set_time_out(d(MON), Some(t("06:00"))).unwrap();
    session.set_accomplishments(d(MON), Some("Night shift".into())).unwrap();

    assert_eq!(session.entry(d(MON)).unwrap().total_hours, 0.0);
    assert!(matches!(
        session.confirm(d(MON)).unwrap_err(),
        AppError::InvalidTimeRange { .. }
    ));
}

#[test]
fn test_failed_confirm_keeps_entry_unconfirmed() {
    let mut store = two_day_store();
    store.fail_writes = true;
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    fill_day(&mut session, MON);

    let err = session.confirm(d(MON)).unwrap_err();

    assert!(!err.is_validation());
    let e = session.entry(d(MON)).unwrap();
    assert!(!e.is_confirmed);
    assert!(e.id.is_temporary());
    assert_eq!(session.store().persist_entry_calls, 1);
}

#[test]
fn test_confirmed_entry_is_locked() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    fill_day(&mut session, MON);
    session.confirm(d(MON)).unwrap();

    let err = session.set_time_out(d(MON), Some(t("18:00"))).unwrap_err();
    assert!(matches!(err, AppError::EntryLocked(_)));
    assert_eq!(session.entry(d(MON)).unwrap().time_out, Some(t("17:00")));
}

#[test]
fn test_confirm_twice_persists_once() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    fill_day(&mut session, MON);
    session.confirm(d(MON)).unwrap();
    session.confirm(d(MON)).unwrap();

    assert_eq!(session.store().persist_entry_calls, 1);
}

#[test]
fn test_draft_is_persisted_unconfirmed() {
    let mut store = two_day_store();
    {
        let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
        session.set_time_in(d(TUE), Some(t("09:00"))).unwrap();
        let e = session.save_draft(d(TUE)).unwrap();
        assert!(!e.is_confirmed);
        assert!(!e.id.is_temporary());
    }

    let session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    assert_eq!(session.entry(d(TUE)).unwrap().time_in, Some(t("09:00")));
}

#[test]
fn test_submit_with_unconfirmed_entries() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    fill_day(&mut session, MON);
    session.confirm(d(MON)).unwrap();

    let err = session.submit(true).unwrap_err();

    assert!(matches!(err, AppError::UnconfirmedEntries(1)));
    assert_eq!(session.report().status, ReportStatus::NotSubmitted);
    assert_eq!(session.store().submission_calls, 0);
}

#[test]
fn test_submit_requires_signature() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    for day in [MON, TUE] {
        fill_day(&mut session, day);
        session.confirm(d(day)).unwrap();
    }

    assert!(matches!(
        session.submit(false).unwrap_err(),
        AppError::SignatureRequired
    ));
    assert_eq!(session.report().status, ReportStatus::NotSubmitted);
}

#[test]
fn test_submit_moves_to_pending_and_locks_edits() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    for day in [MON, TUE] {
        fill_day(&mut session, day);
        session.confirm(d(day)).unwrap();
    }

    let report = session.submit(true).unwrap();
    assert_eq!(report.status, ReportStatus::Pending);
    assert!(report.submitted_at.is_some());

    let err = session.set_additional_notes(d(MON), Some("late note".into())).unwrap_err();
    assert!(matches!(err, AppError::ReportNotEditable(_)));

    // a second submit is not a valid transition
    assert!(matches!(
        session.submit(true).unwrap_err(),
        AppError::InvalidTransition { .. }
    ));
}

#[test]
fn test_failed_submission_keeps_status() {
    let mut store = two_day_store();
    store.entries.push(stored_entry(1, 1, MON, true));
    store.entries.push(stored_entry(2, 1, TUE, true));
    store.fail_writes = true;

    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    assert!(session.submit(true).is_err());
    assert_eq!(session.report().status, ReportStatus::NotSubmitted);
    assert!(session.report().submitted_at.is_none());
    assert_eq!(session.store().submission_calls, 1);
}

#[test]
fn test_review_only_from_pending() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();

    let err = session.review(ReviewDecision::Approve, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert_eq!(session.store().review_calls, 0);
}

#[test]
fn test_approve_stamps_approval_time() {
    let mut store = MemoryStore::with_report(report(1, MON, TUE, ReportStatus::Pending));
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();

    let report = session
        .review(ReviewDecision::Approve, Some("Good work".into()))
        .unwrap();

    assert_eq!(report.status, ReportStatus::Approved);
    assert!(report.supervisor_approved_at.is_some());
    assert_eq!(report.remarks.as_deref(), Some("Good work"));
}

#[test]
fn test_rejection_reopens_and_requires_reconfirmation() {
    let mut store = MemoryStore::with_report(report(1, MON, TUE, ReportStatus::Pending));
    store.entries.push(stored_entry(1, 1, MON, true));
    store.entries.push(stored_entry(2, 1, TUE, true));

    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();
    session
        .review(ReviewDecision::Reject, Some("Fix Monday".into()))
        .unwrap();
    assert_eq!(session.report().status, ReportStatus::Rejected);
    assert!(session.report().supervisor_approved_at.is_none());

    // untouched days keep their confirmation
    assert!(session.entry(d(TUE)).unwrap().is_confirmed);

    session.set_time_in(d(MON), Some(t("10:00"))).unwrap();
    assert!(!session.entry(d(MON)).unwrap().is_confirmed);
    assert!(matches!(
        session.submit(true).unwrap_err(),
        AppError::UnconfirmedEntries(1)
    ));

    session.confirm(d(MON)).unwrap();
    let report = session.submit(true).unwrap();
    assert_eq!(report.status, ReportStatus::Pending);
    assert_eq!(report.total_hours, 13.0);
}

#[test]
fn test_unknown_day_is_not_found() {
    let mut store = two_day_store();
    let mut session = ReportSession::load(&mut store, 1, HourPolicy::default()).unwrap();

    let err = session.set_time_in(d("2025-03-09"), Some(t("08:00"))).unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(_)));
}
