//! Preconditions of the entry and report state machines.
//!
//! Entry:  unconfirmed → confirmed
//! Report: not submitted → pending → approved | rejected, rejected → pending

use crate::errors::{AppError, AppResult};
use crate::models::entry::ReportEntry;
use crate::models::report_status::ReportStatus;

/// Any field edit: report must be open, and a confirmed entry reopens only
/// once the report has been rejected.
pub fn ensure_editable(report_status: ReportStatus, entry: &ReportEntry) -> AppResult<()> {
    if !report_status.is_open() {
        return Err(AppError::ReportNotEditable(report_status.to_string()));
    }
    if entry.is_confirmed && report_status != ReportStatus::Rejected {
        return Err(AppError::EntryLocked(entry.entry_date));
    }
    Ok(())
}

/// Time in / time out edits are disabled on absent and holiday days.
pub fn ensure_times_editable(report_status: ReportStatus, entry: &ReportEntry) -> AppResult<()> {
    ensure_editable(report_status, entry)?;
    if entry.times_excused() {
        return Err(AppError::TimesDisabled(entry.entry_date));
    }
    Ok(())
}

/// unconfirmed → confirmed
pub fn check_confirmable(report_status: ReportStatus, entry: &ReportEntry) -> AppResult<()> {
    if !report_status.is_open() {
        return Err(AppError::ReportNotEditable(report_status.to_string()));
    }

    if !entry.has_accomplishments() {
        return Err(AppError::MissingAccomplishments(entry.entry_date));
    }

    if entry.times_excused() {
        return Ok(());
    }

    match (entry.time_in, entry.time_out) {
        (Some(tin), Some(tout)) if tout < tin => Err(AppError::InvalidTimeRange {
            date: entry.entry_date,
            time_in: tin.format("%H:%M").to_string(),
            time_out: tout.format("%H:%M").to_string(),
        }),
        (Some(_), Some(_)) => Ok(()),
        _ => Err(AppError::MissingTimes(entry.entry_date)),
    }
}

/// * → pending
pub fn check_submittable(
    report_status: ReportStatus,
    entries: &[ReportEntry],
    signed: bool,
) -> AppResult<()> {
    if !report_status.is_open() {
        return Err(AppError::InvalidTransition {
            from: report_status.to_string(),
            to: ReportStatus::Pending.to_string(),
        });
    }

    let unconfirmed = entries.iter().filter(|e| !e.is_confirmed).count();
    if unconfirmed > 0 {
        return Err(AppError::UnconfirmedEntries(unconfirmed));
    }

    if !signed {
        return Err(AppError::SignatureRequired);
    }

    Ok(())
}

/// pending → approved | rejected
pub fn check_reviewable(report_status: ReportStatus, target: ReportStatus) -> AppResult<()> {
    if report_status != ReportStatus::Pending {
        return Err(AppError::InvalidTransition {
            from: report_status.to_string(),
            to: target.to_string(),
        });
    }
    Ok(())
}
