//! Persistence boundary of the report workflow.

use crate::errors::AppResult;
use crate::models::entry::ReportEntry;
use crate::models::report::{Report, ReviewDecision, SubmissionReceipt};
use chrono::{DateTime, Local};

pub trait ReportStore {
    /// Report header plus its stored (sparse) entries.
    /// `AppError::ReportNotFound` when the id is unknown.
    fn fetch_report(&mut self, report_id: i64) -> AppResult<(Report, Vec<ReportEntry>)>;

    /// Upsert keyed by `(report_id, entry_date)`; returns the stored row.
    /// Retrying with the same entry must not create a second row.
    fn persist_entry(&mut self, entry: &ReportEntry) -> AppResult<ReportEntry>;

    /// Mark the report pending.
    fn persist_submission(&mut self, report_id: i64) -> AppResult<SubmissionReceipt>;

    /// Record the reviewer's decision; returns the review timestamp.
    fn persist_review(
        &mut self,
        report_id: i64,
        decision: ReviewDecision,
        remarks: Option<&str>,
    ) -> AppResult<DateTime<Local>>;
}
