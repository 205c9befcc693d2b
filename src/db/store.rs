//! `ReportStore` over the local SQLite database. Every state change also
//! leaves a line in the audit log.

use crate::core::store::ReportStore;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::ReportEntry;
use crate::models::report::{Report, ReviewDecision, SubmissionReceipt};
use crate::models::report_status::ReportStatus;
use chrono::{DateTime, Local};

pub struct SqliteStore<'a> {
    pool: &'a mut DbPool,
}

impl<'a> SqliteStore<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }
}

impl ReportStore for SqliteStore<'_> {
    fn fetch_report(&mut self, report_id: i64) -> AppResult<(Report, Vec<ReportEntry>)> {
        let report = queries::load_report(&self.pool.conn, report_id)?;
        let entries = queries::load_entries(&self.pool.conn, report_id)?;
        Ok((report, entries))
    }

    fn persist_entry(&mut self, entry: &ReportEntry) -> AppResult<ReportEntry> {
        let stored = queries::upsert_entry(&self.pool.conn, entry)?;

        let operation = if stored.is_confirmed { "confirm" } else { "draft" };
        ttlog_quiet(
            &self.pool.conn,
            operation,
            &format!("report #{} {}", stored.report_id, stored.date_str()),
            &format!("{:.2}h saved", stored.total_hours),
        );

        Ok(stored)
    }

    fn persist_submission(&mut self, report_id: i64) -> AppResult<SubmissionReceipt> {
        let submitted_at = Local::now();
        queries::mark_submitted(&self.pool.conn, report_id, &submitted_at)?;

        ttlog_quiet(
            &self.pool.conn,
            "submit",
            &format!("report #{report_id}"),
            "Report submitted for review",
        );

        Ok(SubmissionReceipt {
            status: ReportStatus::Pending,
            submitted_at,
        })
    }

    fn persist_review(
        &mut self,
        report_id: i64,
        decision: ReviewDecision,
        remarks: Option<&str>,
    ) -> AppResult<DateTime<Local>> {
        let reviewed_at = Local::now();
        let status = decision.target_status();
        let approved_at = (decision == ReviewDecision::Approve).then_some(&reviewed_at);

        queries::mark_reviewed(&self.pool.conn, report_id, status, remarks, approved_at)?;

        ttlog_quiet(
            &self.pool.conn,
            status.to_db_str(),
            &format!("report #{report_id}"),
            remarks.unwrap_or("(no remarks)"),
        );

        Ok(reviewed_at)
    }
}
