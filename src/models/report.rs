use super::entry::ReportEntry;
use super::report_kind::ReportKind;
use super::report_status::ReportStatus;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub id: i64,
    pub kind: ReportKind,
    pub trainee: String, // student number of the owner
    pub title: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate, // inclusive
    pub status: ReportStatus,
    pub submitted_at: Option<DateTime<Local>>,
    pub supervisor_approved_at: Option<DateTime<Local>>,
    pub remarks: Option<String>,
    pub total_hours: f64, // aggregate of entry hours, recomputed
}

impl Report {
    /// Number of calendar days covered; 0 for an inverted range.
    pub fn day_count(&self) -> i64 {
        let days = (self.end_date - self.start_date).num_days();
        if days < 0 { 0 } else { days + 1 }
    }

    pub fn period_label(&self) -> String {
        format!(
            "{} → {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }

    /// Sum of the entries' hours, rounded to the minute.
    pub fn period_total(entries: &[ReportEntry]) -> f64 {
        let total: f64 = entries.iter().map(|e| e.total_hours).sum();
        (total * 60.0).round() / 60.0
    }
}

/// What the store returns after marking a report pending.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub status: ReportStatus,
    pub submitted_at: DateTime<Local>,
}

/// Reviewer outcome for a pending report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn target_status(&self) -> ReportStatus {
        match self {
            ReviewDecision::Approve => ReportStatus::Approved,
            ReviewDecision::Reject => ReportStatus::Rejected,
        }
    }
}
