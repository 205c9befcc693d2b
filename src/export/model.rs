// src/export/model.rs

use crate::models::entry::ReportEntry;
use crate::models::report::Report;
use serde::Serialize;

/// Flat row: one materialized day plus the columns of its report.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub report_id: i64,
    pub kind: String,
    pub trainee: String,
    pub report_status: String,
    pub entry_id: String,
    pub entry_date: String,
    pub time_in: String,
    pub time_out: String,
    pub total_hours: f64,
    pub status: String,
    pub daily_accomplishments: String,
    pub additional_notes: String,
    pub is_confirmed: bool,
}

impl EntryExport {
    pub fn from_entry(report: &Report, e: &ReportEntry) -> Self {
        Self {
            report_id: report.id,
            kind: report.kind.to_db_str().to_string(),
            trainee: report.trainee.clone(),
            report_status: report.status.to_db_str().to_string(),
            entry_id: e.id.to_string(),
            entry_date: e.date_str(),
            time_in: e.time_in_str().unwrap_or_default(),
            time_out: e.time_out_str().unwrap_or_default(),
            total_hours: (e.total_hours * 100.0).round() / 100.0,
            status: e.status.map(|s| s.to_db_str().to_string()).unwrap_or_default(),
            daily_accomplishments: e.daily_accomplishments.clone().unwrap_or_default(),
            additional_notes: e.additional_notes.clone().unwrap_or_default(),
            is_confirmed: e.is_confirmed,
        }
    }
}
