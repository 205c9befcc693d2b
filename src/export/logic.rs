// src/export/logic.rs

use crate::core::calculator::hours::HourPolicy;
use crate::core::session::ReportSession;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every materialized day of one report (blank days included, so
    /// the file always has one row per calendar day).
    pub fn export(
        pool: &mut DbPool,
        report_id: i64,
        format: ExportFormat,
        file: &str,
        force: bool,
        policy: HourPolicy,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let mut store = SqliteStore::new(pool);
        let session = ReportSession::load(&mut store, report_id, policy)?;

        ensure_writable(path, force)?;
        let report = session.report();

        let rows: Vec<EntryExport> = session
            .entries()
            .iter()
            .map(|e| EntryExport::from_entry(report, e))
            .collect();

        if rows.is_empty() {
            warning("Report covers no days: nothing to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
