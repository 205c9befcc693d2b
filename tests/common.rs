#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, NaiveDate, NaiveTime};
use ojtlog::core::store::ReportStore;
use ojtlog::errors::{AppError, AppResult};
use ojtlog::models::entry::{EntryId, ReportEntry};
use ojtlog::models::report::{Report, ReviewDecision, SubmissionReceipt};
use ojtlog::models::report_kind::ReportKind;
use ojtlog::models::report_status::ReportStatus;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ojt() -> Command {
    cargo_bin_cmd!("ojtlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ojtlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Init a DB and create report #1 for trainee 2021-00123 over [start, end].
pub fn init_db_with_report(db_path: &str, start: &str, end: &str) {
    ojt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ojt()
        .args([
            "--db",
            db_path,
            "report",
            "new",
            "--trainee",
            "2021-00123",
            "--start",
            start,
            "--end",
            end,
        ])
        .assert()
        .success();
}

/// Fill and confirm one working day of report #1.
pub fn confirm_day(db_path: &str, date: &str) {
    ojt()
        .args([
            "--db",
            db_path,
            "entry",
            "1",
            date,
            "--in",
            "08:00",
            "--out",
            "17:00",
            "--text",
            "Configured network switches",
            "--confirm",
        ])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

pub fn report(id: i64, start: &str, end: &str, status: ReportStatus) -> Report {
    Report {
        id,
        kind: ReportKind::Attendance,
        trainee: "2021-00123".into(),
        title: None,
        start_date: d(start),
        end_date: d(end),
        status,
        submitted_at: None,
        supervisor_approved_at: None,
        remarks: None,
        total_hours: 0.0,
    }
}

/// A stored entry with times and text, as it would come out of the database.
pub fn stored_entry(id: i64, report_id: i64, date: &str, confirmed: bool) -> ReportEntry {
    ReportEntry {
        id: EntryId::Persisted(id),
        report_id,
        entry_date: d(date),
        time_in: Some(t("09:00")),
        time_out: Some(t("17:00")),
        total_hours: 7.0,
        daily_accomplishments: Some("Wrote unit tests".into()),
        additional_notes: None,
        status: None,
        is_confirmed: confirmed,
    }
}

/// In-memory `ReportStore` double counting calls, with a switch to make
/// every write fail.
#[derive(Default)]
pub struct MemoryStore {
    pub report: Option<Report>,
    pub entries: Vec<ReportEntry>,
    pub next_id: i64,
    pub fail_writes: bool,
    pub persist_entry_calls: usize,
    pub submission_calls: usize,
    pub review_calls: usize,
}

impl MemoryStore {
    pub fn with_report(report: Report) -> Self {
        Self {
            report: Some(report),
            next_id: 100,
            ..Default::default()
        }
    }

    fn down() -> AppError {
        AppError::Io(std::io::Error::other("connection reset"))
    }
}

impl ReportStore for MemoryStore {
    fn fetch_report(&mut self, report_id: i64) -> AppResult<(Report, Vec<ReportEntry>)> {
        match &self.report {
            Some(r) if r.id == report_id => Ok((r.clone(), self.entries.clone())),
            _ => Err(AppError::ReportNotFound(report_id)),
        }
    }

    fn persist_entry(&mut self, entry: &ReportEntry) -> AppResult<ReportEntry> {
        self.persist_entry_calls += 1;
        if self.fail_writes {
            return Err(Self::down());
        }

        let existing = self
            .entries
            .iter_mut()
            .find(|e| e.report_id == entry.report_id && e.entry_date == entry.entry_date);

        let stored = match existing {
            Some(slot) => {
                let id = slot.id;
                *slot = ReportEntry { id, ..entry.clone() };
                slot.clone()
            }
            None => {
                self.next_id += 1;
                let row = ReportEntry {
                    id: EntryId::Persisted(self.next_id),
                    ..entry.clone()
                };
                self.entries.push(row.clone());
                row
            }
        };
        Ok(stored)
    }

    fn persist_submission(&mut self, report_id: i64) -> AppResult<SubmissionReceipt> {
        self.submission_calls += 1;
        if self.fail_writes {
            return Err(Self::down());
        }
        let submitted_at = Local::now();
        if let Some(r) = self.report.as_mut().filter(|r| r.id == report_id) {
            r.status = ReportStatus::Pending;
            r.submitted_at = Some(submitted_at);
        }
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
    ) -> AppResult<chrono::DateTime<Local>> {
        self.review_calls += 1;
        if self.fail_writes {
            return Err(Self::down());
        }
        if let Some(r) = self.report.as_mut().filter(|r| r.id == report_id) {
            r.status = decision.target_status();
            r.remarks = remarks.map(str::to_string);
        }
        Ok(Local::now())
    }
}
