//! Bulk trainee import: CSV parsing, per-row validation, duplicate
//! detection inside the batch and against the database. Valid rows are
//! inserted, invalid ones are reported back with their line number.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_student, student_exists};
use crate::errors::{AppError, AppResult};
use crate::models::student::Student;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

/// One sheet row before validation; every column may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStudentRow {
    #[serde(default, alias = "student_no", alias = "id_number")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "batch")]
    pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line in the file (header is line 1).
    pub line: usize,
    pub student_id: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub valid: Vec<Student>,
    pub rejected: Vec<RowError>,
}

fn student_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{2,4}-?[0-9]{3,7}$").expect("valid student id pattern"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

fn clean(field: &Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Parse CSV text into `(line, row)` pairs. Blank lines are skipped.
pub fn read_rows<R: Read>(reader: R) -> AppResult<Vec<(usize, RawStudentRow)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let headers = csv::StringRecord::from(
        headers
            .iter()
            .map(|h| h.to_lowercase().replace(' ', "_"))
            .collect::<Vec<_>>(),
    );

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        let row: RawStudentRow = record.deserialize(Some(&headers))?;
        out.push((line, row));
    }
    Ok(out)
}

/// Validate a batch. A duplicate (same student id, or same email ignoring
/// case) of an earlier valid row is rejected; rejected rows claim nothing.
pub fn validate_rows(rows: &[(usize, RawStudentRow)]) -> ImportReport {
    let mut report = ImportReport::default();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_emails: HashSet<String> = HashSet::new();

    for (line, raw) in rows {
        let student = Student {
            student_id: clean(&raw.student_id),
            first_name: clean(&raw.first_name),
            last_name: clean(&raw.last_name),
            email: clean(&raw.email),
            section: clean(&raw.section),
        };

        let mut reasons = Vec::new();

        for (label, value) in [
            ("student_id", &student.student_id),
            ("first_name", &student.first_name),
            ("last_name", &student.last_name),
            ("email", &student.email),
            ("section", &student.section),
        ] {
            if value.is_empty() {
                reasons.push(format!("missing {label}"));
            }
        }

        if !student.student_id.is_empty() && !student_id_re().is_match(&student.student_id) {
            reasons.push(format!("invalid student id '{}'", student.student_id));
        }
        if !student.email.is_empty() && !email_re().is_match(&student.email) {
            reasons.push(format!("invalid email '{}'", student.email));
        }

        // only rows that are otherwise valid claim their id and email
        if reasons.is_empty() {
            if seen_ids.contains(&student.student_id) {
                reasons.push(format!("duplicate student id '{}' in file", student.student_id));
            }
            let email_key = student.email.to_lowercase();
            if seen_emails.contains(&email_key) {
                reasons.push(format!("duplicate email '{}' in file", student.email));
            }
            if reasons.is_empty() {
                seen_ids.insert(student.student_id.clone());
                seen_emails.insert(email_key);
            }
        }

        if reasons.is_empty() {
            report.valid.push(student);
        } else {
            report.rejected.push(RowError {
                line: *line,
                student_id: student.student_id,
                reasons,
            });
        }
    }

    report
}

pub struct ImportLogic;

impl ImportLogic {
    /// Read, validate, drop rows already registered, then insert the rest
    /// in a single transaction (skipped with `dry_run`).
    pub fn apply(pool: &mut DbPool, file: &Path, dry_run: bool) -> AppResult<ImportReport> {
        let handle = std::fs::File::open(file)
            .map_err(|e| AppError::Import(format!("{}: {e}", file.display())))?;
        let rows = read_rows(handle)?;
        let mut report = validate_rows(&rows);

        // rows already in the database
        let line_of = |id: &str| {
            rows.iter()
                .find(|(_, r)| clean(&r.student_id) == id)
                .map(|(l, _)| *l)
                .unwrap_or(0)
        };
        let mut fresh = Vec::with_capacity(report.valid.len());
        for s in report.valid.drain(..) {
            if student_exists(&pool.conn, &s.student_id, &s.email)? {
                report.rejected.push(RowError {
                    line: line_of(&s.student_id),
                    student_id: s.student_id.clone(),
                    reasons: vec!["already registered".to_string()],
                });
            } else {
                fresh.push(s);
            }
        }
        report.valid = fresh;
        report.rejected.sort_by_key(|r| r.line);

        if dry_run || report.valid.is_empty() {
            return Ok(report);
        }

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            for s in &report.valid {
                insert_student(&tx, s)?;
            }
            tx.commit()
        })?;

        ttlog_quiet(
            &pool.conn,
            "import",
            &file.display().to_string(),
            &format!(
                "{} student(s) imported, {} row(s) rejected",
                report.valid.len(),
                report.rejected.len()
            ),
        );

        Ok(report)
    }
}
