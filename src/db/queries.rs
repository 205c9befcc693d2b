use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryId, ReportEntry};
use crate::models::entry_status::EntryStatus;
use crate::models::report::Report;
use crate::models::report_kind::ReportKind;
use crate::models::report_status::ReportStatus;
use crate::models::student::Student;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_date_col(row: &Row, col: &str) -> Result<NaiveDate> {
    let s: String = row.get(col)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| conversion_error(0, AppError::InvalidDate(s)))
}

fn parse_time_col(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let s: Option<String> = row.get(col)?;
    match s {
        Some(s) if !s.is_empty() => NaiveTime::parse_from_str(&s, "%H:%M")
            .map(Some)
            .map_err(|_| conversion_error(0, AppError::InvalidTime(s))),
        _ => Ok(None),
    }
}

fn parse_ts_col(row: &Row, col: &str) -> Result<Option<DateTime<Local>>> {
    let s: Option<String> = row.get(col)?;
    match s {
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Local)))
            .map_err(|_| conversion_error(0, AppError::InvalidDate(s))),
        None => Ok(None),
    }
}

pub fn map_report(row: &Row) -> Result<Report> {
    let kind_str: String = row.get("kind")?;
    let kind = ReportKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidKind(kind_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = ReportStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidStatus(status_str.clone())))?;

    Ok(Report {
        id: row.get("id")?,
        kind,
        trainee: row.get("trainee")?,
        title: row.get("title")?,
        start_date: parse_date_col(row, "start_date")?,
        end_date: parse_date_col(row, "end_date")?,
        status,
        submitted_at: parse_ts_col(row, "submitted_at")?,
        supervisor_approved_at: parse_ts_col(row, "supervisor_approved_at")?,
        remarks: row.get("remarks")?,
        total_hours: 0.0,
    })
}

/// Row → entry. NULL hours / confirmation default to 0 / false.
pub fn map_entry(row: &Row) -> Result<ReportEntry> {
    let status = match row.get::<_, Option<String>>("status")? {
        Some(s) => Some(
            EntryStatus::from_db_str(&s)
                .ok_or_else(|| conversion_error(0, AppError::InvalidStatus(s.clone())))?,
        ),
        None => None,
    };

    Ok(ReportEntry {
        id: EntryId::Persisted(row.get("id")?),
        report_id: row.get("report_id")?,
        entry_date: parse_date_col(row, "entry_date")?,
        time_in: parse_time_col(row, "time_in")?,
        time_out: parse_time_col(row, "time_out")?,
        total_hours: row.get::<_, Option<f64>>("total_hours")?.unwrap_or(0.0),
        daily_accomplishments: row.get("daily_accomplishments")?,
        additional_notes: row.get("additional_notes")?,
        status,
        is_confirmed: row.get::<_, Option<i64>>("is_confirmed")?.unwrap_or(0) == 1,
    })
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub fn insert_report(
    conn: &Connection,
    kind: ReportKind,
    trainee: &str,
    title: Option<&str>,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<i64> {
    if start > end {
        return Err(AppError::InvalidRange { start, end });
    }

    conn.execute(
        "INSERT INTO reports (kind, trainee, title, start_date, end_date, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 'not_submitted', ?6)",
        params![
            kind.to_db_str(),
            trainee,
            title,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_report(conn: &Connection, report_id: i64) -> AppResult<Report> {
    let mut stmt = conn.prepare_cached("SELECT * FROM reports WHERE id = ?1")?;
    stmt.query_row([report_id], map_report)
        .optional()?
        .ok_or(AppError::ReportNotFound(report_id))
}

/// Report headers, newest period first, optionally filtered.
/// `total_hours` is left at 0: totals come from the entries.
pub fn list_reports(
    conn: &Connection,
    trainee: Option<&str>,
    status: Option<ReportStatus>,
) -> AppResult<Vec<Report>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM reports
         WHERE (?1 IS NULL OR trainee = ?1)
           AND (?2 IS NULL OR status = ?2)
         ORDER BY start_date DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![trainee, status.map(|s| s.to_db_str())], map_report)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn mark_submitted(conn: &Connection, report_id: i64, at: &DateTime<Local>) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE reports SET status = 'pending', submitted_at = ?2 WHERE id = ?1",
        params![report_id, at.to_rfc3339()],
    )?;
    if changed == 0 {
        return Err(AppError::ReportNotFound(report_id));
    }
    Ok(())
}

pub fn mark_reviewed(
    conn: &Connection,
    report_id: i64,
    status: ReportStatus,
    remarks: Option<&str>,
    approved_at: Option<&DateTime<Local>>,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE reports
         SET status = ?2, remarks = ?3, supervisor_approved_at = ?4
         WHERE id = ?1",
        params![
            report_id,
            status.to_db_str(),
            remarks,
            approved_at.map(|t| t.to_rfc3339()),
        ],
    )?;
    if changed == 0 {
        return Err(AppError::ReportNotFound(report_id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

pub fn load_entries(conn: &Connection, report_id: i64) -> AppResult<Vec<ReportEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM report_entries
         WHERE report_id = ?1
         ORDER BY entry_date ASC",
    )?;

    let rows = stmt.query_map([report_id], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert or update the row of `(report_id, entry_date)` and read it back.
pub fn upsert_entry(conn: &Connection, entry: &ReportEntry) -> AppResult<ReportEntry> {
    let date = entry.date_str();

    conn.execute(
        "INSERT INTO report_entries
            (report_id, entry_date, time_in, time_out, total_hours, daily_accomplishments,
             additional_notes, status, is_confirmed, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(report_id, entry_date) DO UPDATE SET
            time_in = excluded.time_in,
            time_out = excluded.time_out,
            total_hours = excluded.total_hours,
            daily_accomplishments = excluded.daily_accomplishments,
            additional_notes = excluded.additional_notes,
            status = excluded.status,
            is_confirmed = excluded.is_confirmed,
            updated_at = excluded.updated_at",
        params![
            entry.report_id,
            date,
            entry.time_in_str(),
            entry.time_out_str(),
            entry.total_hours,
            entry.daily_accomplishments,
            entry.additional_notes,
            entry.status.map(|s| s.to_db_str()),
            if entry.is_confirmed { 1 } else { 0 },
            Local::now().to_rfc3339(),
        ],
    )?;

    let mut stmt = conn.prepare_cached(
        "SELECT * FROM report_entries WHERE report_id = ?1 AND entry_date = ?2",
    )?;
    Ok(stmt.query_row(params![entry.report_id, date], map_entry)?)
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

pub fn student_exists(conn: &Connection, student_id: &str, email: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM students WHERE student_id = ?1 OR email = ?2 COLLATE NOCASE LIMIT 1",
    )?;
    Ok(stmt.exists(params![student_id, email])?)
}

pub fn insert_student(conn: &Connection, s: &Student) -> Result<()> {
    conn.execute(
        "INSERT INTO students (student_id, first_name, last_name, email, section, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            s.student_id,
            s.first_name,
            s.last_name,
            s.email,
            s.section,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}
