use crate::core::calculator::hours::HourPolicy;
use crate::core::session::ReportSession;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_report, list_reports};
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::report::Report;
use crate::models::report_kind::ReportKind;
use crate::models::report_status::ReportStatus;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, colorize_optional};
use crate::utils::date::weekday_label;
use crate::utils::formatting::{colorize_report_status, confirmed_mark, describe_status, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hours, hours2readable};
use chrono::NaiveDate;

pub struct ReportLogic;

impl ReportLogic {
    pub fn create(
        pool: &mut DbPool,
        kind: ReportKind,
        trainee: &str,
        title: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<i64> {
        let id = insert_report(&pool.conn, kind, trainee, title, start, end)?;

        ttlog_quiet(
            &pool.conn,
            "create",
            &format!("report #{id}"),
            &format!("{} report for {} ({} → {})", kind.to_db_str(), trainee, start, end),
        );

        success(format!(
            "Created {} report #{} for {} ({} → {}).",
            kind.to_db_str(),
            id,
            trainee,
            start,
            end
        ));
        Ok(id)
    }

    /// Matching reports with their totals recomputed from the entry times
    /// under `policy`, the same way `show` and `export` compute them.
    pub fn with_totals(
        pool: &mut DbPool,
        trainee: Option<&str>,
        status: Option<ReportStatus>,
        policy: HourPolicy,
    ) -> AppResult<Vec<Report>> {
        let headers = list_reports(&pool.conn, trainee, status)?;

        let mut store = SqliteStore::new(pool);
        let mut out = Vec::with_capacity(headers.len());
        for r in headers {
            let session = ReportSession::load(&mut store, r.id, policy)?;
            out.push(session.report().clone());
        }
        Ok(out)
    }

    pub fn list(
        pool: &mut DbPool,
        trainee: Option<&str>,
        status: Option<ReportStatus>,
        policy: HourPolicy,
    ) -> AppResult<()> {
        let reports = Self::with_totals(pool, trainee, status, policy)?;

        if reports.is_empty() {
            info("No reports found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("KIND", 10),
            Column::new("TRAINEE", 14),
            Column::new("PERIOD", 25),
            Column::new("DAYS", 4),
            Column::new("STATUS", 14),
            Column::new("HOURS", 8),
            Column::new("TITLE", 24),
        ]);

        for r in &reports {
            table.add_row(vec![
                r.id.to_string(),
                r.kind.to_db_str().to_string(),
                r.trainee.clone(),
                r.period_label(),
                r.day_count().to_string(),
                colorize_report_status(r.status),
                format_hours(r.total_hours),
                truncate(r.title.as_deref().unwrap_or(""), 24),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }

    /// Print every day of the report, blank days included.
    pub fn show(
        pool: &mut DbPool,
        report_id: i64,
        policy: HourPolicy,
        show_weekday: bool,
    ) -> AppResult<()> {
        let mut store = SqliteStore::new(pool);
        let session = ReportSession::load(&mut store, report_id, policy)?;
        let report = session.report();

        header(format!(
            "Report #{} · {} · {} · {}",
            report.id,
            report.kind.to_db_str(),
            report.trainee,
            report.period_label()
        ));
        println!("Status:    {}", colorize_report_status(report.status));
        if let Some(t) = &report.title {
            println!("Title:     {}", t);
        }
        if let Some(at) = report.submitted_at {
            println!("Submitted: {}", at.format("%Y-%m-%d %H:%M"));
        }
        if let Some(at) = report.supervisor_approved_at {
            println!("Approved:  {}", at.format("%Y-%m-%d %H:%M"));
        }
        if let Some(r) = &report.remarks {
            println!("Remarks:   {}", r);
        }
        println!();

        let mut columns = vec![Column::new("#", 3), Column::new("DATE", 10)];
        if show_weekday {
            columns.push(Column::new("DAY", 4));
        }
        columns.extend([
            Column::new("IN", 6),
            Column::new("OUT", 6),
            Column::new("HOURS", 6),
            Column::new("STATUS", 8),
            Column::new("OK", 3),
            Column::new("ACCOMPLISHMENTS", 40),
        ]);
        let mut table = Table::new(columns);

        for (idx, e) in session.entries().iter().enumerate() {
            let (status_label, status_color) = describe_status(e.status);

            let mut row = vec![(idx + 1).to_string(), e.date_str()];
            if show_weekday {
                row.push(weekday_label(e.entry_date));
            }
            row.extend([
                colorize_optional(&e.time_in_str().unwrap_or_else(|| "--:--".into())),
                colorize_optional(&e.time_out_str().unwrap_or_else(|| "--:--".into())),
                colorize_optional(&format_hours(e.total_hours)),
                format!("{status_color}{status_label}{RESET}"),
                confirmed_mark(e.is_confirmed),
                truncate(e.daily_accomplishments.as_deref().unwrap_or(""), 40),
            ]);
            table.add_row(row);
        }

        print!("{}", table.render());

        let confirmed = session.entries().iter().filter(|e| e.is_confirmed).count();
        println!(
            "\nTotal: {} ({} h) · confirmed {}/{}",
            hours2readable(report.total_hours),
            format_hours(report.total_hours),
            confirmed,
            session.entries().len()
        );
        Ok(())
    }
}
