use crate::cli::parser::{Commands, ReportAction};
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::report_status::ReportStatus;
use crate::utils::date::parse_date_arg;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { action } = cmd {
        let mut pool = DbPool::open_migrated(cfg.database_path())?;

        match action {
            ReportAction::New {
                trainee,
                kind,
                start,
                end,
                title,
            } => {
                let start = parse_date_arg(start)?;
                let end = parse_date_arg(end)?;
                ReportLogic::create(&mut pool, *kind, trainee.trim(), title.as_deref(), start, end)?;
            }
            ReportAction::List { trainee, status } => {
                let status = status
                    .as_deref()
                    .map(|s| ReportStatus::from_db_str(s).ok_or_else(|| AppError::InvalidStatus(s.into())))
                    .transpose()?;
                ReportLogic::list(&mut pool, trainee.as_deref(), status, cfg.hour_policy())?;
            }
            ReportAction::Show { report_id } => {
                ReportLogic::show(&mut pool, *report_id, cfg.hour_policy(), cfg.show_weekday)?;
            }
        }
    }

    Ok(())
}
