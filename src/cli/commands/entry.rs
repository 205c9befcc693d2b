use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::{EntryEdits, EntryLogic};
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry_status::EntryStatus;
use crate::utils::date::parse_date_arg;
use crate::utils::time::parse_optional_time;

/// Edit one day of a report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry {
        report_id,
        date,
        time_in,
        time_out,
        accomplishments,
        notes,
        status,
        absent,
        holiday,
        confirm,
    } = cmd
    {
        let d = parse_date_arg(date)?;

        // absent / holiday have their own flags
        let status = match status.as_deref() {
            Some(s) => match EntryStatus::parse(s)? {
                st @ (EntryStatus::Present | EntryStatus::Late) => Some(st),
                _ => {
                    return Err(AppError::InvalidStatus(format!(
                        "{s} (use --absent or --holiday)"
                    )));
                }
            },
            None => None,
        };

        let edits = EntryEdits {
            time_in: parse_optional_time(time_in.as_ref())?,
            time_out: parse_optional_time(time_out.as_ref())?,
            accomplishments: accomplishments.clone(),
            notes: notes.clone(),
            status,
            toggle_absent: *absent,
            toggle_holiday: *holiday,
        };

        let mut pool = DbPool::open_migrated(cfg.database_path())?;
        let mut store = SqliteStore::new(&mut pool);
        EntryLogic::apply(&mut store, *report_id, d, &edits, *confirm, cfg.hour_policy())?;
    }

    Ok(())
}
