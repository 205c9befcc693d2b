use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::ReviewLogic;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::report::ReviewDecision;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Review {
        report_id,
        approve,
        reject: _,
        remarks,
    } = cmd
    {
        let decision = if *approve {
            ReviewDecision::Approve
        } else {
            ReviewDecision::Reject
        };

        let mut pool = DbPool::open_migrated(cfg.database_path())?;
        let mut store = SqliteStore::new(&mut pool);
        ReviewLogic::apply(
            &mut store,
            *report_id,
            decision,
            remarks.clone(),
            cfg.hour_policy(),
        )?;
    }
    Ok(())
}
