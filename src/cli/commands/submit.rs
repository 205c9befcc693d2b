use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { report_id, sign } = cmd {
        let mut pool = DbPool::open_migrated(cfg.database_path())?;
        let mut store = SqliteStore::new(&mut pool);
        SubmitLogic::apply(&mut store, *report_id, *sign, cfg.hour_policy())?;
    }
    Ok(())
}
