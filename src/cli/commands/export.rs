use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        report_id,
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::open_migrated(cfg.database_path())?;
        ExportLogic::export(&mut pool, *report_id, *format, file, *force, cfg.hour_policy())?;
    }
    Ok(())
}
