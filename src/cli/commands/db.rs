use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// Maintenance on the report database. Flags run in a fixed order:
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let db_path = cfg.database_path();
        let mut pool = DbPool::new(&db_path)?;

        if *migrate {
            match run_pending_migrations(&pool.conn)? {
                0 => info("Schema already up to date."),
                n => success(format!("{n} migration(s) applied.")),
            }
        }

        if *show_info {
            stats::print_db_info(&mut pool, &db_path)?;
        }

        if *check {
            let result: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if result == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {result}"));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            ttlog_quiet(&pool.conn, "vacuum", "database", "VACUUM completed");
            success("Database compacted.");
        }
    }

    Ok(())
}
