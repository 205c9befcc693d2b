use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, dry_run } = cmd {
        let mut pool = DbPool::open_migrated(cfg.database_path())?;
        let report = ImportLogic::apply(&mut pool, Path::new(file), *dry_run)?;

        for row in &report.rejected {
            error(format!(
                "line {} ({}): {}",
                row.line,
                if row.student_id.is_empty() { "?" } else { row.student_id.as_str() },
                row.reasons.join("; ")
            ));
        }

        if *dry_run {
            info(format!(
                "Dry run: {} valid row(s), {} rejected.",
                report.valid.len(),
                report.rejected.len()
            ));
        } else if report.valid.is_empty() {
            warning("No students imported.");
        } else {
            success(format!(
                "Imported {} student(s), {} row(s) rejected.",
                report.valid.len(),
                report.rejected.len()
            ));
        }
    }
    Ok(())
}
