use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &mut DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path.display(), RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let reports = count_rows(&pool.conn, "reports")?;
    let entries = count_rows(&pool.conn, "report_entries")?;
    let students = count_rows(&pool.conn, "students")?;

    println!("{}• Reports:{} {}{}{}", CYAN, RESET, GREEN, reports, RESET);
    println!("{}• Stored entries:{} {}{}{}", CYAN, RESET, GREEN, entries, RESET);
    println!("{}• Students:{} {}{}{}", CYAN, RESET, GREEN, students, RESET);

    //
    // 3) REPORTS BY STATUS
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT status, COUNT(*) FROM reports GROUP BY status ORDER BY status")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for r in rows {
        let (status, n) = r?;
        println!("    {:<14} {}", status, n);
    }

    //
    // 4) PERIOD COVERED
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(start_date) FROM reports", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(end_date) FROM reports", [], |row| row.get(0))
        .optional()?
        .flatten();

    println!("{}• Period covered:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| format!("{GREY}--{RESET}")));
    println!("    to:   {}", last.unwrap_or_else(|| format!("{GREY}--{RESET}")));

    println!();
    Ok(())
}
