//! Audit log viewer (`ojtlog log --print`).

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create" | "approved" => Colour::Green,
        "draft" => Colour::Yellow,
        "confirm" => Colour::Cyan,
        "submit" => Colour::Blue,
        "rejected" => Colour::Red,
        "import" | "init" | "vacuum" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

struct LogRow {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt
            .query_map([], |row| {
                let raw_date: String = row.get(1)?;
                // migrations stamp with SQLite's datetime(), everything else RFC 3339
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or(raw_date);

                Ok(LogRow {
                    id: row.get(0)?,
                    date,
                    operation: row.get(2)?,
                    target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    message: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            info("Audit log is empty.");
            return Ok(());
        }

        header("Audit log");

        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("WHEN", 19),
            Column::new("OPERATION", 17),
            Column::new("TARGET", 28),
            Column::new("MESSAGE", 50),
        ]);

        for r in rows {
            table.add_row(vec![
                r.id.to_string(),
                r.date,
                color_for_operation(&r.operation)
                    .paint(r.operation.as_str())
                    .to_string(),
                truncate(&r.target, 28),
                r.message,
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
