use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_reports_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            kind                    TEXT NOT NULL CHECK(kind IN ('attendance','activity')),
            trainee                 TEXT NOT NULL,
            title                   TEXT,
            start_date              TEXT NOT NULL,
            end_date                TEXT NOT NULL,
            status                  TEXT NOT NULL DEFAULT 'not_submitted'
                                    CHECK(status IN ('not_submitted','pending','approved','rejected')),
            submitted_at            TEXT,
            supervisor_approved_at  TEXT,
            created_at              TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS report_entries (
            id                     INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id              INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
            entry_date             TEXT NOT NULL,
            time_in                TEXT,
            time_out               TEXT,
            total_hours            REAL DEFAULT 0,
            daily_accomplishments  TEXT,
            additional_notes       TEXT,
            status                 TEXT CHECK(status IS NULL OR status IN ('present','late','absent','holiday')),
            is_confirmed           INTEGER DEFAULT 0,
            updated_at             TEXT NOT NULL,
            UNIQUE(report_id, entry_date)
        );

        CREATE INDEX IF NOT EXISTS idx_reports_trainee ON reports(trainee, start_date);
        CREATE INDEX IF NOT EXISTS idx_entries_report_date ON report_entries(report_id, entry_date);
        "#,
    )
}

fn create_students_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            student_id  TEXT PRIMARY KEY,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE COLLATE NOCASE,
            section     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_students_section ON students(section);
        "#,
    )
}

fn add_report_remarks_column(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info('reports')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for c in cols {
        if c? == "remarks" {
            return Ok(());
        }
    }
    conn.execute("ALTER TABLE reports ADD COLUMN remarks TEXT;", [])?;
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

/// Ordered list: (version, description, step).
const MIGRATIONS: &[Migration] = &[
    (
        "20250901_0001_create_reports",
        "Created reports and report_entries tables",
        create_reports_tables,
    ),
    (
        "20250915_0002_create_students",
        "Created students table",
        create_students_table,
    ),
    (
        "20251002_0003_add_report_remarks",
        "Added reviewer remarks to reports",
        add_report_remarks_column,
    ),
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    let mut applied = 0;
    for (version, description, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, description],
        )?;

        success(format!("Migration applied: {} → {}", version, description));
        applied += 1;
    }

    Ok(applied)
}
