//! Schema migrations.
//!
//! Each step runs once, inside its own transaction, and is recorded in the
//! internal `log` table as `operation = 'migration_applied'` with the step
//! version as target.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_create_logs",
        description: "Created logs table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS logs (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                date        TEXT NOT NULL,
                roll_no     TEXT NOT NULL,
                name        TEXT NOT NULL DEFAULT '',
                batch       TEXT NOT NULL DEFAULT '',
                time        TEXT NOT NULL,
                status      TEXT NOT NULL,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20250110_0002_create_students",
        description: "Created students table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS students (
                roll_no     TEXT PRIMARY KEY,
                name        TEXT NOT NULL,
                batch       TEXT NOT NULL DEFAULT '',
                created_at  TEXT NOT NULL,
                updated_at  TEXT
            );
        "#,
    },
    Migration {
        version: "20250112_0003_logs_indexes",
        description: "Indexed logs by date and roll number",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_logs_date ON logs(date);
            CREATE INDEX IF NOT EXISTS idx_logs_roll_no ON logs(roll_no);
            CREATE INDEX IF NOT EXISTS idx_logs_created_at ON logs(created_at);
        "#,
    },
];

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
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

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the descriptions of the steps applied by this call, in order.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        tracing::debug!(version = m.version, "migration applied");
        applied.push(m.description);
    }

    Ok(applied)
}
