use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Named schema steps, applied once each and recorded in the `log` table.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250110_0001_create_storage",
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL
        );
        "#,
        "Created key-value storage table",
    ),
    (
        "20250124_0002_storage_updated_at",
        "ALTER TABLE storage ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        "Added updated_at to storage table",
    ),
];

/// Ensure that the `log` table exists.
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
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, sql: &str, description: &str) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", version, description));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, sql, description) in MIGRATIONS {
        if !is_applied(conn, version)? {
            apply(conn, version, sql, description)?;
        }
    }

    Ok(())
}
