//! `storage` table as a durable key-value store.

use crate::core::persistence::KeyValueStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let value = self.pool.with_conn(|conn| {
            conn.query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
        })?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO storage (key, value, updated_at)
                 VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value],
            )
        })?;
        Ok(())
    }
}
