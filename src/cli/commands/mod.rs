use crate::config::Config;
use crate::core::clock::MonotonicClock;
use crate::core::registry::StopwatchRegistry;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod remove;
pub mod rename;
pub mod reset;
pub mod session;
pub mod set;

/// Registry used by every command: monotonic clock + SQLite storage.
pub type Registry = StopwatchRegistry<MonotonicClock, SqliteStore>;

/// Open the database and restore the stored stopwatches (all paused).
pub fn open_registry(cfg: &Config) -> AppResult<Registry> {
    let pool = DbPool::open_initialized(&cfg.database)?;
    Ok(StopwatchRegistry::restore(
        MonotonicClock::new(),
        SqliteStore::new(pool),
        &cfg.storage_key,
        &cfg.default_name_prefix,
    ))
}

/// Record an action in the internal log. Failures only warn.
pub fn audit(registry: &Registry, operation: &str, target: &str, message: &str) {
    ttlog_quiet(&registry.store().pool().conn, operation, target, message);
}
