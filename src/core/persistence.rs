//! Persistence adapter: stopwatches <-> JSON array in a key-value store.
//!
//! Writes are best-effort and reads never fail: anything unreadable yields an
//! empty list so the caller starts clean.

use crate::errors::AppResult;
use crate::models::snapshot::{PersistedStopwatch, RestoredEntry};
use crate::models::stopwatch::{Stopwatch, normalize_name};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Fixed namespaced key holding the stopwatch list.
pub const STORAGE_KEY: &str = "multi-stopwatches-v1";

/// Durable string key-value store, in the spirit of browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Snapshot every stopwatch at `now`. Running ones are frozen at their live value.
pub fn snapshot(stopwatches: &[Stopwatch], now: u64) -> Vec<PersistedStopwatch> {
    stopwatches
        .iter()
        .map(|sw| PersistedStopwatch {
            id: sw.id.clone(),
            name: normalize_name(&sw.name),
            time_ms: sw.elapsed(now),
        })
        .collect()
}

/// Serialize and write the list. Returns `false` if the write failed.
pub fn save_state<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    stopwatches: &[Stopwatch],
    now: u64,
) -> bool {
    let payload = snapshot(stopwatches, now);
    let Ok(json) = serde_json::to_string(&payload) else {
        return false;
    };
    store.set_item(key, &json).is_ok()
}

/// Read the list back. Missing key, read errors, bad JSON or a non-array
/// payload all give an empty vec. Non-object elements are skipped.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<RestoredEntry> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items.iter().filter_map(RestoredEntry::from_value).collect(),
        _ => Vec::new(),
    }
}
