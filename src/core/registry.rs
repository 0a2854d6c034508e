use crate::core::clock::Clock;
use crate::core::persistence::{self, KeyValueStore};
use crate::errors::{AppError, AppResult};
use crate::models::snapshot::RestoredEntry;
use crate::models::stopwatch::{Stopwatch, normalize_name};
use crate::utils::time::parse_time_input;
use chrono::Utc;

/// Owns every stopwatch plus the clock and store they depend on.
///
/// Each mutating call saves the whole list afterwards. Saving is best-effort,
/// so none of these operations fail because of storage.
pub struct StopwatchRegistry<C: Clock, S: KeyValueStore> {
    stopwatches: Vec<Stopwatch>,
    clock: C,
    store: S,
    storage_key: String,
    name_prefix: String,
    next_seq: u64,
}

impl<C: Clock, S: KeyValueStore> StopwatchRegistry<C, S> {
    /// Empty registry. Nothing is read from or written to the store.
    pub fn new(clock: C, store: S, storage_key: &str, name_prefix: &str) -> Self {
        Self {
            stopwatches: Vec::new(),
            clock,
            store,
            storage_key: storage_key.to_string(),
            name_prefix: name_prefix.to_string(),
            next_seq: 0,
        }
    }

    /// Load the stored list. Restored stopwatches start paused.
    ///
    /// An empty or unreadable store gives a single fresh stopwatch; otherwise
    /// the restored list is saved once to normalise what is stored.
    pub fn restore(clock: C, store: S, storage_key: &str, name_prefix: &str) -> Self {
        let mut registry = Self::new(clock, store, storage_key, name_prefix);
        let entries = persistence::load_state(&registry.store, &registry.storage_key);

        if entries.is_empty() {
            registry.add(None, 0);
        } else {
            for entry in entries {
                registry.push_restored(entry);
            }
            registry.save();
        }
        registry
    }

    fn push_restored(&mut self, entry: RestoredEntry) {
        let id = match entry.id {
            Some(id) if self.position_of_id(&id).is_none() => id,
            _ => self.generate_id(),
        };
        let name = match entry.name {
            Some(name) => normalize_name(&name),
            None => self.default_name(),
        };
        self.stopwatches.push(Stopwatch::new(id, name, entry.time_ms));
    }

    fn default_name(&self) -> String {
        format!("{} {}", self.name_prefix, self.stopwatches.len() + 1)
    }

    fn generate_id(&mut self) -> String {
        loop {
            self.next_seq += 1;
            let id = format!("sw-{}-{}", Utc::now().timestamp_millis(), self.next_seq);
            if self.position_of_id(&id).is_none() {
                return id;
            }
        }
    }

    fn position_of_id(&self, id: &str) -> Option<usize> {
        self.stopwatches.iter().position(|sw| sw.id == id)
    }

    /// Resolve a selector: an exact id, or a 1-based position in list order.
    pub fn find(&self, selector: &str) -> AppResult<usize> {
        let selector = selector.trim();
        if let Some(idx) = self.position_of_id(selector) {
            return Ok(idx);
        }
        if let Ok(pos) = selector.parse::<usize>()
            && pos >= 1
            && pos <= self.stopwatches.len()
        {
            return Ok(pos - 1);
        }
        Err(AppError::StopwatchNotFound(selector.to_string()))
    }

    pub fn get(&self, selector: &str) -> AppResult<&Stopwatch> {
        let idx = self.find(selector)?;
        Ok(&self.stopwatches[idx])
    }

    pub fn stopwatches(&self) -> &[Stopwatch] {
        &self.stopwatches
    }

    pub fn len(&self) -> usize {
        self.stopwatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwatches.is_empty()
    }

    pub fn any_running(&self) -> bool {
        self.stopwatches.iter().any(Stopwatch::is_running)
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn elapsed(&self, selector: &str) -> AppResult<u64> {
        let now = self.now_ms();
        Ok(self.get(selector)?.elapsed(now))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a paused stopwatch. A blank or missing name gets `<prefix> N`.
    pub fn add(&mut self, name: Option<&str>, preset_ms: u64) -> &Stopwatch {
        let id = self.generate_id();
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => self.default_name(),
        };
        self.stopwatches.push(Stopwatch::new(id, name, preset_ms));
        self.save();
        let last = self.stopwatches.len() - 1;
        &self.stopwatches[last]
    }

    fn mutate<T>(
        &mut self,
        selector: &str,
        op: impl FnOnce(&mut Stopwatch, u64) -> T,
    ) -> AppResult<T> {
        let idx = self.find(selector)?;
        let now = self.now_ms();
        let out = op(&mut self.stopwatches[idx], now);
        self.save();
        Ok(out)
    }

    /// Returns `false` (and changes nothing) if it was already running.
    pub fn start(&mut self, selector: &str) -> AppResult<bool> {
        self.mutate(selector, |sw, now| sw.start(now))
    }

    /// Returns `false` (and changes nothing) if it was already paused.
    pub fn pause(&mut self, selector: &str) -> AppResult<bool> {
        self.mutate(selector, |sw, now| sw.pause(now))
    }

    /// Returns the new running state.
    pub fn toggle(&mut self, selector: &str) -> AppResult<bool> {
        self.mutate(selector, |sw, now| sw.toggle(now))
    }

    pub fn reset(&mut self, selector: &str) -> AppResult<()> {
        self.mutate(selector, |sw, now| sw.reset(now))
    }

    pub fn rename(&mut self, selector: &str, name: &str) -> AppResult<()> {
        self.mutate(selector, |sw, _| sw.rename(name))
    }

    /// Parse `text` and make it the new elapsed time.
    ///
    /// Invalid text returns `AppError::InvalidTime` and leaves the stopwatch
    /// untouched.
    pub fn apply_time(&mut self, selector: &str, text: &str) -> AppResult<u64> {
        let idx = self.find(selector)?;
        let ms = parse_time_input(text)?;
        let now = self.now_ms();
        self.stopwatches[idx].set_time(ms, now);
        self.save();
        Ok(ms)
    }

    /// Drop one stopwatch and return it.
    pub fn remove(&mut self, selector: &str) -> AppResult<Stopwatch> {
        let idx = self.find(selector)?;
        let removed = self.stopwatches.remove(idx);
        self.save();
        Ok(removed)
    }

    /// Write the current state. Returns `false` if the store rejected it.
    pub fn save(&self) -> bool {
        persistence::save_state(
            &self.store,
            &self.storage_key,
            &self.stopwatches,
            self.now_ms(),
        )
    }

    /// Host went to the background.
    pub fn on_hidden(&self) -> bool {
        self.save()
    }

    /// Host is shutting down.
    pub fn on_teardown(&self) -> bool {
        self.save()
    }
}
