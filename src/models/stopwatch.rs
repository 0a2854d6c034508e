/// Label used when a stopwatch name is blank.
pub const UNTITLED: &str = "Untitled";

/// One stopwatch's runtime state.
///
/// `last_start` holds the monotonic timestamp (ms) of the last start and is
/// `Some` exactly while the stopwatch is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwatch {
    pub id: String,
    pub name: String,
    time_ms: u64,
    last_start: Option<u64>,
}

/// Trim a user-supplied name, falling back to `Untitled` when blank.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

impl Stopwatch {
    /// New paused stopwatch holding `time_ms` of accumulated time.
    pub fn new(id: impl Into<String>, name: impl Into<String>, time_ms: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time_ms,
            last_start: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.last_start.is_some()
    }

    /// Accumulated time excluding the live delta.
    pub fn baseline_ms(&self) -> u64 {
        self.time_ms
    }

    pub fn last_start(&self) -> Option<u64> {
        self.last_start
    }

    pub fn elapsed(&self, now: u64) -> u64 {
        match self.last_start {
            Some(start) => self.time_ms.saturating_add(now.saturating_sub(start)),
            None => self.time_ms,
        }
    }

    /// Returns `false` when already running.
    pub fn start(&mut self, now: u64) -> bool {
        if self.is_running() {
            return false;
        }
        self.last_start = Some(now);
        true
    }

    /// Folds the live delta into the baseline. Returns `false` when already paused.
    pub fn pause(&mut self, now: u64) -> bool {
        if !self.is_running() {
            return false;
        }
        self.time_ms = self.elapsed(now);
        self.last_start = None;
        true
    }

    /// Start when paused, pause when running. Returns the new running state.
    pub fn toggle(&mut self, now: u64) -> bool {
        if self.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
        self.is_running()
    }

    pub fn reset(&mut self, now: u64) {
        self.set_time(0, now);
    }

    /// Replace the accumulated time. A running stopwatch keeps running from `ms`.
    pub fn set_time(&mut self, ms: u64, now: u64) {
        self.time_ms = ms;
        if self.is_running() {
            self.last_start = Some(now);
        }
    }

    pub fn rename(&mut self, raw: &str) {
        self.name = normalize_name(raw);
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_running() { "Running" } else { "Paused" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_running() { "Pause" } else { "Start" }
    }
}
