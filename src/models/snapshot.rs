use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored form of a stopwatch: `{ "id": ..., "name": ..., "timeMs": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedStopwatch {
    pub id: String,
    pub name: String,
    pub time_ms: u64,
}

/// Leniently decoded stored entry.
///
/// Missing fields stay `None` so the registry can apply its own defaults
/// (fresh id, `Stopwatch N` name); a missing or unusable `timeMs` reads as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub time_ms: u64,
}

impl RestoredEntry {
    /// Decode one array element. Non-object values yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = obj
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let name = obj.get("name").and_then(Value::as_str).map(str::to_string);

        let time_ms = obj.get("timeMs").map(time_from_value).unwrap_or(0);

        Some(Self { id, name, time_ms })
    }
}

fn time_from_value(value: &Value) -> u64 {
    if let Some(n) = value.as_u64() {
        return n;
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.floor() as u64,
        _ => 0,
    }
}
