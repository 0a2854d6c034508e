//! Time utilities: formatting elapsed milliseconds as HH:MM:SS and parsing
//! free-text time entries (`90`, `2:03`, `1:02:03`).

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// Message shown next to a rejected time entry.
pub const TIME_FORMAT_HINT: &str = "Use formats like 90, 2:03, or 1:02:03.";

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?::\d+){0,2}$").expect("valid time pattern"));

fn pad(value: u64) -> String {
    format!("{:02}", value)
}

/// Render milliseconds as zero-padded `HH:MM:SS`.
///
/// Negative, NaN and infinite input render as `00:00:00`; fractions are
/// floored. Hours are not wrapped, so more than 99 hours just widens the field.
pub fn format_ms(ms: f64) -> String {
    let safe = if ms.is_finite() && ms > 0.0 {
        ms.floor() as u64
    } else {
        0
    };
    format_duration_ms(safe)
}

pub fn format_duration_ms(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!("{}:{}:{}", pad(hours), pad(minutes), pad(seconds))
}

/// Parse `SS`, `MM:SS` or `HH:MM:SS` into milliseconds.
///
/// Groups are not range-checked (`2:75` is 195 seconds). Returns `None`
/// for blank input, anything outside the pattern, or values that overflow.
pub fn parse_time_string(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !TIME_PATTERN.is_match(trimmed) {
        return None;
    }

    let mut chunks = Vec::with_capacity(3);
    for part in trimmed.split(':') {
        chunks.push(part.parse::<u64>().ok()?);
    }

    let (hours, minutes, seconds) = match chunks.as_slice() {
        [s] => (0, 0, *s),
        [m, s] => (0, *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?
        .checked_mul(1000)
}

/// Same as [`parse_time_string`] but reports failure as `AppError::InvalidTime`.
pub fn parse_time_input(raw: &str) -> AppResult<u64> {
    parse_time_string(raw).ok_or_else(|| AppError::InvalidTime(raw.trim().to_string()))
}
