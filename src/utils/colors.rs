/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Running → green, paused → grey.
pub fn color_for_status(running: bool) -> &'static str {
    if running { GREEN } else { GREY }
}

/// Wrap `value` in `color` … `RESET`.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
