//! Thin view layer: turns frames into terminal output.

use crate::core::redraw::{Frame, FrameLine, FrameSink};
use crate::utils::colors::{BOLD, RESET, color_for_status, paint};
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

fn status_cell(line: &FrameLine) -> String {
    paint(line.status, color_for_status(line.running))
}

/// Full table: position, id, name, elapsed time, status.
pub fn stopwatch_table(frame: &Frame) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 2),
        Column::new("ID", 8),
        Column::new("NAME", 12),
        Column::new("ELAPSED", 8),
        Column::new("STATUS", 7),
    ]);

    for line in &frame.lines {
        table.add_row(vec![
            line.position.to_string(),
            line.id.clone(),
            line.name.clone(),
            format!("{BOLD}{}{RESET}", line.display),
            status_cell(line),
        ]);
    }

    table.render()
}

/// One compact line per stopwatch, as shown during `watch`.
pub fn compact_line(line: &FrameLine) -> String {
    format!(
        "{:>2}. {}{}{}  {}  [{}]  {}",
        line.position,
        BOLD,
        line.display,
        RESET,
        status_cell(line),
        line.toggle_label,
        line.name
    )
}

/// Redraws frames in place on stdout.
#[derive(Debug, Default)]
pub struct TerminalSink {
    drawn: usize,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for TerminalSink {
    fn draw(&mut self, frame: &Frame) {
        let mut out = io::stdout().lock();
        if self.drawn > 0 {
            let _ = write!(out, "\x1b[{}A", self.drawn);
        }
        for line in &frame.lines {
            let _ = writeln!(out, "\x1b[2K{}", compact_line(line));
        }
        let _ = out.flush();
        self.drawn = frame.lines.len();
    }
}
