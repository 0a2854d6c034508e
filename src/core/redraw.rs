//! Frame-driven redraw loop.
//!
//! One shared flag says whether a frame is scheduled. It is set while at
//! least one stopwatch runs and dropped on the first frame where none does.
//! Frames are computed from absolute timestamps, so late or skipped frames
//! never drift.

use crate::core::clock::Clock;
use crate::core::persistence::KeyValueStore;
use crate::core::registry::StopwatchRegistry;
use crate::utils::time::format_duration_ms;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub elapsed_ms: u64,
    pub display: String,
    pub running: bool,
    pub status: &'static str,
    pub toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
}

/// Receives rendered frames.
pub trait FrameSink {
    fn draw(&mut self, frame: &Frame);
}

impl FrameSink for Vec<Frame> {
    fn draw(&mut self, frame: &Frame) {
        self.push(frame.clone());
    }
}

/// Build a frame for every stopwatch, sampling the clock once.
pub fn compose_frame<C: Clock, S: KeyValueStore>(registry: &StopwatchRegistry<C, S>) -> Frame {
    let now = registry.now_ms();
    let lines = registry
        .stopwatches()
        .iter()
        .enumerate()
        .map(|(i, sw)| {
            let elapsed = sw.elapsed(now);
            FrameLine {
                position: i + 1,
                id: sw.id.clone(),
                name: sw.name.clone(),
                elapsed_ms: elapsed,
                display: format_duration_ms(elapsed),
                running: sw.is_running(),
                status: sw.status_label(),
                toggle_label: sw.toggle_label(),
            }
        })
        .collect();

    Frame { lines }
}

#[derive(Debug, Default)]
pub struct RedrawLoop {
    scheduled: bool,
}

impl RedrawLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Re-evaluate the flag after a user action.
    pub fn update<C: Clock, S: KeyValueStore>(&mut self, registry: &StopwatchRegistry<C, S>) {
        self.scheduled = registry.any_running();
    }

    /// Run one frame if scheduled. Returns whether another frame is scheduled.
    pub fn tick<C: Clock, S: KeyValueStore>(
        &mut self,
        registry: &StopwatchRegistry<C, S>,
        sink: &mut dyn FrameSink,
    ) -> bool {
        if !self.scheduled {
            return false;
        }
        sink.draw(&compose_frame(registry));
        self.scheduled = registry.any_running();
        self.scheduled
    }
}
