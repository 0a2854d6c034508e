pub mod snapshot;
pub mod stopwatch;
