pub mod clock;
pub mod log;
pub mod persistence;
pub mod redraw;
pub mod registry;
