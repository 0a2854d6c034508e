use crate::cli::commands::open_registry;
use crate::config::Config;
use crate::core::redraw::compose_frame;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::stopwatch_table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let registry = open_registry(cfg)?;
    header(format!("Stopwatches ({})", registry.len()));
    print!("{}", stopwatch_table(&compose_frame(&registry)));
    Ok(())
}
