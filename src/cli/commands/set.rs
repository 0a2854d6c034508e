use crate::cli::commands::{audit, open_registry};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_duration_ms;

/// Set the elapsed time of a stopwatch. Invalid input leaves it untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { target, time } = cmd {
        let mut registry = open_registry(cfg)?;
        let ms = registry.apply_time(target, time)?;

        let sw = registry.get(target)?;
        audit(
            &registry,
            "set",
            &sw.id,
            &format!("'{}' set to {}", sw.name, format_duration_ms(ms)),
        );
        success(format!("'{}' set to {}", sw.name, format_duration_ms(ms)));
    }

    Ok(())
}
