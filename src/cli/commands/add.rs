use crate::cli::commands::{audit, open_registry};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_duration_ms, parse_time_input};

/// Add a new paused stopwatch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, time } = cmd {
        // validate before touching storage
        let preset = match time {
            Some(t) => parse_time_input(t)?,
            None => 0,
        };

        let mut registry = open_registry(cfg)?;
        let sw = registry.add(name.as_deref(), preset).clone();
        let position = registry.len();

        audit(
            &registry,
            "add",
            &sw.id,
            &format!("Added '{}' at {}", sw.name, format_duration_ms(preset)),
        );

        success(format!(
            "#{} '{}' added ({}) [{}]",
            position,
            sw.name,
            format_duration_ms(preset),
            sw.id
        ));
    }

    Ok(())
}
