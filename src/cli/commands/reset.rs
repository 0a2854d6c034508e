use crate::cli::commands::{audit, open_registry};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { target } = cmd {
        let mut registry = open_registry(cfg)?;
        registry.reset(target)?;

        let sw = registry.get(target)?;
        audit(&registry, "reset", &sw.id, &format!("'{}' reset", sw.name));
        success(format!("'{}' reset to 00:00:00", sw.name));
    }

    Ok(())
}
