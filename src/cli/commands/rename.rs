use crate::cli::commands::{audit, open_registry};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { target, name } = cmd {
        let mut registry = open_registry(cfg)?;
        let old = registry.get(target)?.name.clone();
        registry.rename(target, name)?;

        let sw = registry.get(target)?;
        audit(
            &registry,
            "rename",
            &sw.id,
            &format!("'{}' → '{}'", old, sw.name),
        );
        success(format!("Renamed '{}' to '{}'", old, sw.name));
    }

    Ok(())
}
