use crate::cli::commands::{audit, open_registry};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_duration_ms;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remove { target, yes } = cmd {
        let mut registry = open_registry(cfg)?;

        let sw = registry.get(target)?;
        let prompt = format!(
            "Remove '{}' ({})? This action is irreversible.",
            sw.name,
            format_duration_ms(sw.baseline_ms())
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = registry.remove(target)?;
        audit(
            &registry,
            "remove",
            &removed.id,
            &format!("Removed '{}'", removed.name),
        );
        success(format!("'{}' has been removed.", removed.name));
    }

    Ok(())
}
