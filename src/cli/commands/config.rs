use anyhow::Result;

use super::load_config;
use crate::cli::CompletionArgs;
use crate::config::ConfigManager;
use crate::ui::Style;

/// Prints the configuration `serve` and `chat` would start with.
pub fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = load_config(&CompletionArgs::default(), None, None)?;

    let token_status = if config.token.is_some() {
        Style::success("set")
    } else {
        Style::warning("not set")
    };

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}         {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}       {}",
        Style::label("models"),
        Style::secondary(config.models.join(", "))
    );
    println!(
        "  {}  {}",
        Style::label("temperature"),
        Style::value(format!("{:.1}", config.temperature))
    );
    println!(
        "  {}        {} ({})",
        Style::label("token"),
        Style::value(&config.token_env),
        token_status
    );
    println!(
        "  {}         {}",
        Style::label("bind"),
        Style::value(&config.bind)
    );
    println!(
        "  {}   {}",
        Style::label("stylesheet"),
        Style::secondary(config.stylesheet.display())
    );

    Ok(())
}
