//! Subcommand implementations.

use anyhow::Result;

use crate::cli::CompletionArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Chat mode command handler.
pub mod chat;

/// Config command handler.
pub mod config;

/// Web interface command handler.
pub mod serve;

/// Loads the config file and merges CLI overrides into it.
pub(crate) fn load_config(
    completion: &CompletionArgs,
    bind: Option<String>,
    stylesheet: Option<std::path::PathBuf>,
) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let options = ResolveOptions {
        endpoint: completion.endpoint.clone(),
        model: completion.model.clone(),
        temperature: completion.temperature,
        bind,
        stylesheet,
    };

    resolve_config(&options, &file_config)
}
