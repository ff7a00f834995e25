use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::paths;

/// Default OpenAI-compatible inference endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://models.github.ai/inference";
/// Default model identifier offered in the settings panel.
pub const DEFAULT_MODEL: &str = "openai/gpt-4.1-mini";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 1.0;
/// Lowest temperature the settings panel accepts.
pub const MIN_TEMPERATURE: f32 = 0.0;
/// Highest temperature the settings panel accepts.
pub const MAX_TEMPERATURE: f32 = 1.5;
/// Environment variable holding the API token.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Default listen address for `chatbot serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
/// Default external stylesheet, relative to the working directory.
pub const DEFAULT_STYLESHEET: &str = "styles.css";

/// Settings in the `[chatbot]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Models offered in the settings panel.
    #[serde(default)]
    pub models: Vec<String>,
    /// Default sampling temperature.
    pub temperature: Option<f32>,
    /// Environment variable name containing the API token.
    pub token_env: Option<String>,
    /// Listen address for the web interface.
    pub bind: Option<String>,
    /// Path to an optional external stylesheet.
    pub stylesheet: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/chatbot/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chatbot: ChatbotConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model selected at startup.
    pub model: String,
    /// Models offered in the settings panel. Always contains `model`.
    pub models: Vec<String>,
    /// The temperature selected at startup.
    pub temperature: f32,
    /// Name of the environment variable the token is read from.
    pub token_env: String,
    /// The API token, if the environment variable is set.
    pub token: Option<String>,
    /// Listen address for the web interface.
    pub bind: String,
    /// Path to the optional external stylesheet.
    pub stylesheet: PathBuf,
}

impl ResolvedConfig {
    /// Returns the API token or an error telling the user how to set it.
    ///
    /// Called before any client is built, so a missing token never reaches the network.
    pub fn require_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) => Ok(token),
            None => {
                let env_var = &self.token_env;
                bail!(
                    "{env_var} not set\n\n\
                     Set the {env_var} environment variable and restart:\n  \
                     export {env_var}=\"your-token\"\n\n\
                     Or choose another variable with token_env in ~/.config/chatbot/config.toml"
                )
            }
        }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// API endpoint override.
    pub endpoint: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Temperature override.
    pub temperature: Option<f32>,
    /// Listen address override.
    pub bind: Option<String>,
    /// Stylesheet path override.
    pub stylesheet: Option<PathBuf>,
}

/// Checks that a temperature lies within the range the settings panel offers.
pub fn validate_temperature(temperature: f32) -> Result<f32> {
    if !temperature.is_finite() || !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        bail!(
            "Invalid temperature: {temperature}\n\n\
             Temperature must be between {MIN_TEMPERATURE:.1} and {MAX_TEMPERATURE:.1}"
        );
    }
    Ok(temperature)
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take precedence
/// over the built-in defaults. The token is looked up but not required here;
/// see [`ResolvedConfig::require_token`].
///
/// # Errors
///
/// Returns an error if the resolved temperature is out of range.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.chatbot;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .map_or_else(|| DEFAULT_ENDPOINT.to_string(), Clone::clone);

    let model = options
        .model
        .as_ref()
        .or(file.model.as_ref())
        .map_or_else(|| DEFAULT_MODEL.to_string(), Clone::clone);

    let mut models = if file.models.is_empty() {
        vec![DEFAULT_MODEL.to_string()]
    } else {
        file.models.clone()
    };

    if !models.contains(&model) {
        warn!(
            model = %model,
            configured = %models.join(", "),
            "model is not in the configured models list, proceeding anyway"
        );
        models.insert(0, model.clone());
    }

    let temperature = validate_temperature(
        options
            .temperature
            .or(file.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE),
    )?;

    let token_env = file
        .token_env
        .clone()
        .unwrap_or_else(|| DEFAULT_TOKEN_ENV.to_string());

    let token = std::env::var(&token_env)
        .ok()
        .filter(|value| !value.is_empty());

    let bind = options
        .bind
        .as_ref()
        .or(file.bind.as_ref())
        .map_or_else(|| DEFAULT_BIND.to_string(), Clone::clone);

    let stylesheet = options
        .stylesheet
        .as_ref()
        .or(file.stylesheet.as_ref())
        .map_or_else(|| PathBuf::from(DEFAULT_STYLESHEET), Clone::clone);

    Ok(ResolvedConfig {
        endpoint,
        model,
        models,
        temperature,
        token_env,
        token,
        bind,
        stylesheet,
    })
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/chatbot/config.toml`
    /// or `~/.config/chatbot/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager reading from an explicit path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
