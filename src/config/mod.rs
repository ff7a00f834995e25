//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ChatbotConfig, ConfigFile, ConfigManager, DEFAULT_BIND, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_STYLESHEET, DEFAULT_TEMPERATURE, DEFAULT_TOKEN_ENV, MAX_TEMPERATURE, MIN_TEMPERATURE,
    ResolveOptions, ResolvedConfig, resolve_config, validate_temperature,
};
