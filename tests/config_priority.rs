#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file
//! 3. Built-in defaults

use chatbot_cli::config::{
    ChatbotConfig, ConfigFile, DEFAULT_BIND, DEFAULT_ENDPOINT, DEFAULT_MODEL, ResolveOptions,
    resolve_config,
};
use std::path::PathBuf;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        chatbot: ChatbotConfig {
            endpoint: Some("http://file.local/v1".to_string()),
            model: Some("file-model".to_string()),
            models: vec!["file-model".to_string(), "cli-model".to_string()],
            temperature: Some(0.4),
            token_env: Some("CHATBOT_PRIORITY_TEST_TOKEN".to_string()),
            bind: Some("127.0.0.1:9100".to_string()),
            stylesheet: Some(PathBuf::from("file.css")),
        },
    }
}

#[test]
fn test_config_file_used_when_cli_not_specified() {
    let resolved = resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.endpoint, "http://file.local/v1");
    assert_eq!(resolved.model, "file-model");
    assert!((resolved.temperature - 0.4).abs() < f32::EPSILON);
    assert_eq!(resolved.bind, "127.0.0.1:9100");
    assert_eq!(resolved.stylesheet, PathBuf::from("file.css"));
    assert_eq!(resolved.token_env, "CHATBOT_PRIORITY_TEST_TOKEN");
}

#[test]
fn test_all_cli_options_override_config() {
    let options = ResolveOptions {
        endpoint: Some("http://cli.local/v1".to_string()),
        model: Some("cli-model".to_string()),
        temperature: Some(1.2),
        bind: Some("0.0.0.0:8080".to_string()),
        stylesheet: Some(PathBuf::from("cli.css")),
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local/v1");
    assert_eq!(resolved.model, "cli-model");
    assert!((resolved.temperature - 1.2).abs() < f32::EPSILON);
    assert_eq!(resolved.bind, "0.0.0.0:8080");
    assert_eq!(resolved.stylesheet, PathBuf::from("cli.css"));
    assert_eq!(
        resolved.models,
        vec!["file-model".to_string(), "cli-model".to_string()]
    );
}

#[test]
fn test_built_in_defaults_fill_gaps() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.model, DEFAULT_MODEL);
    assert_eq!(resolved.bind, DEFAULT_BIND);
}

#[test]
fn test_cli_temperature_zero_is_not_treated_as_missing() {
    let options = ResolveOptions {
        temperature: Some(0.0),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert!(resolved.temperature.abs() < f32::EPSILON);
}

#[test]
fn test_invalid_file_temperature_returns_error() {
    let mut config = make_config_with_defaults();
    config.chatbot.temperature = Some(-1.0);

    assert!(resolve_config(&ResolveOptions::default(), &config).is_err());
}
