//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! config file lives in the same place on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for chatbot.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/chatbot` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/chatbot` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("chatbot"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("chatbot"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/chatbot"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/custom/config/chatbot"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_ignores_empty_xdg() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/chatbot"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }
}
