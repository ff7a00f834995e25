//! Consistent styling utilities for terminal output.
//!
//! Provides color and formatting helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Style for labels/keys (e.g., "model", "temperature")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Style for primary values (e.g., model names)
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Style for slash commands (e.g., "/clear", "/help")
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Style for the role tag in front of a user turn
    pub fn user<T: Display>(text: T) -> String {
        format!("{}", text.blue().bold())
    }

    /// Style for the role tag in front of an assistant turn
    pub fn assistant<T: Display>(text: T) -> String {
        format!("{}", text.magenta().bold())
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }
}
