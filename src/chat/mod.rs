//! Interactive terminal chat mode.
//!
//! Provides a REPL-style interface with slash commands for the settings.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, SessionConfig};
