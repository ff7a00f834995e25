//! Chat mode UI components.

use crate::session::{Message, Role};
use crate::ui::Style;

use super::command::SLASH_COMMANDS;
use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Hope you have a good time",
        Style::header("chatbot"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Settings"));
    println!(
        "  {}         {}",
        Style::label("model"),
        Style::value(&config.settings.model)
    );
    println!(
        "  {}   {}",
        Style::label("temperature"),
        Style::value(format!("{:.1}", config.settings.temperature))
    );
    println!(
        "  {}      {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}        {}",
        Style::label("models"),
        Style::secondary(config.models.join(", "))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or(0);
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:<width$}")),
            Style::secondary(desc)
        );
    }
    println!();
}

/// Prints one transcript entry with a role tag.
pub fn print_message(message: &Message) {
    let tag = match message.role() {
        Role::User => Style::user("you"),
        Role::Assistant => Style::assistant("assistant"),
    };
    println!("{tag} {}", message.content());
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
}

pub fn print_warning(message: &str) {
    eprintln!("{}", Style::warning(message));
    eprintln!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
