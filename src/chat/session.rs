use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::completion::Completer;
use crate::config::validate_temperature;
use crate::session::{EMPTY_PROMPT_WARNING, Session, Settings, SubmitOutcome, submit};
use crate::ui::{Spinner, is_prompt_cancelled};

/// Configuration for a terminal chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The API endpoint URL (for display).
    pub endpoint: String,
    /// Models `/model` accepts.
    pub models: Vec<String>,
    /// Model and temperature in effect.
    pub settings: Settings,
}

/// An interactive chat session in the terminal.
///
/// Slash commands stand in for the web settings panel.
pub struct ChatSession<C> {
    config: SessionConfig,
    completer: C,
    session: Session,
}

impl<C: Completer> ChatSession<C> {
    pub const fn new(config: SessionConfig, completer: C) -> Self {
        Self {
            config,
            completer,
            session: Session::new(),
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn settings(&self) -> &Settings {
        &self.config.settings
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder("What's on your mind?")
                .with_help_message("Ask the assistant, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => {
                    if !self.handle_line(&line).await {
                        break;
                    }
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Handles one line of input. Returns `false` when the session should end.
    pub async fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line) {
            Input::Empty => {
                ui::print_warning(EMPTY_PROMPT_WARNING);
                true
            }
            Input::Command(cmd) => self.handle_command(cmd),
            Input::Text(text) => {
                self.ask(&text).await;
                true
            }
        }
    }

    async fn ask(&mut self, text: &str) {
        let spinner = Spinner::new("Thinking...");
        let outcome = submit(
            &mut self.session,
            &self.completer,
            &self.config.settings,
            text,
        )
        .await;
        spinner.stop();

        if outcome != SubmitOutcome::Empty
            && let Some(reply) = self.session.all().last()
        {
            ui::print_message(reply);
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Clear => {
                self.session.clear();
                ui::print_success("Chat cleared");
            }
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Model(value) => self.set_model(value.as_deref()),
            SlashCommand::Temperature(value) => self.set_temperature(value.as_deref()),
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    fn set_model(&mut self, value: Option<&str>) {
        let Some(model) = value else {
            ui::print_config(&self.config);
            return;
        };

        if !self.config.models.iter().any(|known| known == model) {
            ui::print_error(&format!(
                "Unknown model: {model}\nAvailable: {}",
                self.config.models.join(", ")
            ));
            return;
        }

        self.config.settings.model = model.to_string();
        ui::print_success(&format!("Model set to {model}"));
    }

    fn set_temperature(&mut self, value: Option<&str>) {
        let Some(raw) = value else {
            ui::print_error("Usage: /temperature <0.0-1.5>");
            return;
        };

        let parsed = raw
            .parse::<f32>()
            .map_err(anyhow::Error::from)
            .and_then(validate_temperature);

        match parsed {
            Ok(temperature) => {
                self.config.settings.temperature = temperature;
                ui::print_success(&format!("Temperature set to {temperature:.1}"));
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }
}
