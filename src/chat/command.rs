use inquire::autocompletion::{Autocomplete, Replacement};

/// `(command, description)` pairs offered by tab completion.
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/clear", "Clear the chat transcript"),
    ("/config", "Show current settings"),
    ("/help", "Show available commands"),
    ("/model", "Show or change the model"),
    ("/quit", "Exit chat mode"),
    ("/temperature", "Show or change the temperature (0.0-1.5)"),
];

/// Suggests slash commands once the line starts with `/`.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// A parsed `/command` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Clear,
    Config,
    Help,
    Quit,
    Model(Option<String>),
    Temperature(Option<String>),
    Unknown(String),
}

/// One line read from the prompt.
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    if input.is_empty() {
        return Input::Empty;
    }

    input.trim().strip_prefix('/').map_or_else(
        || Input::Text(input.to_string()),
        parse_slash_command,
    )
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let argument = parts.get(1).map(|s| (*s).to_string());

    match parts.first().copied() {
        Some("clear") => Input::Command(SlashCommand::Clear),
        Some("config") => Input::Command(SlashCommand::Config),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        Some("model") => Input::Command(SlashCommand::Model(argument)),
        Some("temperature" | "temp") => Input::Command(SlashCommand::Temperature(argument)),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
