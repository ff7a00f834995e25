//! Shared application state injected into every handler.

use tokio::sync::Mutex;

use super::stylesheet::Stylesheet;
use crate::config::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::session::{Session, Settings};

/// The mutable part of the interface: one session and its settings.
#[derive(Debug)]
pub struct Interface {
    pub session: Session,
    pub settings: Settings,
    /// One-shot warning shown on the next page render.
    pub notice: Option<String>,
}

/// State shared across all HTTP handlers.
///
/// There is one `Interface` per server process: every browser connected to
/// the same server sees and extends the same transcript.
///
/// The interface lives behind an async mutex that submissions hold for the
/// whole completion call, so at most one request is outstanding.
pub struct AppState<C> {
    pub completer: C,
    pub models: Vec<String>,
    pub stylesheet: Stylesheet,
    pub interface: Mutex<Interface>,
}

impl<C> AppState<C> {
    pub fn new(completer: C, models: Vec<String>, settings: Settings, stylesheet: Stylesheet) -> Self {
        Self {
            completer,
            models,
            stylesheet,
            interface: Mutex::new(Interface {
                session: Session::new(),
                settings,
                notice: None,
            }),
        }
    }

    /// Returns `model` if the settings panel offers it.
    pub fn known_model(&self, model: &str) -> Option<&str> {
        self.models
            .iter()
            .find(|known| known.as_str() == model)
            .map(String::as_str)
    }
}

/// Parses a slider value, snapping it to the panel's range and 0.1 step.
pub fn parse_temperature(raw: &str) -> Option<f32> {
    let value: f32 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let snapped = (value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE) * 10.0).round() / 10.0;
    Some(snapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_snaps_to_step() {
        assert_eq!(parse_temperature("0.7"), Some(0.7));
        assert_eq!(parse_temperature("0.74"), Some(0.7));
        assert_eq!(parse_temperature(" 1 "), Some(1.0));
    }

    #[test]
    fn test_parse_temperature_clamps_range() {
        assert_eq!(parse_temperature("-3"), Some(0.0));
        assert_eq!(parse_temperature("9.9"), Some(1.5));
    }

    #[test]
    fn test_parse_temperature_rejects_garbage() {
        assert_eq!(parse_temperature("warm"), None);
        assert_eq!(parse_temperature("NaN"), None);
        assert_eq!(parse_temperature(""), None);
    }

    #[test]
    fn test_known_model() {
        let state = AppState::new(
            (),
            vec!["openai/gpt-4.1-mini".to_string()],
            Settings {
                model: "openai/gpt-4.1-mini".to_string(),
                temperature: 1.0,
            },
            Stylesheet::Loaded(String::new()),
        );

        assert_eq!(
            state.known_model("openai/gpt-4.1-mini"),
            Some("openai/gpt-4.1-mini")
        );
        assert_eq!(state.known_model("other"), None);
    }
}
