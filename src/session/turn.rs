use tracing::{info, warn};

use super::message::Message;
use super::store::Session;
use crate::completion::{Completer, CompletionRequest};

/// Shown when the user submits an empty prompt.
pub const EMPTY_PROMPT_WARNING: &str = "Please enter a question.";

/// Model and temperature chosen in the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model: String,
    pub temperature: f32,
}

/// What a submission did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The prompt was empty; nothing was appended.
    Empty,
    /// A user turn and the completion text were appended.
    Answered,
    /// A user turn and an `Error: ...` assistant turn were appended.
    Failed,
}

/// Handles one form submission.
///
/// Appends the user turn, performs exactly one completion call and appends
/// exactly one assistant turn, so the transcript always alternates
/// user/assistant. Completion failures become the assistant's text.
pub async fn submit<C: Completer>(
    session: &mut Session,
    completer: &C,
    settings: &Settings,
    input: &str,
) -> SubmitOutcome {
    if input.is_empty() {
        return SubmitOutcome::Empty;
    }

    session.append(Message::user(input));

    let request = CompletionRequest {
        model: &settings.model,
        prompt: input,
        temperature: settings.temperature,
    };

    match completer.complete(request).await {
        Ok(text) => {
            info!(model = %settings.model, chars = text.len(), "completion received");
            session.append(Message::assistant(text));
            SubmitOutcome::Answered
        }
        Err(e) => {
            warn!(model = %settings.model, error = %format!("{e:#}"), "completion failed");
            session.append(Message::assistant(format!("Error: {e:#}")));
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::Role;
    use anyhow::{Result, anyhow};
    use std::sync::Mutex;

    struct Echo {
        calls: Mutex<Vec<(String, String, f32)>>,
    }

    impl Echo {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Completer for Echo {
        async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
            self.calls.lock().unwrap().push((
                request.model.to_string(),
                request.prompt.to_string(),
                request.temperature,
            ));
            Ok(format!("echo: {}", request.prompt))
        }
    }

    struct Failing;

    impl Completer for Failing {
        async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String> {
            Err(anyhow!("connection reset"))
        }
    }

    fn settings() -> Settings {
        Settings {
            model: "openai/gpt-4.1-mini".to_string(),
            temperature: 0.3,
        }
    }

    #[tokio::test]
    async fn test_submit_hello() {
        let mut session = Session::new();
        let echo = Echo::new();

        let outcome = submit(&mut session, &echo, &settings(), "Hello").await;

        assert_eq!(outcome, SubmitOutcome::Answered);
        assert_eq!(
            session.all(),
            &[Message::user("Hello"), Message::assistant("echo: Hello")]
        );

        let calls = echo.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "openai/gpt-4.1-mini");
        assert_eq!(calls[0].1, "Hello");
        assert!((calls[0].2 - 0.3).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_submit_failure_becomes_error_turn() {
        let mut session = Session::new();

        let outcome = submit(&mut session, &Failing, &settings(), "Hello").await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(
            session.all(),
            &[
                Message::user("Hello"),
                Message::assistant("Error: connection reset")
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_error_includes_context_chain() {
        struct Contextual;

        impl Completer for Contextual {
            async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String> {
                Err(anyhow!("timed out").context("Failed to connect"))
            }
        }

        let mut session = Session::new();
        submit(&mut session, &Contextual, &settings(), "Hi").await;

        assert_eq!(
            session.all()[1].content(),
            "Error: Failed to connect: timed out"
        );
    }

    #[tokio::test]
    async fn test_submit_n_prompts_yields_2n_messages() {
        let mut session = Session::new();
        let echo = Echo::new();

        for n in 1..=5 {
            submit(&mut session, &echo, &settings(), &format!("prompt {n}")).await;
            assert_eq!(session.len(), 2 * n);
        }

        for pair in session.all().chunks(2) {
            assert_eq!(pair[0].role(), Role::User);
            assert_eq!(pair[1].role(), Role::Assistant);
        }
    }

    #[tokio::test]
    async fn test_submit_empty_input_is_ignored() {
        let mut session = Session::new();
        let echo = Echo::new();

        let outcome = submit(&mut session, &echo, &settings(), "").await;

        assert_eq!(outcome, SubmitOutcome::Empty);
        assert!(session.is_empty());
        assert!(echo.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_whitespace_input_is_sent() {
        let mut session = Session::new();
        let echo = Echo::new();

        let outcome = submit(&mut session, &echo, &settings(), "   ").await;

        assert_eq!(outcome, SubmitOutcome::Answered);
        assert_eq!(
            session.all(),
            &[Message::user("   "), Message::assistant("echo:    ")]
        );
        assert_eq!(echo.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_keeps_input_verbatim() {
        let mut session = Session::new();

        submit(&mut session, &Echo::new(), &settings(), "  spaced  ").await;

        assert_eq!(session.all()[0].content(), "  spaced  ");
    }
}
