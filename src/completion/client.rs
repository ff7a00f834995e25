use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::{SYSTEM_PROMPT, TOP_P};
use super::{Completer, CompletionRequest};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for a single OpenAI-compatible chat completion endpoint.
///
/// Uses the HTTP client's default timeouts and never retries.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl CompletionClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            token,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

impl Completer for CompletionClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
        let url = self.url();

        let body = ChatCompletionRequest {
            model: request.model,
            messages: [
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: request.temperature,
            top_p: TOP_P,
        };

        debug!(%url, model = request.model, temperature = request.temperature, "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        let Some(choice) = parsed.choices.into_iter().next() else {
            bail!("API response contained no choices");
        };

        choice
            .message
            .content
            .context("API response contained no message content")
    }
}
