use anyhow::Result;

use super::load_config;
use crate::chat::{ChatSession, SessionConfig};
use crate::cli::CompletionArgs;
use crate::completion::CompletionClient;
use crate::session::Settings;

pub async fn run_chat(completion: &CompletionArgs) -> Result<()> {
    let config = load_config(completion, None, None)?;
    let token = config.require_token()?.to_string();

    let client = CompletionClient::new(config.endpoint.clone(), token);
    let session_config = SessionConfig {
        endpoint: config.endpoint,
        models: config.models,
        settings: Settings {
            model: config.model,
            temperature: config.temperature,
        },
    };

    ChatSession::new(session_config, client).run().await
}
