//! Completion client for OpenAI-compatible chat completion APIs.

mod client;
mod prompt;

use anyhow::Result;
use std::future::Future;

pub use client::CompletionClient;
pub use prompt::{SYSTEM_PROMPT, TOP_P};

/// Parameters of a single completion call.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
}

/// Produces assistant text for a single user prompt.
///
/// Implemented by [`CompletionClient`] for the real endpoint; tests supply
/// their own implementations so no network access is needed.
pub trait Completer {
    fn complete(
        &self,
        request: CompletionRequest<'_>,
    ) -> impl Future<Output = Result<String>> + Send;
}
