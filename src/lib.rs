//! # chatbot - AI Chat Bot
//!
//! `chatbot` forwards each prompt to an OpenAI-compatible chat completion
//! endpoint and shows the exchange, either as a single web page or as a
//! terminal REPL. The transcript lives in memory for one session only.
//!
//! ## Quick Start
//!
//! ```bash
//! export GITHUB_TOKEN="your-token"
//!
//! # Serve the chat page on http://127.0.0.1:8501
//! chatbot serve
//!
//! # Chat in the terminal
//! chatbot chat --temperature 0.7
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/chatbot/config.toml`; every key is optional:
//!
//! ```toml
//! [chatbot]
//! endpoint = "https://models.github.ai/inference"
//! model = "openai/gpt-4.1-mini"
//! models = ["openai/gpt-4.1-mini"]
//! temperature = 1.0
//! token_env = "GITHUB_TOKEN"
//! bind = "127.0.0.1:8501"
//! stylesheet = "styles.css"
//! ```

/// Interactive terminal chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Chat completion client for OpenAI-compatible APIs.
pub mod completion;

/// Configuration file management.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// HTML rendering of the transcript and page.
pub mod render;

/// In-memory transcript and the submit handler.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;

/// The single-page web interface.
pub mod web;
