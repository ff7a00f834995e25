//! `chatbot serve` - the single-page web interface.
//!
//! Startup order:
//! 1. Resolve configuration and require the API token.
//! 2. Load the optional stylesheet.
//! 3. Build the router and serve until Ctrl-C or SIGTERM.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use super::load_config;
use crate::cli::CompletionArgs;
use crate::completion::CompletionClient;
use crate::session::Settings;
use crate::web::{self, AppState, Stylesheet};

pub async fn run_serve(
    completion: &CompletionArgs,
    bind: Option<String>,
    stylesheet: Option<std::path::PathBuf>,
) -> Result<()> {
    let config = load_config(completion, bind, stylesheet)?;
    let token = config.require_token()?.to_string();

    let addr: SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind))?;

    let stylesheet = Stylesheet::load(&config.stylesheet);
    let client = CompletionClient::new(config.endpoint.clone(), token);

    let state = Arc::new(AppState::new(
        client,
        config.models,
        Settings {
            model: config.model,
            temperature: config.temperature,
        },
        stylesheet,
    ));

    let app = web::build(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        endpoint = %config.endpoint,
        "chat interface listening on http://{addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("chat interface stopped");
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("shutdown signal received");
}
