use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use super::state::{AppState, parse_temperature};
use crate::completion::Completer;
use crate::render::{PageView, render_page};
use crate::session::{EMPTY_PROMPT_WARNING, SubmitOutcome, submit};

/// Fields posted by the chat form and the settings panel.
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
    pub temperature: Option<String>,
}

/// Builds the router for the single-page interface.
pub fn build<C>(state: Arc<AppState<C>>) -> Router
where
    C: Completer + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<C>))
        .route("/chat", post(chat::<C>))
        .route("/clear", post(clear::<C>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index<C>(State(state): State<Arc<AppState<C>>>) -> Html<String>
where
    C: Completer + Send + Sync + 'static,
{
    let mut interface = state.interface.lock().await;

    let mut warnings = Vec::new();
    warnings.extend(state.stylesheet.warning());
    warnings.extend(interface.notice.take());

    Html(render_page(&PageView {
        messages: interface.session.all(),
        models: &state.models,
        settings: &interface.settings,
        stylesheet: state.stylesheet.css(),
        warnings: &warnings,
    }))
}

async fn chat<C>(State(state): State<Arc<AppState<C>>>, Form(form): Form<ChatForm>) -> Redirect
where
    C: Completer + Send + Sync + 'static,
{
    // Runs detached so a dropped connection cannot leave a user turn unanswered.
    let submission = tokio::spawn(apply_submission(state, form));
    if let Err(e) = submission.await {
        error!(error = %e, "submission task failed");
    }

    Redirect::to("/")
}

async fn apply_submission<C>(state: Arc<AppState<C>>, form: ChatForm)
where
    C: Completer + Send + Sync + 'static,
{
    let mut interface = state.interface.lock().await;

    if let Some(model) = form.model.as_deref() {
        match state.known_model(model) {
            Some(known) => known.clone_into(&mut interface.settings.model),
            None => warn!(model, "ignoring unknown model from settings panel"),
        }
    }

    if let Some(temperature) = form.temperature.as_deref().and_then(parse_temperature) {
        interface.settings.temperature = temperature;
    }

    let settings = interface.settings.clone();
    let outcome = submit(
        &mut interface.session,
        &state.completer,
        &settings,
        &form.prompt,
    )
    .await;

    if outcome == SubmitOutcome::Empty {
        interface.notice = Some(EMPTY_PROMPT_WARNING.to_string());
    }
}

async fn clear<C>(State(state): State<Arc<AppState<C>>>) -> Redirect
where
    C: Completer + Send + Sync + 'static,
{
    let mut interface = state.interface.lock().await;
    let removed = interface.session.len();
    interface.session.clear();
    info!(removed, "chat cleared");
    Redirect::to("/")
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
