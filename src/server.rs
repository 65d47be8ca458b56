//! Webhook HTTP surface: Telegram posts updates here

use axum::{body::Bytes, extract::State, http::StatusCode, routing::get, Router};
use std::sync::Arc;
use teloxide::types::Update;
use tracing::{error, warn};

use crate::bot::UpdateDispatcher;
use crate::errors::BotError;

/// Shared state of the webhook route
#[derive(Clone)]
pub struct AppState {
    /// `None` when no bot token is configured
    dispatcher: Option<Arc<UpdateDispatcher>>,
}

impl AppState {
    pub fn new(dispatcher: Option<Arc<UpdateDispatcher>>) -> Self {
        Self { dispatcher }
    }
}

/// Build the router serving the webhook at `path`
pub fn router(path: &str, state: AppState) -> Router {
    Router::new()
        .route(path, get(handle_get).post(handle_post))
        .with_state(state)
}

async fn handle_get(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.dispatcher.is_some() {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::OK, "OK (no bot token configured)")
    }
}

async fn handle_post(State(state): State<AppState>, body: Bytes) -> (StatusCode, &'static str) {
    let Some(dispatcher) = state.dispatcher else {
        error!(error = %BotError::MissingToken, "Rejecting update");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
    };

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            let e = BotError::from(e);
            warn!(error = %e, body_len = body.len(), "Error processing update");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error");
        }
    };

    match dispatcher.handle_update(update).await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            error!(error = ?e, "Error processing update");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error")
        }
    }
}
