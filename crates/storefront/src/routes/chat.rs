//! Chat route handler.
//!
//! The widget keeps the transcript client-side and sends it whole on every
//! turn; the server holds no chat state. The reply is always well-formed -
//! the waiter client substitutes a fallback line on any failure.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::services::ChatMessage;
use crate::state::AppState;

/// Chat request body: prior transcript plus the new message.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub message: String,
}

/// Chat response body.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// One stateless round trip with the waiter.
#[instrument(skip(state, request))]
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state.waiter().send(&request.history, &request.message).await;
    Json(ChatResponse { reply })
}
