use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::SessionRecord;
use crate::services;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<SessionRecord>,
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Callers without a session get a fresh identifier echoed back.
    let session_id = req
        .session_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let outcome = services::chat::process_message(&state, &session_id, &req.message)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, session = %session_id, "chat processing failed");
            AppError::Ai("assistant unavailable".to_string())
        })?;

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        session_id,
        memory: outcome.memory,
    }))
}
