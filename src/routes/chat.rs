use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn predict_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Malformed JSON, a missing `message` key, or a non-string value are all
    // rejected here with a 400. An empty string is a valid message.
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let provider = Arc::clone(&state.provider);
    let message = payload.message;

    // The provider contract is a synchronous call of unknown latency.
    let answer = tokio::task::spawn_blocking(move || provider.get_response(&message))
        .await
        .map_err(|e| AppError::Provider(e.into()))??;

    Ok(Json(ChatResponse { answer }))
}
