// src/handlers/voice.rs
use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::SpeechRequest;
use crate::AppState;

pub fn voice_routes() -> Router {
    Router::new().route("/api/voice", post(synthesize_voice))
}

/// POST /api/voice - Text to speech, returned as one buffered MP3
async fn synthesize_voice(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<SpeechRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload?;
    tracing::info!(chars = request.text.chars().count(), "synthesizing voiceover");

    let audio = state
        .speech
        .synthesize(&request.text, request.voice_id.as_deref())
        .await?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio))
}
