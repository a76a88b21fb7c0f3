// src/handlers/video.rs
use axum::{
    extract::{rejection::JsonRejection, Extension},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::error::AppResult;
use crate::models::AdRequest;
use crate::AppState;

pub fn video_routes() -> Router {
    Router::new().route("/api/video", post(generate_video))
}

/// POST /api/video - Render a talking-avatar ad and wait for the result
///
/// Holds the request open while the render is polled. Responds with the
/// provider's final job payload, or the provider's error status, 500 for a
/// failed render, 504 when the poll budget runs out.
async fn generate_video(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<AdRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(request) = payload?;
    let started = Instant::now();

    let payload = state.video.render(&request).await?;

    tracing::info!(
        elapsed_ms = %started.elapsed().as_millis(),
        "video render returned"
    );
    Ok(Json(payload))
}
