// src/handlers/script.rs
use axum::{
    extract::{rejection::JsonRejection, Extension},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{ScriptRequest, ScriptResponse};
use crate::AppState;

pub fn script_routes() -> Router {
    Router::new().route("/api/script", post(generate_script))
}

/// POST /api/script - Write ad copy for a product
async fn generate_script(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<ScriptRequest>, JsonRejection>,
) -> AppResult<Json<ScriptResponse>> {
    let Json(request) = payload?;
    tracing::info!(product = %request.product, "generating ad script");

    let script = state.script_writer.write_script(&request.product).await?;

    Ok(Json(ScriptResponse { script }))
}
