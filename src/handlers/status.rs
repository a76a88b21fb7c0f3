use axum::{extract::Extension, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::services::PollBackoff;
use crate::AppState;

pub fn status_routes() -> Router {
    Router::new().route("/api/status", get(api_status))
}

fn configured(present: bool) -> &'static str {
    if present {
        "configured"
    } else {
        "not_configured"
    }
}

// API Status endpoint
async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let config = &state.config;
    let policy = state.video.policy();

    let backoff = match policy.backoff {
        PollBackoff::Fixed => "fixed",
        PollBackoff::Exponential { .. } => "exponential",
    };

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "script_generation": configured(config.groq.has_key()),
            "speech_synthesis": configured(config.elevenlabs.has_key()),
            "video_generation": configured(config.did.has_key()),
        },
        "render_polling": {
            "max_attempts": policy.max_attempts,
            "interval_ms": policy.interval.as_millis() as u64,
            "backoff": backoff,
            "budget_ms": policy.budget().as_millis() as u64,
        },
        "endpoints": {
            "studio": "/",
            "catalog": "/api/catalog",
            "script": "/api/script",
            "voice": "/api/voice",
            "video": "/api/video",
            "status": "/api/status"
        }
    }))
}
