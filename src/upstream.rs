// src/upstream.rs
//! Shared response handling for provider HTTP calls.

use axum::body::Bytes;
use reqwest::{header, Response};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Capture a non-success provider response so it can be replayed to the
/// caller unchanged.
pub async fn passthrough(provider: &str, response: Response) -> AppError {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(provider, status, error = %err, "could not read provider error body");
            Bytes::new()
        }
    };

    tracing::warn!(
        provider,
        status,
        body = %String::from_utf8_lossy(&body),
        "provider call failed"
    );

    AppError::UpstreamTransport {
        status,
        content_type,
        body,
    }
}

/// Read a provider response as JSON, passing non-success statuses through.
pub async fn json_body(provider: &str, response: Response) -> AppResult<Value> {
    if !response.status().is_success() {
        return Err(passthrough(provider, response).await);
    }

    let text = response.text().await?;
    tracing::debug!(provider, body = %text, "provider response");

    serde_json::from_str(&text)
        .map_err(|e| AppError::UpstreamShape(format!("{provider} returned malformed JSON: {e}")))
}
