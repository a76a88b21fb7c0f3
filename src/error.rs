// src/error.rs
//! Error taxonomy shared by the provider clients, the render orchestrator and
//! the HTTP handlers.

use axum::{
    body::{Body, Bytes},
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

pub const TIMEOUT_MESSAGE: &str = "Timeout waiting for video";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected before any provider was contacted.
    #[error("{0}")]
    Validation(String),

    /// The provider answered with a non-success status. Status, content type
    /// and body are handed back to the caller untouched.
    #[error("provider responded with HTTP {status}")]
    UpstreamTransport {
        status: u16,
        content_type: Option<String>,
        body: Bytes,
    },

    /// Success status, but the payload is missing fields we need.
    #[error("unexpected provider response: {0}")]
    UpstreamShape(String),

    /// The provider itself marked the render job as failed.
    #[error("provider reported a failed render")]
    ProviderReported(Value),

    /// The poll budget ran out before the job reached a terminal status.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    #[error("{0}")]
    Unexpected(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamTransport { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::UpstreamShape(_)
            | AppError::ProviderReported(_)
            | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::UpstreamTransport {
                content_type, body, ..
            } => {
                tracing::warn!(
                    status = %status.as_u16(),
                    body = %String::from_utf8_lossy(&body),
                    "passing provider error through"
                );
                let mut builder = Response::builder().status(status);
                if let Some(content_type) = content_type {
                    builder = builder.header(header::CONTENT_TYPE, content_type);
                }
                builder
                    .body(Body::from(body))
                    .unwrap_or_else(|_| status.into_response())
            }
            AppError::ProviderReported(payload) => {
                tracing::error!(payload = %payload, "provider reported render failure");
                (status, Json(payload)).into_response()
            }
            AppError::Validation(message) => {
                tracing::warn!(error = %message, "request rejected");
                (status, Json(json!({ "error": message }))).into_response()
            }
            other => {
                let message = other.to_string();
                tracing::error!(status = %status.as_u16(), error = %message, "request failed");
                (status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
