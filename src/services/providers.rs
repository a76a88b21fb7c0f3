// src/services/providers.rs
//! Seams between the HTTP layer and the third-party AI providers.

use async_trait::async_trait;
use axum::body::Bytes;
use serde_json::Value;

use crate::error::AppResult;
use crate::models::AdRequest;

/// Text generation: turns a product description into ad copy.
#[async_trait]
pub trait ScriptWriter: Send + Sync {
    async fn write_script(&self, product: &str) -> AppResult<String>;
}

/// Text to speech. The whole audio payload is buffered before returning.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> AppResult<Bytes>;
}

/// Talking-avatar render jobs. Both calls return the provider's raw job
/// payload.
#[async_trait]
pub trait TalkProvider: Send + Sync {
    async fn create_talk(&self, request: &AdRequest) -> AppResult<Value>;

    async fn get_talk(&self, talk_id: &str) -> AppResult<Value>;
}
