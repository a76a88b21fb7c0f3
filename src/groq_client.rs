use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::{AppError, AppResult};
use crate::services::ScriptWriter;
use crate::upstream;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

/// OpenAI-compatible chat completions client pointed at Groq.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

pub fn ad_script_prompt(product: &str) -> String {
    format!("Write a short UGC ad script for {}", product)
}

/// Pull the first choice's message text out of a completion payload.
pub fn extract_script(payload: Value) -> AppResult<String> {
    let completion: ChatCompletionResponse = serde_json::from_value(payload)
        .map_err(|e| AppError::UpstreamShape(format!("unreadable chat completion: {}", e)))?;

    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| AppError::UpstreamShape("chat completion contained no choices".to_string()))
}

impl GroqClient {
    pub fn new(config: &ProviderConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub async fn complete(&self, messages: Vec<ChatMessage>) -> AppResult<Value> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };

        tracing::debug!("Groq request: model {}, {} messages", request.model, request.messages.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(Duration::from_secs(60))
            .json(&request)
            .send()
            .await?;

        upstream::json_body("Groq", response).await
    }
}

#[async_trait]
impl ScriptWriter for GroqClient {
    async fn write_script(&self, product: &str) -> AppResult<String> {
        let messages = vec![ChatMessage {
            role: "user".to_string(),
            content: ad_script_prompt(product),
        }];

        let payload = self.complete(messages).await?;
        extract_script(payload)
    }
}
