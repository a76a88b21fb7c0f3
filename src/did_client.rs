// D-ID talks API client
// Renders a still avatar image lip-synced to a text script.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::AppResult;
use crate::models::AdRequest;
use crate::services::TalkProvider;
use crate::upstream;

pub const DID_BASE_URL: &str = "https://api.d-id.com";

#[derive(Debug, Clone)]
pub struct DIdClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize, Debug)]
pub struct CreateTalkRequest<'a> {
    pub source_url: &'a str,
    pub script: TalkScript<'a>,
}

#[derive(Serialize, Debug)]
pub struct TalkScript<'a> {
    #[serde(rename = "type")]
    pub script_type: &'static str,
    pub input: &'a str,
    pub provider: TalkVoice<'a>,
}

#[derive(Serialize, Debug)]
pub struct TalkVoice<'a> {
    #[serde(rename = "type")]
    pub provider_type: &'static str,
    pub voice_id: &'a str,
}

impl<'a> CreateTalkRequest<'a> {
    pub fn from_ad(request: &'a AdRequest) -> Self {
        Self {
            source_url: &request.avatar_image,
            script: TalkScript {
                script_type: "text",
                input: &request.script,
                provider: TalkVoice {
                    provider_type: "microsoft",
                    voice_id: request.voice(),
                },
            },
        }
    }
}

impl DIdClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn authorization(&self) -> String {
        format!("Basic {}", self.api_key)
    }
}

#[async_trait]
impl TalkProvider for DIdClient {
    async fn create_talk(&self, request: &AdRequest) -> AppResult<Value> {
        let body = CreateTalkRequest::from_ad(request);

        let response = self
            .client
            .post(format!("{}/talks", self.base_url))
            .header("Authorization", self.authorization())
            .json(&body)
            .timeout(Duration::from_secs(60))
            .send()
            .await?;

        upstream::json_body("D-ID", response).await
    }

    async fn get_talk(&self, talk_id: &str) -> AppResult<Value> {
        let response = self
            .client
            .get(format!("{}/talks/{}", self.base_url, urlencoding::encode(talk_id)))
            .header("Authorization", self.authorization())
            .timeout(Duration::from_secs(30))
            .send()
            .await?;

        upstream::json_body("D-ID", response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_wraps_script_in_text_envelope() {
        let ad = AdRequest::new(
            "Meet the bottle that keeps ice for 24 hours.",
            "https://ai-ugcvideo.vercel.app/avatars/female/female1.png",
            Some("en-US-AriaNeural".to_string()),
        );

        let body = serde_json::to_value(CreateTalkRequest::from_ad(&ad)).unwrap();

        assert_eq!(
            body,
            json!({
                "source_url": "https://ai-ugcvideo.vercel.app/avatars/female/female1.png",
                "script": {
                    "type": "text",
                    "input": "Meet the bottle that keeps ice for 24 hours.",
                    "provider": { "type": "microsoft", "voice_id": "en-US-AriaNeural" }
                }
            })
        );
    }

    #[test]
    fn test_create_body_uses_default_voice() {
        let ad = AdRequest::new("hello", "https://cdn.example/a.png", None);
        let body = serde_json::to_value(CreateTalkRequest::from_ad(&ad)).unwrap();
        assert_eq!(body["script"]["provider"]["voice_id"], "en-US-JennyNeural");
    }
}
