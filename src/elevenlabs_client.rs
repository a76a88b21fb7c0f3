// Eleven Labs API Client
// Text-to-speech only; audio comes back fully buffered as MP3.

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::AppResult;
use crate::services::SpeechSynthesizer;
use crate::upstream;

pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";

#[derive(Clone)]
pub struct ElevenLabsClient {
    api_key: String,
    client: Client,
    base_url: String,
}

#[derive(Serialize, Debug)]
pub struct TextToSpeechRequest<'a> {
    pub text: &'a str,
    pub voice_settings: VoiceSettings,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

pub struct DefaultVoices;

impl DefaultVoices {
    pub const BELLA: &'static str = "EXAVITQu4vr4xnSDxMaL"; // Female, soft

}

impl ElevenLabsClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Generate speech from text using a specific voice
    pub async fn text_to_speech(&self, text: &str, voice_id: &str) -> AppResult<Bytes> {
        let url = format!("{}/text-to-speech/{}", self.base_url, urlencoding::encode(voice_id));

        let request_body = TextToSpeechRequest {
            text,
            voice_settings: VoiceSettings::default(),
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&request_body)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream::passthrough("ElevenLabs", response).await);
        }

        let audio = response.bytes().await?;
        tracing::debug!("Eleven Labs returned {} bytes of audio", audio.len());
        Ok(audio)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> AppResult<Bytes> {
        match voice_id.filter(|v| !v.trim().is_empty()) {
            Some(voice) => self.text_to_speech(text, voice).await,
            None => self.text_to_speech(text, DefaultVoices::BELLA).await,
        }
    }
}
