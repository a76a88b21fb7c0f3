// src/models/ad.rs
use serde::{Deserialize, Serialize};

/// Microsoft neural voice used by the talking-avatar provider when the
/// request does not name one.
pub const DEFAULT_TALK_VOICE: &str = "en-US-JennyNeural";

/// One video generation request, as sent by the studio to `/api/video`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRequest {
    pub script: String,
    /// Absolute URL the provider downloads the avatar still from.
    pub avatar_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}

impl AdRequest {
    pub fn new(script: impl Into<String>, avatar_image: impl Into<String>, voice_id: Option<String>) -> Self {
        Self {
            script: script.into(),
            avatar_image: avatar_image.into(),
            voice_id,
        }
    }

    /// The requested voice, falling back to the default for a missing or
    /// blank value.
    pub fn voice(&self) -> &str {
        match self.voice_id.as_deref() {
            Some(voice) if !voice.trim().is_empty() => voice,
            _ => DEFAULT_TALK_VOICE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScriptRequest {
    pub product: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScriptResponse {
    pub script: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub text: String,
    #[serde(default)]
    pub voice_id: Option<String>,
}
