// src/studio.rs
//! Client side of the ad studio: collects the user's script, avatar and
//! voice, gates submission, and keeps exactly one view on screen.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::catalog::avatar_url;
use crate::models::{AdRequest, VideoResult, DEFAULT_TALK_VOICE};

pub const MISSING_SCRIPT: &str = "Please enter a script for your UGC ad.";
pub const MISSING_AVATAR: &str = "Please select an avatar image first.";
pub const GENERIC_FAILURE: &str = "Failed to generate video";

/// Anything that can turn an [`AdRequest`] into a terminal render payload.
/// Errors are the message text to show the user.
#[async_trait]
pub trait VideoBackend: Send + Sync {
    async fn generate_video(&self, request: &AdRequest) -> Result<Value, String>;
}

/// Calls a running studio server's `POST /api/video`.
#[derive(Debug, Clone)]
pub struct HttpVideoBackend {
    client: Client,
    endpoint: String,
}

impl HttpVideoBackend {
    pub fn new(server_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/video", server_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl VideoBackend for HttpVideoBackend {
    async fn generate_video(&self, request: &AdRequest) -> Result<Value, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .timeout(Duration::from_secs(180))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(if text.is_empty() {
                GENERIC_FAILURE.to_string()
            } else {
                text
            });
        }

        response.json::<Value>().await.map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudioError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("a video is already being generated")]
    Busy,
    #[error("{0}")]
    Backend(String),
}

/// What the studio currently shows.
#[derive(Debug, Clone)]
pub enum StudioView {
    Idle,
    Loading,
    Error(String),
    Result(VideoResult),
}

impl fmt::Display for StudioView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioView::Idle => write!(f, "No video generated yet. Submit a script to generate one."),
            StudioView::Loading => write!(f, "Generating..."),
            StudioView::Error(message) => write!(f, "{}", message),
            StudioView::Result(result) => match result.video_url() {
                Some(url) => write!(f, "Video Result: {}", url),
                None => {
                    let raw = serde_json::to_string_pretty(&result.raw).unwrap_or_else(|_| result.raw.to_string());
                    write!(
                        f,
                        "The video was created, but a direct video URL was not found in the response. \
                         Here is the raw response from the API:\n{}",
                        raw
                    )
                }
            },
        }
    }
}

/// One user's studio session. Holds input and the current view in memory
/// only; a new result replaces the previous one wholesale.
#[derive(Debug)]
pub struct StudioSession {
    base_url: String,
    script: String,
    avatar: Option<String>,
    voice: String,
    busy: bool,
    view: StudioView,
}

impl StudioSession {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            script: String::new(),
            avatar: None,
            voice: DEFAULT_TALK_VOICE.to_string(),
            busy: false,
            view: StudioView::Idle,
        }
    }

    pub fn set_script(&mut self, script: impl Into<String>) {
        self.script = script.into();
    }

    /// Select an avatar by its relative asset path.
    pub fn select_avatar(&mut self, asset_path: impl Into<String>) {
        self.avatar = Some(asset_path.into());
    }

    pub fn select_voice(&mut self, voice_id: impl Into<String>) {
        self.voice = voice_id.into();
    }

    pub fn view(&self) -> &StudioView {
        &self.view
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Validate input and mark the session busy. The returned request is the
    /// only thing that should go over the network.
    pub fn begin(&mut self) -> Result<AdRequest, StudioError> {
        if self.busy {
            return Err(StudioError::Busy);
        }

        if self.script.trim().is_empty() {
            return Err(self.reject(MISSING_SCRIPT));
        }

        let avatar = match self.avatar.as_deref() {
            Some(path) => avatar_url(&self.base_url, path),
            None => return Err(self.reject(MISSING_AVATAR)),
        };

        self.busy = true;
        self.view = StudioView::Loading;

        Ok(AdRequest::new(self.script.clone(), avatar, Some(self.voice.clone())))
    }

    /// Record the outcome of the request started by [`begin`](Self::begin).
    pub fn finish(&mut self, outcome: Result<Value, String>) {
        self.busy = false;
        self.view = match outcome {
            Ok(payload) => StudioView::Result(VideoResult::from_payload(payload)),
            Err(message) => {
                tracing::error!(error = %message, "video generation failed");
                let message = if message.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                };
                StudioView::Error(message)
            }
        };
    }

    /// Validate, call the backend once, and swap in the new view.
    pub async fn submit<B: VideoBackend + ?Sized>(&mut self, backend: &B) -> Result<&VideoResult, StudioError> {
        let request = self.begin()?;
        let outcome = backend.generate_video(&request).await;
        self.finish(outcome);

        match &self.view {
            StudioView::Result(result) => Ok(result),
            StudioView::Error(message) => Err(StudioError::Backend(message.clone())),
            _ => Err(StudioError::Backend(GENERIC_FAILURE.to_string())),
        }
    }

    fn reject(&mut self, message: &'static str) -> StudioError {
        self.view = StudioView::Error(message.to_string());
        StudioError::Validation(message)
    }
}
