// src/models/render.rs
//! Typed views over the talking-avatar provider's job payloads.
//!
//! Payloads are kept as raw JSON so they can be handed back verbatim; the
//! types here only read the fields the render loop and the studio care about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Status of a provider-side render job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkStatus {
    Created,
    Started,
    Pending,
    Done,
    Error,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// The fields of a render job the poll loop reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<TalkStatus>,
    #[serde(default)]
    pub result_url: Option<String>,
}

impl RenderJob {
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        if !payload.is_object() {
            return Err(AppError::UpstreamShape(format!(
                "expected a job object, got {payload}"
            )));
        }
        serde_json::from_value(payload.clone())
            .map_err(|e| AppError::UpstreamShape(format!("unreadable job payload: {e}")))
    }

    pub fn has_result_url(&self) -> bool {
        self.result_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    pub fn is_done(&self) -> bool {
        self.status == Some(TalkStatus::Done)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, Some(TalkStatus::Error) | Some(TalkStatus::Rejected))
    }

    /// Non-empty job identifier, if the provider sent one.
    pub fn talk_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Where the finished video lives, if the payload says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    ResultUrlFound(String),
    NoUrlFound,
}

impl RenderOutcome {
    /// Looks for the video URL under `result_url`, then `url`, then
    /// `result.url`. Empty strings do not count.
    pub fn from_payload(payload: &Value) -> Self {
        let candidates = [
            payload.get("result_url"),
            payload.get("url"),
            payload.get("result").and_then(|result| result.get("url")),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .find(|url| !url.is_empty())
            .map(|url| RenderOutcome::ResultUrlFound(url.to_string()))
            .unwrap_or(RenderOutcome::NoUrlFound)
    }
}

/// A finished render as held by the studio until the next one replaces it.
#[derive(Debug, Clone)]
pub struct VideoResult {
    pub outcome: RenderOutcome,
    pub raw: Value,
    pub received_at: DateTime<Utc>,
}

impl VideoResult {
    pub fn from_payload(raw: Value) -> Self {
        Self {
            outcome: RenderOutcome::from_payload(&raw),
            raw,
            received_at: Utc::now(),
        }
    }

    pub fn video_url(&self) -> Option<&str> {
        match &self.outcome {
            RenderOutcome::ResultUrlFound(url) => Some(url),
            RenderOutcome::NoUrlFound => None,
        }
    }
}
