// src/config.rs
//! Process configuration, read once at startup from the environment
//! (optionally seeded from a `.env` file by `dotenvy`).

use std::fmt;
use std::time::Duration;

use crate::did_client::DID_BASE_URL;
use crate::elevenlabs_client::ELEVENLABS_BASE_URL;
use crate::groq_client::{DEFAULT_GROQ_MODEL, GROQ_BASE_URL};
use crate::services::poll_policy::{PollBackoff, PollPolicy, DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL};

pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://ai-ugcvideo.vercel.app/";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("RENDER_POLL_BACKOFF must be 'fixed' or 'exponential', got '{0}'")]
    UnknownBackoff(String),
}

/// Credentials and endpoint for one upstream provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ProviderConfig {
    pub fn has_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &if self.has_key() { "<redacted>" } else { "<missing>" })
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Deployment origin that avatar asset paths are appended to.
    pub public_base_url: String,
    pub groq: ProviderConfig,
    pub groq_model: String,
    pub elevenlabs: ProviderConfig,
    pub did: ProviderConfig,
    pub poll_policy: PollPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unset and blank values
    /// fall back to defaults; a missing API key stays empty so the provider's
    /// own authentication error reaches the caller.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let max_attempts = match get("RENDER_POLL_ATTEMPTS") {
            Some(raw) => parse_positive("RENDER_POLL_ATTEMPTS", &raw)? as u32,
            None => DEFAULT_POLL_ATTEMPTS,
        };
        let interval = match get("RENDER_POLL_INTERVAL_MS") {
            Some(raw) => Duration::from_millis(parse_positive("RENDER_POLL_INTERVAL_MS", &raw)?),
            None => DEFAULT_POLL_INTERVAL,
        };
        let backoff = match get("RENDER_POLL_BACKOFF").as_deref() {
            None | Some("fixed") => PollBackoff::Fixed,
            Some("exponential") => {
                let max_interval = match get("RENDER_POLL_MAX_INTERVAL_MS") {
                    Some(raw) => Duration::from_millis(parse_positive("RENDER_POLL_MAX_INTERVAL_MS", &raw)?),
                    None => interval * 5,
                };
                PollBackoff::Exponential {
                    multiplier: 2.0,
                    max_interval,
                }
            }
            Some(other) => return Err(ConfigError::UnknownBackoff(other.to_string())),
        };

        Ok(Self {
            bind_addr: or("BIND_ADDR", DEFAULT_BIND_ADDR),
            public_base_url: or("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL),
            groq: ProviderConfig {
                api_key: or("GROQ_API_KEY", ""),
                base_url: or("GROQ_BASE_URL", GROQ_BASE_URL),
            },
            groq_model: or("GROQ_MODEL", DEFAULT_GROQ_MODEL),
            elevenlabs: ProviderConfig {
                api_key: or("ELEVEN_API_KEY", ""),
                base_url: or("ELEVENLABS_BASE_URL", ELEVENLABS_BASE_URL),
            },
            did: ProviderConfig {
                api_key: or("DID_API_KEY", ""),
                base_url: or("DID_BASE_URL", DID_BASE_URL),
            },
            poll_policy: PollPolicy {
                max_attempts,
                interval,
                backoff,
            },
        })
    }

    /// Names of the provider keys that were not supplied.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("GROQ_API_KEY", &self.groq),
            ("ELEVEN_API_KEY", &self.elevenlabs),
            ("DID_API_KEY", &self.did),
        ]
        .into_iter()
        .filter(|(_, provider)| !provider.has_key())
        .map(|(name, _)| name)
        .collect()
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.parse::<u64>() {
        Ok(value) if value > 0 && value <= u32::MAX as u64 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        }),
    }
}
