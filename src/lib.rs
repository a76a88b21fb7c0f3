// lib.rs - UGC ad studio: script, voice and talking-avatar video generation
pub mod catalog;
pub mod config;
pub mod did_client; // 🎬 D-ID talking-avatar renders
pub mod elevenlabs_client; // 🎙️ Eleven Labs TTS
pub mod error;
pub mod groq_client; // ✍️ Groq chat completions for ad copy
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod studio;
pub mod upstream;

use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use config::AppConfig;
use services::{ScriptWriter, SpeechSynthesizer, VideoOrchestrator};

pub use error::{AppError, AppResult};

// AppState holds the configuration and one client per upstream provider.
// Nothing in it changes after startup.
pub struct AppState {
    pub config: AppConfig,
    pub script_writer: Arc<dyn ScriptWriter>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub video: VideoOrchestrator,
}

impl AppState {
    /// Wire the real provider clients from configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let script_writer = Arc::new(groq_client::GroqClient::new(&config.groq, config.groq_model.clone()));
        let speech = Arc::new(elevenlabs_client::ElevenLabsClient::new(&config.elevenlabs));
        let talks = Arc::new(did_client::DIdClient::new(&config.did));
        let video = VideoOrchestrator::new(talks, config.poll_policy.clone());

        Self {
            config,
            script_writer,
            speech,
            video,
        }
    }
}

/// Build the application with all routes and shared state.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::script::script_routes())
        .merge(handlers::voice::voice_routes())
        .merge(handlers::video::video_routes())
        .merge(handlers::status::status_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
