// src/models/mod.rs
pub mod ad;
pub mod render;

pub use ad::{AdRequest, ScriptRequest, ScriptResponse, SpeechRequest, DEFAULT_TALK_VOICE};
pub use render::{RenderJob, RenderOutcome, TalkStatus, VideoResult};
