// src/services/mod.rs
pub mod poll_policy;
pub mod providers;
pub mod render_phase;
pub mod video_orchestrator;

pub use poll_policy::{PollBackoff, PollPolicy};
pub use providers::{ScriptWriter, SpeechSynthesizer, TalkProvider};
pub use render_phase::RenderPhase;
pub use video_orchestrator::VideoOrchestrator;
