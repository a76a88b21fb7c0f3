// src/services/video_orchestrator.rs
//! Drives one talking-avatar render from creation to a terminal status and
//! hands the caller a single synchronous result.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AdRequest, RenderJob};
use crate::services::poll_policy::PollPolicy;
use crate::services::providers::TalkProvider;
use crate::services::render_phase::RenderPhase;

#[derive(Clone)]
pub struct VideoOrchestrator {
    provider: Arc<dyn TalkProvider>,
    policy: PollPolicy,
}

impl VideoOrchestrator {
    pub fn new(provider: Arc<dyn TalkProvider>, policy: PollPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Submit the job, then poll until it is done, failed, or out of budget.
    ///
    /// Returns the provider's terminal payload. Transport failures on create
    /// or on any poll end the render immediately; nothing is retried.
    pub async fn render(&self, request: &AdRequest) -> AppResult<Value> {
        info!(
            avatar = %request.avatar_image,
            voice = %request.voice(),
            script_chars = request.script.chars().count(),
            "submitting render job"
        );

        let created = self.provider.create_talk(request).await?;
        let job = RenderJob::from_payload(&created)?;
        let mut phase = RenderPhase::Created;

        if job.has_result_url() || job.is_done() {
            advance(&mut phase, RenderPhase::Done)?;
            info!(talk_id = ?job.talk_id(), "render finished at creation, skipping poll");
            return Ok(created);
        }

        let talk_id = job
            .talk_id()
            .ok_or_else(|| AppError::UpstreamShape("create response carried no job id".to_string()))?
            .to_string();

        advance(&mut phase, RenderPhase::Pending { polls: 0 })?;
        let mut delays = self.policy.delays();

        for attempt in 1..=self.policy.max_attempts {
            if let Some(delay) = delays.next() {
                tokio::time::sleep(delay).await;
            }

            let payload = self.provider.get_talk(&talk_id).await?;
            let job = RenderJob::from_payload(&payload)?;
            debug!(talk_id = %talk_id, attempt, status = ?job.status, "render status");

            if job.is_done() && job.has_result_url() {
                advance(&mut phase, RenderPhase::Done)?;
                info!(talk_id = %talk_id, attempt, "render complete");
                return Ok(payload);
            }

            if job.is_failed() {
                advance(&mut phase, RenderPhase::Error)?;
                warn!(talk_id = %talk_id, attempt, "provider reported render failure");
                return Err(AppError::ProviderReported(payload));
            }

            advance(&mut phase, RenderPhase::Pending { polls: attempt })?;
        }

        advance(&mut phase, RenderPhase::TimedOut)?;
        warn!(
            talk_id = %talk_id,
            attempts = self.policy.max_attempts,
            "render did not finish within the poll budget"
        );
        Err(AppError::Timeout)
    }
}

fn advance(phase: &mut RenderPhase, to: RenderPhase) -> AppResult<()> {
    *phase = phase
        .advance(to)
        .map_err(|e| AppError::Unexpected(e.to_string()))?;
    Ok(())
}
