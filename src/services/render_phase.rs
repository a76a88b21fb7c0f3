// src/services/render_phase.rs
use std::fmt;

/// Lifecycle of a single render job as seen by the orchestrator.
///
/// `Created -> Done` when the creation response is already final, otherwise
/// `Created -> Pending -> ... -> Done | Error | TimedOut`. Terminal phases
/// accept no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Created,
    Pending { polls: u32 },
    Done,
    Error,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("illegal render transition {from} -> {to}")]
pub struct InvalidTransition {
    pub from: RenderPhase,
    pub to: RenderPhase,
}

impl RenderPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RenderPhase::Done | RenderPhase::Error | RenderPhase::TimedOut)
    }

    pub fn advance(self, to: RenderPhase) -> Result<RenderPhase, InvalidTransition> {
        use RenderPhase::*;

        let allowed = match (self, to) {
            (Created, Done) | (Created, Pending { polls: 0 }) => true,
            (Pending { polls }, Pending { polls: next }) => next == polls + 1,
            (Pending { .. }, Done | Error | TimedOut) => true,
            _ => false,
        };

        if allowed {
            Ok(to)
        } else {
            Err(InvalidTransition { from: self, to })
        }
    }
}

impl fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderPhase::Created => write!(f, "created"),
            RenderPhase::Pending { polls } => write!(f, "pending({polls})"),
            RenderPhase::Done => write!(f, "done"),
            RenderPhase::Error => write!(f, "error"),
            RenderPhase::TimedOut => write!(f, "timed_out"),
        }
    }
}
