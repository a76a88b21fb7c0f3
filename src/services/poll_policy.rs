// src/services/poll_policy.rs
//! Bounded polling budget for provider render jobs.

use backoff::{backoff::Backoff, ExponentialBackoff};
use std::time::Duration;

pub const DEFAULT_POLL_ATTEMPTS: u32 = 15;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub enum PollBackoff {
    /// Same delay before every status fetch.
    Fixed,
    /// Delay grows by `multiplier` per attempt, capped at `max_interval`.
    Exponential { multiplier: f64, max_interval: Duration },
}

/// How many status fetches a render may take and how long to wait before
/// each one. The default is 15 fetches, 2 seconds apart.
#[derive(Debug, Clone, PartialEq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
    pub backoff: PollBackoff,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_ATTEMPTS,
            interval: DEFAULT_POLL_INTERVAL,
            backoff: PollBackoff::Fixed,
        }
    }
}

impl PollPolicy {
    pub fn fixed(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
            backoff: PollBackoff::Fixed,
        }
    }

    /// Fresh delay sequence for one render job.
    pub fn delays(&self) -> PollDelays {
        match &self.backoff {
            PollBackoff::Fixed => PollDelays::Fixed(self.interval),
            PollBackoff::Exponential {
                multiplier,
                max_interval,
            } => PollDelays::Exponential {
                backoff: ExponentialBackoff {
                    current_interval: self.interval,
                    initial_interval: self.interval,
                    randomization_factor: 0.0,
                    multiplier: *multiplier,
                    max_interval: *max_interval,
                    max_elapsed_time: None,
                    ..Default::default()
                },
                cap: *max_interval,
            },
        }
    }

    /// Sum of every delay the policy would wait through. Only walks the
    /// schedule until the delay stops changing.
    pub fn budget(&self) -> Duration {
        if self.backoff == PollBackoff::Fixed {
            return self.interval.saturating_mul(self.max_attempts);
        }

        let mut total = Duration::ZERO;
        let mut previous: Option<Duration> = None;
        for (taken, delay) in (1..=self.max_attempts).zip(self.delays()) {
            total = total.saturating_add(delay);
            let settled = previous == Some(delay);
            if settled {
                let rest = self.max_attempts - taken;
                return total.saturating_add(delay.saturating_mul(rest));
            }
            previous = Some(delay);
        }
        total
    }
}

/// Infinite iterator over inter-poll delays; the caller bounds it by
/// `max_attempts`.
pub enum PollDelays {
    Fixed(Duration),
    Exponential { backoff: ExponentialBackoff, cap: Duration },
}

impl Iterator for PollDelays {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        match self {
            PollDelays::Fixed(interval) => Some(*interval),
            PollDelays::Exponential { backoff, cap } => {
                let delay = backoff.next_backoff().unwrap_or(*cap);
                // whole milliseconds; the crate adds up to a nanosecond of jitter
                Some(Duration::from_millis(delay.as_millis() as u64))
            }
        }
    }
}
