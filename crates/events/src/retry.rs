//! Retry policy for task delivery.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bounded, linearly backed-off retry.
///
/// One strategy everywhere: the wait before attempt `n` is `base_delay · n`
/// capped at `max_delay`, and the attempt count has a hard ceiling after
/// which the task is abandoned. The waiting itself is the transport's
/// scheduled-delay feature, never an in-process sleep.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total deliveries allowed per task, first attempt included.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
            max_delay,
        }
    }

    /// Wait before delivery attempt `attempt` (1-based; 0 is treated as 1).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(attempt.max(1))
            .min(self.max_delay)
    }

    /// Whether a task that has already been delivered `attempt` times may go
    /// around again.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(32, Duration::from_secs(2), Duration::from_secs(60))
    }
}
