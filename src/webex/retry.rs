//! Retry policy for the resilient fetcher

use std::time::Duration;

use crate::config::retry;

/// Timing and budget knobs for [`WebexClient::fetch`](crate::webex::WebexClient::fetch)
///
/// Rate-limit waits (429) are unbounded and never consume `max_retries`.
/// Every other failure sleeps `backoff_unit * backoff_factor ^ attempt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retryable failures tolerated before the request is abandoned
    pub max_retries: u32,
    /// Base of the exponential backoff
    pub backoff_factor: u32,
    /// Duration of one backoff step (one second in production)
    pub backoff_unit: Duration,
    /// Sleep after each 429 response
    pub rate_limit_wait: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: retry::MAX_RETRIES,
            backoff_factor: retry::BACKOFF_FACTOR,
            backoff_unit: Duration::from_secs(1),
            rate_limit_wait: Duration::from_secs(retry::RATE_LIMIT_WAIT_SECS),
            request_timeout: Duration::from_secs(retry::REQUEST_TIMEOUT_SECS),
        }
    }
}

impl RetryPolicy {
    /// Override the wait applied after a 429
    pub fn with_rate_limit_wait(mut self, wait: Duration) -> Self {
        self.rate_limit_wait = wait;
        self
    }

    /// Override the retry budget
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay before the retry that follows failed attempt `attempt` (0-indexed)
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_unit
            .saturating_mul(self.backoff_factor.saturating_pow(attempt))
    }
}
