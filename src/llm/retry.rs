//! Retry policy for transient inference-service failures
//!
//! Retries match on HTTP status codes only. Transport errors and statuses
//! outside the configured set propagate on first occurrence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Maximum request attempts (first try included)
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// Exponential backoff base factor
pub const DEFAULT_EXP_BASE: u32 = 7;

/// Delay before the first retry
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

/// Statuses treated as transient
pub const DEFAULT_RETRY_STATUSES: [u16; 4] = [429, 500, 503, 504];

/// Retry policy for model calls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, first try included
    pub attempts: u32,

    /// Backoff multiplier between consecutive retries
    #[serde(rename = "exp-base")]
    pub exp_base: u32,

    /// Delay before the first retry, in milliseconds
    #[serde(rename = "initial-delay-ms")]
    pub initial_delay_ms: u64,

    /// HTTP statuses that trigger a retry
    #[serde(rename = "retry-on")]
    pub retry_on: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            exp_base: DEFAULT_EXP_BASE,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            retry_on: DEFAULT_RETRY_STATUSES.to_vec(),
        }
    }
}

impl RetryPolicy {
    /// Check whether a response status should be retried
    pub fn should_retry(&self, status: u16) -> bool {
        self.retry_on.contains(&status)
    }

    /// Backoff delay before retry number `retry` (1-based)
    ///
    /// The first retry waits the initial delay; each subsequent retry
    /// multiplies it by the base factor.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let ms = self.initial_delay_ms * u64::from(self.exp_base).pow(retry.saturating_sub(1));
        Duration::from_millis(ms)
    }
}
