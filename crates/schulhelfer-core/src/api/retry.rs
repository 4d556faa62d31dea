//! Retry Policy
//!
//! Sequential retries with linearly growing delays.

use std::future::Future;

use super::Timer;
use crate::domain::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: u32,
    /// Delay before retry `n` is `n * base_delay_ms`
    pub base_delay_ms: u32,
    /// Delay unit used instead of `base_delay_ms` after a rate-limit answer
    pub rate_limit_delay_ms: u32,
    pub retry_rate_limited: bool,
}

impl RetryPolicy {
    /// Event list: three retries on network trouble only
    pub fn for_events(base_delay_ms: u32) -> Self {
        Self {
            max_attempts: 4,
            base_delay_ms,
            rate_limit_delay_ms: base_delay_ms,
            retry_rate_limited: false,
        }
    }

    /// Registration: three attempts, rate limits back off longer
    pub fn for_registration(base_delay_ms: u32, rate_limit_delay_ms: u32) -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms,
            rate_limit_delay_ms,
            retry_rate_limited: true,
        }
    }

    pub fn should_retry(&self, error: &ApiError, attempt: u32) -> bool {
        attempt < self.max_attempts
            && (error.is_transient() || (self.retry_rate_limited && error.is_rate_limited()))
    }

    pub fn delay_for(&self, error: &ApiError, attempt: u32) -> u32 {
        let unit = if error.is_rate_limited() {
            self.rate_limit_delay_ms
        } else {
            self.base_delay_ms
        };
        unit.saturating_mul(attempt)
    }
}

/// Run `op` until it succeeds, fails permanently or runs out of attempts.
/// `op` receives the 1-based attempt number.
pub async fn with_retry<T, F, Fut, C>(policy: &RetryPolicy, timer: &C, label: &str, mut op: F) -> Result<T, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    C: Timer + ?Sized,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    log::info!("[{}] succeeded on attempt {}", label, attempt);
                }
                return Ok(value);
            }
            Err(e) if policy.should_retry(&e, attempt) => {
                let delay = policy.delay_for(&e, attempt);
                log::warn!(
                    "[{}] attempt {}/{} failed: {}; retrying in {} ms",
                    label,
                    attempt,
                    policy.max_attempts,
                    e,
                    delay
                );
                timer.sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                log::error!("[{}] giving up after attempt {}: {}", label, attempt, e);
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_delays() {
        let policy = RetryPolicy::for_events(1000);
        let err = ApiError::Network("offline".into());
        assert_eq!(policy.delay_for(&err, 1), 1000);
        assert_eq!(policy.delay_for(&err, 2), 2000);
        assert_eq!(policy.delay_for(&err, 3), 3000);
    }

    #[test]
    fn test_rate_limit_uses_longer_unit() {
        let policy = RetryPolicy::for_registration(1000, 3000);
        let err = ApiError::RateLimited(None);
        assert_eq!(policy.delay_for(&err, 1), 3000);
        assert_eq!(policy.delay_for(&err, 2), 6000);
    }

    #[test]
    fn test_should_retry() {
        let events = RetryPolicy::for_events(1000);
        assert!(events.should_retry(&ApiError::Timeout(10), 3));
        assert!(!events.should_retry(&ApiError::Timeout(10), 4));
        assert!(!events.should_retry(&ApiError::RateLimited(None), 1));
        assert!(!events.should_retry(&ApiError::Status(500), 1));

        let registration = RetryPolicy::for_registration(1000, 3000);
        assert!(registration.should_retry(&ApiError::RateLimited(None), 2));
        assert!(!registration.should_retry(&ApiError::RateLimited(None), 3));
        assert!(!registration.should_retry(&ApiError::Server("voll".into()), 1));
    }
}
