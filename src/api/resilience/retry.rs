//! Retry policy for transient platform errors
//!
//! The platform reports internal lock contention in the response body; those
//! exchanges are worth repeating with an increasing delay. Every other
//! outcome is returned immediately.

use std::future::Future;
use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;

use super::super::error::Result;
use super::super::response::Outcome;

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Backoff grows linearly with the attempt index: no delay before the
    /// first attempt, `base_delay * n` before attempt n + 1.
    pub base_delay: Duration,
    /// Cap on any single backoff delay.
    pub max_delay: Duration,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            jitter: false,
        }
    }
}

impl RetryConfig {
    /// Single attempt, no waiting.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter: false,
        }
    }
}

/// Runs one logical call, repeating it while the outcome stays transient.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute `operation` until it settles on a non-transient outcome or
    /// attempts run out. The last transient outcome is returned once
    /// attempts are exhausted, never swallowed.
    pub async fn execute<F, Fut>(&self, operation: F) -> Result<Outcome>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Outcome>>,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut last = None;

        for attempt in 0..max_attempts {
            let delay = self.delay_for(attempt);
            if !delay.is_zero() {
                debug!(
                    "waiting {:?} before attempt {}/{}",
                    delay,
                    attempt + 1,
                    max_attempts
                );
                tokio::time::sleep(delay).await;
            }

            match operation().await? {
                Outcome::Transient { status, message } => {
                    warn!(
                        "transient platform error on attempt {}/{} (status {}): {}",
                        attempt + 1,
                        max_attempts,
                        status,
                        message
                    );
                    last = Some(Outcome::Transient { status, message });
                }
                outcome => {
                    if attempt > 0 {
                        info!("call recovered after {} attempts", attempt + 1);
                    }
                    return Ok(outcome);
                }
            }
        }

        Ok(last.expect("at least one attempt was made"))
    }

    /// Backoff before the given zero-based attempt.
    fn delay_for(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let mut delay = self
            .config
            .base_delay
            .saturating_mul(attempt)
            .min(self.config.max_delay);

        if self.config.jitter {
            let factor = rand::rng().random_range(0.5..=1.5);
            delay = Duration::from_millis((delay.as_millis() as f64 * factor) as u64);
        }

        delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(RetryConfig {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            jitter: false,
        })
    }

    fn transient() -> Outcome {
        Outcome::Transient {
            status: 400,
            message: "Database deadlock found when trying to get lock".into(),
        }
    }

    #[test]
    fn test_delay_grows_linearly() {
        let policy = RetryPolicy::new(RetryConfig {
            max_attempts: 10,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            jitter: false,
        });

        assert_eq!(policy.delay_for(0), Duration::ZERO);
        assert_eq!(policy.delay_for(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for(2), Duration::from_secs(2));
        assert_eq!(policy.delay_for(5), Duration::from_secs(5));
    }

    #[test]
    fn test_delay_is_capped() {
        let policy = RetryPolicy::new(RetryConfig {
            max_attempts: 100,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
            jitter: false,
        });

        assert_eq!(policy.delay_for(50), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_success_on_first_attempt_makes_one_call() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let outcome = fast_policy(10)
            .execute(|| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok(Outcome::Success(json!({"ok": true}))) }
            })
            .await
            .unwrap();

        assert!(outcome.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transient_then_success_retries_exactly_enough() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let outcome = fast_policy(10)
            .execute(|| {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 3 {
                        Ok(transient())
                    } else {
                        Ok(Outcome::Success(json!({"ok": true})))
                    }
                }
            })
            .await
            .unwrap();

        assert!(outcome.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_persistent_transient_exhausts_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let outcome = fast_policy(10)
            .execute(|| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok(transient()) }
            })
            .await
            .unwrap();

        assert!(outcome.is_transient());
        assert_eq!(calls.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn test_non_transient_failure_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let outcome = fast_policy(10)
            .execute(|| {
                counter.fetch_add(1, Ordering::SeqCst);
                async {
                    Ok(Outcome::Failed {
                        status: 500,
                        body: "boom".into(),
                    })
                }
            })
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Failed { status: 500, .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
