//! Retry utilities with exponential backoff.
//!
//! Each attempt reports an explicit [`AttemptOutcome`]; the loop inspects the
//! tag to decide whether to wait and try again or to stop. Waiting goes
//! through a [`Sleeper`] so tests can observe the backoff schedule without
//! real delays.
//!
//! # Example
//!
//! ```rust,no_run
//! use cats_mcp::retry::{run_with_backoff, AttemptOutcome, RetryConfig, TokioSleeper};
//!
//! async fn example() -> Result<u32, String> {
//!     let config = RetryConfig::gateway();
//!
//!     run_with_backoff(&config, &TokioSleeper, |attempt| async move {
//!         if attempt < 2 {
//!             AttemptOutcome::Retry("not yet".to_string())
//!         } else {
//!             AttemptOutcome::Success(attempt)
//!         }
//!     })
//!     .await
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,

    /// Delay before the second attempt
    pub initial_delay: Duration,

    /// Maximum delay between attempts
    pub max_delay: Duration,

    /// Base for exponential backoff (typically 2.0)
    pub exponential_base: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::gateway()
    }
}

impl RetryConfig {
    /// The fixed policy used for every CATS API call.
    ///
    /// Four attempts with waits of 1s, 2s and 4s between them.
    pub fn gateway() -> Self {
        Self {
            max_attempts: 4,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(8),
            exponential_base: 2.0,
        }
    }


    /// Delay to wait after the given (1-based) failed attempt.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let secs = self.initial_delay.as_secs_f64() * self.exponential_base.powi(exponent);
        Duration::from_secs_f64(secs.min(self.max_delay.as_secs_f64()))
    }
}

/// Result of a single attempt, tagged with what the loop should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome<T, E> {
    /// The operation succeeded.
    Success(T),

    /// Transient failure; try again if the budget allows.
    Retry(E),

    /// Permanent failure; stop immediately.
    Fail(E),
}

/// Something that can wait for a duration.
#[async_trait]
pub trait Sleeper: Send + Sync + Debug {
    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Run `f` until it succeeds, fails permanently, or the attempt budget is spent.
///
/// `f` receives the 1-based attempt number. After a [`AttemptOutcome::Retry`]
/// the loop waits `config.delay_after(attempt)` before the next attempt; when
/// the last attempt is also retryable its error is returned as-is.
pub async fn run_with_backoff<F, Fut, T, E>(
    config: &RetryConfig,
    sleeper: &dyn Sleeper,
    mut f: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AttemptOutcome<T, E>>,
    E: Debug,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match f(attempt).await {
            AttemptOutcome::Success(result) => {
                if attempt > 1 {
                    tracing::info!(attempts = attempt, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            AttemptOutcome::Fail(e) => {
                tracing::debug!(error = ?e, "Error is not retryable, returning immediately");
                return Err(e);
            }
            AttemptOutcome::Retry(e) if attempt >= max_attempts => {
                tracing::error!(attempts = attempt, error = ?e, "All retry attempts exhausted");
                return Err(e);
            }
            AttemptOutcome::Retry(e) => {
                let delay = config.delay_after(attempt);
                tracing::warn!(
                    attempt = attempt,
                    max_attempts = max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = ?e,
                    "Attempt failed, retrying"
                );

                sleeper.sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct RecordingSleeper {
        slept: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    #[test]
    fn test_gateway_config() {
        let config = RetryConfig::gateway();
        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.initial_delay, Duration::from_secs(1));
        assert_eq!(config, RetryConfig::default());
    }

    #[test]
    fn test_delay_schedule_doubles() {
        let config = RetryConfig::gateway();
        assert_eq!(config.delay_after(1), Duration::from_secs(1));
        assert_eq!(config.delay_after(2), Duration::from_secs(2));
        assert_eq!(config.delay_after(3), Duration::from_secs(4));
        assert_eq!(config.delay_after(4), Duration::from_secs(8));
        assert_eq!(config.delay_after(9), Duration::from_secs(8));
    }

    #[tokio::test]
    async fn test_succeeds_first_try() {
        let sleeper = RecordingSleeper::default();
        let counter = Arc::new(AtomicU32::new(0));

        let result: Result<i32, String> =
            run_with_backoff(&RetryConfig::gateway(), &sleeper, |_| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    AttemptOutcome::Success(42)
                }
            })
            .await;

        assert_eq!(result, Ok(42));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(sleeper.slept.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_succeeds_after_retries() {
        let sleeper = RecordingSleeper::default();

        let result = run_with_backoff(&RetryConfig::gateway(), &sleeper, |attempt| async move {
            if attempt < 3 {
                AttemptOutcome::Retry("not yet")
            } else {
                AttemptOutcome::Success(attempt)
            }
        })
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(
            *sleeper.slept.lock().unwrap(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[tokio::test]
    async fn test_exhausts_attempts() {
        let sleeper = RecordingSleeper::default();
        let counter = Arc::new(AtomicU32::new(0));

        let result: Result<(), &str> = run_with_backoff(&RetryConfig::gateway(), &sleeper, |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                AttemptOutcome::Retry("always fails")
            }
        })
        .await;

        assert_eq!(result, Err("always fails"));
        assert_eq!(counter.load(Ordering::SeqCst), 4);
        assert_eq!(
            *sleeper.slept.lock().unwrap(),
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4)
            ]
        );
    }

    #[tokio::test]
    async fn test_fail_stops_immediately() {
        let sleeper = RecordingSleeper::default();
        let counter = Arc::new(AtomicU32::new(0));

        let result: Result<(), &str> = run_with_backoff(&RetryConfig::gateway(), &sleeper, |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                AttemptOutcome::Fail("permanent failure")
            }
        })
        .await;

        assert_eq!(result, Err("permanent failure"));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(sleeper.slept.lock().unwrap().is_empty());
    }
}
