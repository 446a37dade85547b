//! Retry, timeout, and detached execution for asynchronous computations.

use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use futures::FutureExt;
use tokio::task::JoinHandle;

use super::async_try::try_outcome_async;
use crate::control::capture;
use crate::value::{Error, Outcome};

// =============================================================================
// RetryPolicy
// =============================================================================

/// How often, and how far apart, a computation is attempted.
///
/// A `max_attempts` of zero still runs the computation once.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use trivalent::effect::RetryPolicy;
///
/// let policy = RetryPolicy::default().with_max_attempts(5);
/// assert_eq!(policy.max_attempts(), 5);
/// assert_eq!(policy.delay(), Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with a fixed delay between attempts.
    #[must_use]
    pub const fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Replaces the attempt limit.
    #[must_use]
    pub const fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Replaces the delay.
    #[must_use]
    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// The configured attempt limit.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The pause between two attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    const fn effective_attempts(&self) -> usize {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(100))
    }
}

// =============================================================================
// Retry
// =============================================================================

/// Runs a fresh computation from `factory` until one succeeds or the policy
/// is exhausted.
///
/// Returns the first `Ok`, or the error of the last attempt. A panic while
/// creating or awaiting an attempt is retried like an `Err`.
///
/// # Panics
///
/// Re-raises the panic of the last attempt when that attempt panicked.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use trivalent::effect::{RetryPolicy, retry};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let mut calls = 0;
/// let result = retry(
///     || {
///         calls += 1;
///         let attempt = calls;
///         async move { if attempt < 3 { Err("busy") } else { Ok(attempt) } }
///     },
///     RetryPolicy::new(5, Duration::from_millis(1)),
/// )
/// .await;
///
/// assert_eq!(result, Ok(3));
/// # });
/// ```
pub async fn retry<T, E, F, Fut>(mut factory: F, policy: RetryPolicy) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let attempts = policy.effective_attempts();
    let mut attempt = 1;

    loop {
        let settled = AssertUnwindSafe(async { factory().await }).catch_unwind().await;
        let last = attempt >= attempts;

        match settled {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(error)) if last => return Err(error),
            Err(payload) if last => panic::resume_unwind(payload),
            Ok(Err(error)) => {
                tracing::warn!(attempt, max_attempts = attempts, %error, "attempt failed; retrying");
            }
            Err(payload) => {
                let fault = Error::from_panic(payload.as_ref());
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    error = fault.message(),
                    "attempt panicked; retrying"
                );
            }
        }

        tokio::time::sleep(policy.delay).await;
        attempt += 1;
    }
}

/// [`retry`] for `Outcome`-producing computations.
///
/// Only the error state is retried; a panic while creating or awaiting an
/// attempt counts as an error. `None` and values are returned immediately.
pub async fn retry_outcome<T, F, Fut>(mut factory: F, policy: RetryPolicy) -> Outcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Outcome<T>>,
{
    let attempts = policy.effective_attempts();
    let mut attempt = 1;

    loop {
        let outcome = match capture(&mut factory) {
            Ok(future) => try_outcome_async(future).await,
            Err(error) => Outcome::Error(error),
        };

        match outcome {
            Outcome::Error(error) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    error = error.message(),
                    "attempt failed; retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            settled => return settled,
        }
    }
}

// =============================================================================
// Timeout
// =============================================================================

/// The deadline passed before the computation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation timed out after {duration:?}")]
pub struct TimeoutError {
    /// The deadline that was exceeded.
    pub duration: Duration,
}

/// Awaits `future` for at most `duration`.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use trivalent::effect::with_timeout;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let fast = with_timeout(async { 1 }, Duration::from_secs(1)).await;
/// assert_eq!(fast, Ok(1));
///
/// let slow = with_timeout(tokio::time::sleep(Duration::from_secs(5)), Duration::from_millis(5)).await;
/// assert_eq!(slow.unwrap_err().duration, Duration::from_millis(5));
/// # });
/// ```
pub async fn with_timeout<Fut>(future: Fut, duration: Duration) -> Result<Fut::Output, TimeoutError>
where
    Fut: Future,
{
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_| TimeoutError { duration })
}

/// [`with_timeout`] for `Outcome`-producing futures.
///
/// An expired deadline becomes an [`Error`] whose cause is the
/// [`TimeoutError`]. A panic while awaiting is captured as usual.
pub async fn timeout_outcome<T, Fut>(future: Fut, duration: Duration) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>>,
{
    with_timeout(try_outcome_async(future), duration)
        .await
        .unwrap_or_else(|timeout| Outcome::Error(Error::from_cause(timeout)))
}

// =============================================================================
// Fire and Forget
// =============================================================================

/// Spawns `future` on the current tokio runtime without awaiting it.
///
/// If the computation ends in the error state or panics, `on_error` receives
/// the error. Values and `None` are discarded.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use trivalent::effect::fire_and_forget;
/// use trivalent::value::{Error, Outcome};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let (sender, receiver) = tokio::sync::oneshot::channel();
/// let handle = fire_and_forget(
///     async { Outcome::<()>::error(Error::new("audit log unavailable")) },
///     move |error| {
///         let _ = sender.send(error.message().to_string());
///     },
/// );
/// handle.await.unwrap();
/// assert_eq!(receiver.await.unwrap(), "audit log unavailable");
/// # });
/// ```
pub fn fire_and_forget<T, Fut, H>(future: Fut, on_error: H) -> JoinHandle<()>
where
    T: Send + 'static,
    Fut: Future<Output = Outcome<T>> + Send + 'static,
    H: FnOnce(Error) + Send + 'static,
{
    tokio::spawn(async move {
        if let Outcome::Error(error) = try_outcome_async(future).await {
            tracing::warn!(error = error.message(), "detached computation failed");
            on_error(error);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(4, 4)]
    fn test_effective_attempts_never_below_one(#[case] configured: usize, #[case] expected: usize) {
        let policy = RetryPolicy::default().with_max_attempts(configured);
        assert_eq!(policy.effective_attempts(), expected);
    }

    #[test]
    fn test_timeout_error_display() {
        let error = TimeoutError {
            duration: Duration::from_millis(250),
        };
        assert_eq!(error.to_string(), "operation timed out after 250ms");
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_returns_last_error_when_exhausted() {
        let mut calls = 0;
        let result: Result<(), String> = retry(
            || {
                calls += 1;
                let attempt = calls;
                async move { Err(format!("failure {attempt}")) }
            },
            RetryPolicy::new(3, Duration::from_secs(1)),
        )
        .await;

        assert_eq!(result, Err("failure 3".to_string()));
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_outcome_does_not_retry_none() {
        let mut calls = 0;
        let outcome: Outcome<i32> = retry_outcome(
            || {
                calls += 1;
                async { Outcome::none() }
            },
            RetryPolicy::default(),
        )
        .await;

        assert!(outcome.is_none());
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_outcome_reports_deadline_as_cause() {
        let outcome: Outcome<i32> = timeout_outcome(
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Outcome::value(1)
            },
            Duration::from_secs(1),
        )
        .await;

        let error = outcome.error_ref().cloned().unwrap_or_else(|| Error::new(""));
        assert_eq!(error.message(), "operation timed out after 1s");
        assert!(error.cause().is_some_and(|cause| cause.is::<TimeoutError>()));
    }
}
