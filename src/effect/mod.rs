//! Asynchronous adapters (feature `async`).
//!
//! The synchronous combinators on [`Outcome`](crate::value::Outcome) have
//! asynchronous counterparts here. A panic raised while a wrapped future is
//! polled becomes the error state, just as a panic inside
//! [`try_with`](crate::control::try_with) does.
//!
//! - [`try_async`], [`try_outcome_async`] and their `_with_options`
//!   variants: fault capture across `.await`
//! - [`use_resource_async`], [`using_async`]: scoped disposal around an
//!   asynchronous use
//! - [`OutcomeFutureExt`]: `map`/`then`/taps/`fold` on futures of outcomes
//! - [`retry`], [`retry_outcome`], [`RetryPolicy`]: fixed-delay retries
//! - [`with_timeout`], [`timeout_outcome`], [`TimeoutError`]: deadlines
//! - [`fire_and_forget`]: detached execution with an error handler
//!
//! Everything runs on the caller's executor. Only [`retry`],
//! [`with_timeout`] and [`fire_and_forget`] need a tokio runtime, for its
//! timer and spawner.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use trivalent::effect::{OutcomeFutureExt, RetryPolicy, retry_outcome};
//! use trivalent::value::{Error, Outcome};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut attempts = 0;
//! let outcome = retry_outcome(
//!     || {
//!         attempts += 1;
//!         let attempt = attempts;
//!         async move {
//!             if attempt == 1 {
//!                 Outcome::error(Error::new("connection reset"))
//!             } else {
//!                 Outcome::value(attempt)
//!             }
//!         }
//!     },
//!     RetryPolicy::new(3, Duration::from_millis(1)),
//! )
//! .map_outcome(|attempt| attempt * 100)
//! .await;
//!
//! assert_eq!(outcome, Outcome::value(200));
//! # });
//! ```

mod async_outcome;
mod async_try;
mod retry;

pub use async_outcome::OutcomeFutureExt;
pub use async_try::{
    try_async, try_async_with_options, try_outcome_async, try_outcome_async_with_options,
    use_resource_async, using_async,
};
pub use retry::{
    RetryPolicy, TimeoutError, fire_and_forget, retry, retry_outcome, timeout_outcome,
    with_timeout,
};
