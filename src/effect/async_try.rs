//! Fault capture across an `.await` boundary.
//!
//! These are the asynchronous counterparts of [`try_with`](crate::control::try_with)
//! and [`use_resource`](crate::control::use_resource). A panic raised while
//! the wrapped future is polled becomes an [`Outcome::Error`], exactly like
//! a panic in the synchronous helpers.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::control::{Dispose, TryOptions, capture, settle};
use crate::value::{Error, Outcome};

/// Awaits `future`, returning a panic raised while polling it as an [`Error`].
pub(crate) async fn capture_async<Fut>(future: Fut) -> Result<Fut::Output, Error>
where
    Fut: Future,
{
    AssertUnwindSafe(future).catch_unwind().await.map_err(|payload| {
        let error = Error::from_panic(&*payload);
        tracing::debug!(error = error.message(), "captured fault in awaited computation");
        error
    })
}

/// Awaits `future` and wraps its output as `Outcome::Some`.
///
/// # Examples
///
/// ```rust
/// use trivalent::effect::try_async;
/// use trivalent::value::Outcome;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = try_async(async { 21 * 2 }).await;
/// assert_eq!(outcome.get_or_else(0), 42);
///
/// let failed: Outcome<u32> = try_async(async { panic!("remote call failed") }).await;
/// assert!(failed.error_ref().is_some_and(|e| e.message() == "remote call failed"));
/// # });
/// ```
pub async fn try_async<T, Fut>(future: Fut) -> Outcome<T>
where
    Fut: Future<Output = T>,
{
    capture_async(future)
        .await
        .map_or_else(Outcome::Error, Outcome::Some)
}

/// Awaits an `Outcome`-producing `future`, flattening the result.
pub async fn try_outcome_async<T, Fut>(future: Fut) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>>,
{
    capture_async(future).await.unwrap_or_else(Outcome::Error)
}

/// [`try_async`] with [`TryOptions`] applied to a captured fault.
///
/// # Examples
///
/// ```rust
/// use trivalent::control::TryOptions;
/// use trivalent::effect::try_async_with_options;
/// use trivalent::value::Outcome;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome: Outcome<u32> = try_async_with_options(
///     async { panic!("socket closed") },
///     TryOptions::new().message("could not load profile").data(404_u16),
/// )
/// .await;
///
/// let error = outcome.error_ref().unwrap();
/// assert_eq!(error.message(), "could not load profile");
/// assert_eq!(error.data::<u16>(), Some(&404));
/// # });
/// ```
pub async fn try_async_with_options<T, Fut>(future: Fut, options: TryOptions<'_>) -> Outcome<T>
where
    Fut: Future<Output = T>,
{
    match capture_async(future).await {
        Ok(value) => Outcome::Some(value),
        Err(error) => Outcome::Error(options.apply(error)),
    }
}

/// [`try_outcome_async`] with [`TryOptions`] applied to a captured fault.
///
/// Errors returned (rather than raised) by `future` are left untouched.
pub async fn try_outcome_async_with_options<T, Fut>(
    future: Fut,
    options: TryOptions<'_>,
) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>>,
{
    match capture_async(future).await {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Error(options.apply(error)),
    }
}

/// Runs an asynchronous `function` with `resource`, then disposes it exactly once.
///
/// The function borrows the resource for the lifetime of its future, which
/// need not be `Send`. The disposal rules are those of
/// [`use_resource`](crate::control::use_resource).
///
/// # Examples
///
/// ```rust
/// use futures::FutureExt;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use trivalent::control::Disposable;
/// use trivalent::effect::use_resource_async;
///
/// static RELEASED: AtomicUsize = AtomicUsize::new(0);
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let buffer = Disposable::new(vec![1, 2, 3], |_| {
///     RELEASED.fetch_add(1, Ordering::SeqCst);
/// });
/// let outcome = use_resource_async(buffer, |buffer| {
///     async move {
///         buffer.push(4);
///         buffer.len()
///     }
///     .boxed_local()
/// })
/// .await;
///
/// assert_eq!(outcome.get_or_else(0), 4);
/// assert_eq!(RELEASED.load(Ordering::SeqCst), 1);
/// # });
/// ```
pub async fn use_resource_async<R, U, F>(mut resource: R, function: F) -> Outcome<U>
where
    R: Dispose,
    F: for<'a> FnOnce(&'a mut R) -> LocalBoxFuture<'a, U>,
{
    let result = capture_async(async { Outcome::Some(function(&mut resource).await) }).await;
    let disposal = capture(move || resource.dispose());
    settle(result, disposal)
}

/// Awaits `acquire` for a resource, then behaves like [`use_resource_async`].
///
/// If acquisition panics, nothing is disposed and the fault is returned.
///
/// # Examples
///
/// ```rust
/// use futures::FutureExt;
/// use trivalent::control::Disposable;
/// use trivalent::effect::using_async;
///
/// async fn connect() -> Disposable<u16, fn(u16)> {
///     panic!("connection refused")
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = using_async(connect(), |port| async move { **port + 1 }.boxed_local()).await;
/// assert!(outcome.error_ref().is_some_and(|e| e.message() == "connection refused"));
/// # });
/// ```
pub async fn using_async<R, U, A, F>(acquire: A, function: F) -> Outcome<U>
where
    R: Dispose,
    A: Future<Output = R>,
    F: for<'a> FnOnce(&'a mut R) -> LocalBoxFuture<'a, U>,
{
    match capture_async(acquire).await {
        Ok(resource) => use_resource_async(resource, function).await,
        Err(error) => Outcome::Error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Disposable;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_try_async_success() {
        assert_eq!(try_async(async { "ok" }).await, Outcome::value("ok"));
    }

    #[tokio::test]
    async fn test_try_async_captures_panic() {
        let outcome = try_async(async { panic!("async fault") }).await;
        let outcome: Outcome<()> = outcome;
        assert_eq!(outcome.error_ref().map(Error::message), Some("async fault"));
    }

    #[tokio::test]
    async fn test_try_outcome_async_flattens() {
        let outcome = try_outcome_async(async { Outcome::<i32>::none() }).await;
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_use_resource_async_disposes_on_fault() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let resource = Disposable::new((), move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let outcome: Outcome<i32> =
            use_resource_async(resource, |_| async { panic!("use failed") }.boxed_local()).await;

        assert!(outcome.is_error());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
