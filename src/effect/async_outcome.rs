//! Asynchronous chaining over [`Outcome`].
//!
//! Two entry points mirror the synchronous combinators:
//!
//! - [`Outcome::map_async`] and [`Outcome::then_async`] chain an
//!   asynchronous step onto an outcome that is already known
//! - [`OutcomeFutureExt`] chains steps onto a future that will produce an
//!   outcome
//!
//! Every adapter awaits the source first and then applies the same
//! three-way branch as its synchronous counterpart. A panic while the source
//! or a step is running becomes the error state.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::effect::OutcomeFutureExt;
//! use trivalent::value::Outcome;
//!
//! async fn fetch_name(id: u32) -> Outcome<String> {
//!     if id == 1 { Outcome::value("ada".to_string()) } else { Outcome::none() }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let greeting = fetch_name(1)
//!     .map_outcome(|name| name.to_uppercase())
//!     .fold_outcome(|name| format!("hello {name}"), || "who?".to_string(), |e| e.to_string())
//!     .await;
//! assert_eq!(greeting, "hello ADA");
//! # });
//! ```

use std::future::Future;

use super::async_try::{try_async, try_outcome_async};
use crate::value::{Error, Outcome};

impl<T> Outcome<T> {
    /// Applies an asynchronous `function` to the value.
    ///
    /// A panic while creating or awaiting the step becomes the error state.
    pub async fn map_async<U, F, Fut>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => try_async(async move { function(value).await }).await,
            Self::None => Outcome::None,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Asynchronous monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::Outcome;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let outcome = Outcome::of("test")
    ///     .then_async(|text| async move { Outcome::value(text.len()) })
    ///     .await;
    /// assert_eq!(outcome, Outcome::value(4));
    /// # });
    /// ```
    pub async fn then_async<U, F, Fut>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Some(value) => try_outcome_async(async move { function(value).await }).await,
            Self::None => Outcome::None,
            Self::Error(error) => Outcome::Error(error),
        }
    }
}

/// Combinators for futures that produce an [`Outcome`].
///
/// Implemented for every `Future<Output = Outcome<T>>`.
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the source, turning a panic into the error state.
    fn settled(self) -> impl Future<Output = Outcome<T>> {
        try_outcome_async(self)
    }

    /// Awaits the source, then [`Outcome::map`].
    fn map_outcome<U, F>(self, function: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.settled().await.map(function) }
    }

    /// Awaits the source, then [`Outcome::then`].
    fn then_outcome<U, F>(self, function: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.settled().await.then(function) }
    }

    /// Awaits the source, then [`Outcome::map_async`].
    fn map_outcome_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.settled().await.map_async(function).await }
    }

    /// Awaits the source, then [`Outcome::then_async`].
    fn then_outcome_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.settled().await.then_async(function).await }
    }

    /// Awaits the source, then [`Outcome::on_error`].
    fn tap_error<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error),
    {
        async move { self.settled().await.on_error(action) }
    }

    /// Awaits the source, then [`Outcome::on_some_value`].
    fn tap_some<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.settled().await.on_some_value(action) }
    }

    /// Awaits the source, then [`Outcome::on_none_value`].
    fn tap_none<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(),
    {
        async move { self.settled().await.on_none_value(action) }
    }

    /// Awaits the source, then [`Outcome::fold`].
    fn fold_outcome<R, S, N, E>(
        self,
        on_some: S,
        on_none: N,
        on_error: E,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
        E: FnOnce(Error) -> R,
    {
        async move { self.settled().await.fold(on_some, on_none, on_error) }
    }

    /// Awaits the source, then [`Outcome::get_or_else`].
    fn get_or_else(self, fallback: T) -> impl Future<Output = T> {
        async move { self.settled().await.get_or_else(fallback) }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
