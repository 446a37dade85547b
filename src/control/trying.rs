//! Fault-capturing entry points.
//!
//! The `try_*` functions run a computation and convert a panic raised by it
//! into an [`Outcome::Error`]. The error's message is the panic message and
//! its cause is a [`PanicError`](crate::value::PanicError).
//!
//! # Examples
//!
//! ```rust
//! use std::hint::black_box;
//! use trivalent::control::try_with;
//!
//! let divided = try_with(|| 10 / black_box(0));
//! let message = divided.error_ref().map(|error| error.message().to_string());
//! assert_eq!(message.as_deref(), Some("attempt to divide by zero"));
//!
//! assert_eq!(try_with(|| 10 / black_box(2)).get_or_else(0), 5);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::value::{Error, Outcome, Payload, Unit};

/// Runs `function`, returning its panic as an [`Error`].
pub(crate) fn capture<T, F>(function: F) -> Result<T, Error>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let error = Error::from_panic(&*payload);
        tracing::debug!(error = error.message(), "captured fault");
        error
    })
}

/// Runs `function` and wraps its return value as `Outcome::Some`.
///
/// A panic becomes `Outcome::Error`.
pub fn try_with<T, F>(function: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    capture(function).map_or_else(Outcome::Error, Outcome::Some)
}

/// Runs an `Outcome`-returning `function`, flattening the result.
///
/// A panic becomes `Outcome::Error`.
pub fn try_outcome<T, F>(function: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    capture(function).unwrap_or_else(Outcome::Error)
}

/// Runs an action, returning `Outcome<Unit>`.
///
/// # Examples
///
/// ```rust
/// use trivalent::control::try_run;
/// use trivalent::value::Unit;
///
/// assert_eq!(try_run(|| ()).get_or_else(Unit), Unit);
/// assert!(try_run(|| panic!("no")).is_error());
/// ```
pub fn try_run<F>(action: F) -> Outcome<Unit>
where
    F: FnOnce(),
{
    try_with(|| {
        action();
        Unit
    })
}

/// Adjustments applied to the error produced by a faulted computation.
///
/// # Examples
///
/// ```rust
/// use trivalent::control::{TryOptions, try_with_options};
///
/// let mut observed = None;
/// let outcome = try_with_options(
///     || -> i32 { panic!("raw") },
///     TryOptions::new()
///         .message("loading settings failed")
///         .data("settings.toml")
///         .on_error(|error| observed = Some(error.message().to_string())),
/// );
///
/// let error = outcome.error_ref().expect("faulted");
/// assert_eq!(error.message(), "loading settings failed");
/// assert_eq!(error.cause().map(ToString::to_string).as_deref(), Some("raw"));
/// assert_eq!(error.data::<&str>(), Some(&"settings.toml"));
/// assert_eq!(observed.as_deref(), Some("loading settings failed"));
/// ```
#[derive(Default)]
pub struct TryOptions<'a> {
    message: Option<String>,
    data: Option<Payload>,
    handler: Option<Box<dyn FnOnce(&Error) + 'a>>,
}

impl<'a> TryOptions<'a> {
    /// No adjustments: the fault's own message, no payload, no handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the error message. The fault stays available as the cause.
    #[must_use]
    pub fn message(self, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    /// Attaches a payload to the error.
    #[must_use]
    pub fn data<D>(self, data: D) -> Self
    where
        D: std::any::Any + Send + Sync,
    {
        Self {
            data: Some(std::sync::Arc::new(data)),
            ..self
        }
    }

    /// Installs a handler that observes the final error.
    #[must_use]
    pub fn on_error<H>(self, handler: H) -> Self
    where
        H: FnOnce(&Error) + 'a,
    {
        Self {
            handler: Some(Box::new(handler)),
            ..self
        }
    }

    pub(crate) fn apply(self, error: Error) -> Error {
        let error = match self.message {
            Some(message) => error.with_message(message),
            None => error,
        };
        let error = match self.data {
            Some(data) => error.with_payload(data),
            None => error,
        };
        if let Some(handler) = self.handler {
            handler(&error);
        }
        error
    }
}

impl fmt::Debug for TryOptions<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryOptions")
            .field("message", &self.message)
            .field("data", &self.data.is_some())
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// [`try_with`] with [`TryOptions`] applied to a captured fault.
pub fn try_with_options<T, F>(function: F, options: TryOptions<'_>) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match capture(function) {
        Ok(value) => Outcome::Some(value),
        Err(error) => Outcome::Error(options.apply(error)),
    }
}

/// [`try_outcome`] with [`TryOptions`] applied to a captured fault.
///
/// Errors returned (rather than raised) by `function` are left untouched.
pub fn try_outcome_with_options<T, F>(function: F, options: TryOptions<'_>) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    match capture(function) {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Error(options.apply(error)),
    }
}
