//! The error record carried by [`Outcome`](super::Outcome).
//!
//! There is exactly one error kind. An [`Error`] bundles a human-readable
//! message, an optional underlying cause and an optional opaque payload for
//! caller-supplied diagnostic context. It is immutable once built and cheap
//! to clone, since the cause and payload are shared.
//!
//! Faults captured from panics carry a [`PanicError`] as their cause.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::value::Error;
//!
//! let parse_failure = "x".parse::<i32>().unwrap_err();
//! let error = Error::from_cause(parse_failure).with_data(42_u32);
//!
//! assert_eq!(error.message(), "invalid digit found in string");
//! assert!(error.cause().is_some());
//! assert_eq!(error.data::<u32>(), Some(&42));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use thiserror::Error as ThisError;

/// Shared handle to the underlying cause of an [`Error`].
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Shared handle to the opaque payload of an [`Error`].
pub type Payload = Arc<dyn Any + Send + Sync + 'static>;

/// A failed computation.
///
/// Equality compares the message and the *identity* of the shared cause and
/// payload: two clones of the same error are equal, two independently built
/// errors with equal messages and no cause or payload are equal too.
#[derive(Clone, ThisError)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    cause: Option<Cause>,
    data: Option<Payload>,
}

impl Error {
    /// Creates an error with the given message and no cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::Error;
    ///
    /// let error = Error::new("boom");
    /// assert_eq!(error.message(), "boom");
    /// assert!(error.cause().is_none());
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            data: None,
        }
    }

    /// Creates an error from an underlying cause.
    ///
    /// The message defaults to the cause's `Display` output.
    #[must_use]
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: cause.to_string(),
            cause: Some(Arc::new(cause)),
            data: None,
        }
    }

    /// Creates an error from a panic payload, as returned by
    /// [`std::panic::catch_unwind`].
    ///
    /// The message is the panic message, and the cause is a [`PanicError`]
    /// holding the same message.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::from_cause(PanicError::from_payload(payload))
    }

    /// Replaces the message, keeping the cause and payload.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// Attaches (or replaces) the underlying cause, keeping the message.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            cause: Some(Arc::new(cause)),
            ..self
        }
    }

    /// Attaches (or replaces) an opaque payload.
    #[must_use]
    pub fn with_data<D>(self, data: D) -> Self
    where
        D: Any + Send + Sync,
    {
        self.with_payload(Arc::new(data))
    }

    /// Attaches an already shared payload.
    #[must_use]
    pub fn with_payload(self, data: Payload) -> Self {
        Self {
            data: Some(data),
            ..self
        }
    }

    /// Returns the human-readable message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause, if any.
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the payload downcast to `D`, if a payload of that type is attached.
    #[must_use]
    pub fn data<D: Any>(&self) -> Option<&D> {
        self.data.as_deref().and_then(|data| data.downcast_ref::<D>())
    }

    /// Returns `true` if a payload is attached.
    #[inline]
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Returns `true` if this error was captured from a panic.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        self.cause()
            .is_some_and(|cause| cause.downcast_ref::<PanicError>().is_some())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Error")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .field("data", &self.data.as_ref().map(|_| ".."))
            .finish()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        let same_data = match (&self.data, &other.data) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        self.message == other.message && same_cause && same_data
    }
}

/// The cause attached to errors captured from a panic.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Extracts the message of a panic payload.
    ///
    /// Payloads that are neither `&str` nor `String` produce `"Unknown panic"`.
    #[must_use]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }

    /// Returns the panic message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

static_assertions::assert_impl_all!(Error: Send, Sync, Clone, std::error::Error);
