//! Outcome type - the three-state result of a computation.
//!
//! An `Outcome<T>` is exactly one of:
//!
//! - `Some(T)`: the computation succeeded with a value
//! - `None`: the computation succeeded without a value
//! - `Error(Error)`: the computation failed
//!
//! The error state takes precedence in every combinator. Chaining with
//! [`Outcome::map`] and [`Outcome::then`] captures panics raised by the
//! chained function and turns them into the error state, so individual
//! steps need no error handling of their own: the first fault short-circuits
//! every later step.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::value::{Error, Outcome};
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     text.parse::<i32>().map_or_else(|error| Error::from_cause(error).into(), Outcome::value)
//! }
//!
//! let doubled = Outcome::of("21").then(parse).map(|n| n * 2);
//! assert_eq!(doubled, Outcome::value(42));
//!
//! let failed = Outcome::of("x").then(parse).map(|n| n * 2);
//! assert!(failed.is_error());
//!
//! let skipped = Outcome::of("").then(parse);
//! assert!(skipped.is_none());
//! ```

use crate::control::{try_outcome, try_with};

use super::error::Error;
use super::maybe::Maybe;
use super::sentinel::Sentinel;
use super::unit::{Nothing, Unit};

/// The result of a computation: a value, no value, or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Success with a value.
    Some(T),
    /// Success without a value.
    None,
    /// Failure.
    Error(Error),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Success with a value. The value is never inspected.
    #[inline]
    pub const fn value(value: T) -> Self {
        Self::Some(value)
    }

    /// Success without a value.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Failure. Bypasses any value inspection.
    #[inline]
    #[must_use]
    pub const fn error(error: Error) -> Self {
        Self::Error(error)
    }

    /// Success, treating the value's sentinel as "no value".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::{Outcome, Unit};
    ///
    /// assert!(Outcome::of(10.34).has_value());
    /// assert!(Outcome::of(0).is_none());
    /// assert!(Outcome::of(false).is_none());
    /// assert!(Outcome::of(Unit).has_value());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Sentinel,
    {
        Maybe::of(value).into()
    }

    /// Converts a standard `Option` into a successful outcome.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for success with a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` for success without a value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` for failure.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Alias for [`Outcome::is_some`].
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.is_some()
    }

    /// Alias for [`Outcome::is_error`].
    #[inline]
    pub const fn has_error(&self) -> bool {
        self.is_error()
    }

    /// Returns `true` unless this is a failure.
    #[inline]
    pub const fn is_success(&self) -> bool {
        !self.is_error()
    }

    /// Borrows the value, if any.
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None | Self::Error(_) => None,
        }
    }

    /// Borrows the error, if any.
    #[inline]
    pub const fn error_ref(&self) -> Option<&Error> {
        match self {
            Self::Error(error) => Some(error),
            Self::Some(_) | Self::None => None,
        }
    }

    /// Borrows the contents.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Some(value) => Outcome::Some(value),
            Self::None => Outcome::None,
            Self::Error(error) => Outcome::Error(error.clone()),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or `fallback` on failure or no value.
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None | Self::Error(_) => fallback,
        }
    }

    /// Returns the value, or computes a fallback on failure or no value.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None | Self::Error(_) => fallback(),
        }
    }

    /// Exhaustive three-way dispatch.
    ///
    /// The error state is checked first; exactly one handler runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::{Error, Outcome};
    ///
    /// let outcome: Outcome<&str> = Error::new("error").into();
    /// let text = outcome.fold(|s| s.to_string(), || "none".to_string(), |e| e.message().to_string());
    /// assert_eq!(text, "error");
    /// ```
    #[inline]
    pub fn fold<R, S, N, E>(self, on_some: S, on_none: N, on_error: E) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
        E: FnOnce(Error) -> R,
    {
        match self {
            Self::Error(error) => on_error(error),
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Two-way dispatch that collapses both success states into [`Unit`].
    #[inline]
    pub fn fold_success<R, S, E>(self, on_success: S, on_error: E) -> R
    where
        S: FnOnce(Unit) -> R,
        E: FnOnce(Error) -> R,
    {
        match self {
            Self::Error(error) => on_error(error),
            Self::Some(_) | Self::None => on_success(Unit),
        }
    }

    /// Converts into a `Maybe`, discarding any error.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None | Self::Error(_) => Maybe::None,
        }
    }

    /// Converts into a standard `Result`, keeping "no value" as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the carried [`Error`] if this is a failure.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, Error> {
        match self {
            Self::Some(value) => Ok(Some(value)),
            Self::None => Ok(None),
            Self::Error(error) => Err(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies `function` to the value; a panic in `function` becomes the
    /// error state. Failure and "no value" propagate without calling it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::Outcome;
    ///
    /// let outcome = Outcome::value(2_u32).map(|n| n.checked_sub(5).expect("underflow"));
    /// assert!(outcome.is_error());
    /// ```
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => try_with(move || function(value)),
            Self::None => Outcome::None,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Monadic bind with the same fault capture as [`Outcome::map`].
    pub fn then<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Some(value) => try_outcome(move || function(value)),
            Self::None => Outcome::None,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Runs an action on the value, yielding `Outcome<Unit>`.
    pub fn then_run<F>(self, action: F) -> Outcome<Unit>
    where
        F: FnOnce(T),
    {
        self.map(|value| {
            action(value);
            Unit
        })
    }

    /// Applies a fallible function; an `Err` is a fault like a panic and
    /// becomes the error state with the `Err` as cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::Outcome;
    ///
    /// let parsed = Outcome::value("12").try_map(str::parse::<u8>);
    /// assert_eq!(parsed, Outcome::value(12));
    ///
    /// let failed = Outcome::value("300").try_map(str::parse::<u8>);
    /// assert_eq!(failed.error_ref().map(|e| e.message()), Some("number too large to fit in target type"));
    /// ```
    pub fn try_map<U, E, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.then(|value| match function(value) {
            Ok(mapped) => Outcome::Some(mapped),
            Err(error) => Outcome::Error(Error::from_cause(error)),
        })
    }

    /// Transforms the error; values pass through.
    #[must_use]
    pub fn map_error<F>(self, function: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Error(error) => Self::Error(function(error)),
            other => other,
        }
    }

    /// Sequences an independent outcome: returns `next` unless `self` is a
    /// failure, in which case the failure propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::value(1).combine(Outcome::value("b")), Outcome::value("b"));
    ///
    /// let failed: Outcome<i32> = Error::new("first").into();
    /// assert!(failed.combine(Outcome::value("b")).is_error());
    /// ```
    pub fn combine<U>(self, next: Outcome<U>) -> Outcome<U> {
        match self {
            Self::Error(error) => Outcome::Error(error),
            Self::Some(_) | Self::None => next,
        }
    }

    /// Combines two values; the first failure wins, then "no value".
    pub fn zip_with<U, R, F>(self, other: Outcome<U>, function: F) -> Outcome<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.then(|left| other.map(|right| function(left, right)))
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Calls `action` with the error on failure; returns `self` unchanged.
    #[must_use]
    pub fn on_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Self::Error(error) = &self {
            action(error);
        }
        self
    }

    /// Calls `action` with the value on success with a value; returns `self` unchanged.
    #[must_use]
    pub fn on_some_value<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` on success without a value; returns `self` unchanged.
    #[must_use]
    pub fn on_none_value<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }
}

impl<T> Default for Outcome<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl<T> From<Nothing> for Outcome<T> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Self::None
    }
}

impl<T> From<Maybe<T>> for Outcome<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Self::Some(value),
            Maybe::None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        result.map_or_else(Self::Error, Self::Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn failure<T>() -> Outcome<T> {
        Outcome::error(Error::new("failure"))
    }

    #[rstest]
    #[case(Outcome::value(1), "some")]
    #[case(Outcome::none(), "none")]
    #[case(failure(), "error")]
    fn test_fold_dispatches_by_state(#[case] outcome: Outcome<i32>, #[case] expected: &str) {
        assert_eq!(outcome.fold(|_| "some", || "none", |_| "error"), expected);
    }

    #[test]
    fn test_fold_success_collapses_success_states() {
        assert_eq!(Outcome::value(Unit).fold_success(|_| 1, |_| -1), 1);
        assert_eq!(Outcome::<Unit>::none().fold_success(|_| 1, |_| -1), 1);
        assert_eq!(failure::<Unit>().fold_success(|_| 1, |_| -1), -1);
    }

    #[test]
    fn test_get_or_else_on_each_state() {
        assert_eq!(Outcome::value("test").get_or_else(""), "test");
        assert_eq!(Outcome::<&str>::none().get_or_else(""), "");
        assert_eq!(failure::<&str>().get_or_else("fallback"), "fallback");
    }

    #[test]
    fn test_map_captures_panic_message() {
        let outcome = Outcome::value(1).map(|_: i32| -> i32 { panic!("mapped panic") });
        let error = outcome.error_ref().cloned().expect("error state");
        assert_eq!(error.message(), "mapped panic");
        assert!(error.is_panic());
    }

    #[test]
    fn test_then_skips_function_on_none() {
        let mut called = false;
        let outcome = Outcome::<i32>::none().then(|n| {
            called = true;
            Outcome::value(n)
        });
        assert!(outcome.is_none());
        assert!(!called);
    }

    #[test]
    fn test_then_run_on_value_is_unit() {
        assert_eq!(Outcome::value("test").then_run(|_| ()), Outcome::value(Unit));
    }

    #[test]
    fn test_map_error_only_touches_errors() {
        let renamed = failure::<i32>().map_error(|error| error.with_message("renamed"));
        assert_eq!(renamed.error_ref().map(Error::message), Some("renamed"));
        assert_eq!(Outcome::value(1).map_error(|_| Error::new("x")), Outcome::value(1));
    }

    #[test]
    fn test_zip_with_prefers_first_error() {
        let left: Outcome<i32> = Error::new("left").into();
        let right: Outcome<i32> = Error::new("right").into();
        let zipped = left.zip_with(right, |a, b| a + b);
        assert_eq!(zipped.error_ref().map(Error::message), Some("left"));
        assert_eq!(
            Outcome::value(2).zip_with(Outcome::value(3), |a, b| a + b),
            Outcome::value(5)
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Outcome::from(Maybe::some(1)), Outcome::value(1));
        assert_eq!(Outcome::<i32>::from(Nothing), Outcome::none());
        assert_eq!(Outcome::from(Some(2)), Outcome::value(2));
        assert_eq!(Outcome::<i32>::from(Ok::<_, Error>(3)), Outcome::value(3));
        assert_eq!(Outcome::value(4).into_result(), Ok(Some(4)));
        assert_eq!(Outcome::<i32>::none().into_maybe(), Maybe::none());
    }
}
