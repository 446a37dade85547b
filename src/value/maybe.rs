//! Maybe type - a value that may or may not be present.
//!
//! `Maybe<T>` is a two-state wrapper: `Some(T)` or `None`. Presence is an
//! explicit discriminant; the explicit constructors never inspect the value.
//! [`Maybe::of`] additionally supports the sentinel rule, where the type's
//! "empty" value (`0`, `""`, `false`, ...) reads as absence.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::value::Maybe;
//!
//! let name = Maybe::some("ada");
//! let greeting = name
//!     .map(|name| format!("hello {name}"))
//!     .get_or_else("nobody".to_string());
//! assert_eq!(greeting, "hello ada");
//!
//! // Absence propagates through every step
//! let empty: Maybe<&str> = Maybe::none();
//! assert!(empty.map(str::len).is_none());
//! ```

use super::sentinel::Sentinel;
use super::unit::{Nothing, Unit};

/// A value that is either present (`Some`) or absent (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the absent state.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Alias for [`Maybe::none`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::None
    }

    /// Wraps a value, treating its type's sentinel as absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::{Maybe, Unit};
    ///
    /// assert!(Maybe::of(1).is_some());
    /// assert!(Maybe::of(0).is_none());
    /// assert!(Maybe::of("").is_none());
    /// assert!(Maybe::of(Unit).is_some());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Sentinel,
    {
        if value.is_sentinel() {
            Self::None
        } else {
            Self::Some(value)
        }
    }

    /// Converts a standard `Option`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the value, if present.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value if present, otherwise `fallback`.
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the value if present, otherwise computes a fallback.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// Exhaustive two-way dispatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::Maybe;
    ///
    /// let described = Maybe::some(3).fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(described, "got 3");
    /// ```
    #[inline]
    pub fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies `function` to a present value; absence propagates.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Monadic bind: applies a `Maybe`-returning function to a present value.
    ///
    /// `Maybe::none().then(f) == Maybe::none()` for every `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::value::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).then(half).then(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).then(half).then(half), Maybe::none());
    /// ```
    #[inline]
    pub fn then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Runs an action on a present value, yielding `Maybe<Unit>`.
    #[inline]
    pub fn then_run<F>(self, action: F) -> Maybe<Unit>
    where
        F: FnOnce(T),
    {
        self.map(|value| {
            action(value);
            Unit
        })
    }

    /// Combines two present values; absent if either is absent.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, function: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some(function(left, right)),
            _ => Maybe::None,
        }
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Calls `action` with the value if present, then returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` if absent, then returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> From<Nothing> for Maybe<T> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Self::None
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
