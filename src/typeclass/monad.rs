//! Monad type class.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::value::{Maybe, Outcome};

/// Applicatives whose next step can depend on the previous value.
///
/// # Examples
///
/// ```rust
/// use trivalent::typeclass::Monad;
/// use trivalent::value::Maybe;
///
/// fn parse_positive(text: &str) -> Maybe<i32> {
///     Maybe::from_option(text.parse::<i32>().ok().filter(|&n| n > 0))
/// }
///
/// let doubled = Maybe::some("21").flat_map(parse_positive).flat_map(|n| Maybe::some(n * 2));
/// assert_eq!(doubled, Maybe::some(42));
/// assert_eq!(Maybe::some("-1").flat_map(parse_positive), Maybe::none());
/// ```
pub trait Monad: Applicative {
    /// Applies `function` to the held value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the first value.
    #[inline]
    fn then_do<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.then(function)
    }
}

impl<T> Monad for Outcome<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(T) -> Outcome<B>,
    {
        self.then(function)
    }
}
