//! Applicative type class.
//!
//! # Laws
//!
//! ```text
//! Self::pure(a).fmap(f) == Self::pure(f(a))
//! fa.map2(Self::pure(b), |a, b| (a, b)) == fa.fmap(|a| (a, b))
//! ```

use super::functor::Functor;
use crate::value::{Maybe, Outcome};

/// Functors that can lift a plain value and combine independent results.
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::typeclass::Applicative;
    /// use trivalent::value::Outcome;
    ///
    /// let lifted: Outcome<&str> = <Outcome<()>>::pure("ready");
    /// assert_eq!(lifted, Outcome::value("ready"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two independent values with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::typeclass::Applicative;
    /// use trivalent::value::Maybe;
    ///
    /// let total = Maybe::some(2).map2(Maybe::some(3), |a, b| a + b);
    /// assert_eq!(total, Maybe::some(5));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two independent values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.zip_with(other, function)
    }
}

// Evaluated left to right: the first state that is not a value wins.
impl<T> Applicative for Outcome<T> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B> {
        Outcome::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B>, function: F) -> Outcome<C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.zip_with(other, function)
    }
}
