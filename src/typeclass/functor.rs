//! Functor type class.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws hold for functions that do not panic. A panicking function
//! turns an `Outcome` into its error state, so composing it changes which
//! step reports the fault but not the resulting state.

use super::higher::TypeConstructor;
use crate::value::{Maybe, Outcome};

/// Types whose held value can be transformed without changing their shape.
///
/// # Examples
///
/// ```rust
/// use trivalent::typeclass::Functor;
/// use trivalent::value::Maybe;
///
/// let length = Maybe::some("hello").fmap(str::len);
/// assert_eq!(length, Maybe::some(5));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value, if any.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a borrow of the held value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::typeclass::Functor;
    /// use trivalent::value::Outcome;
    ///
    /// assert_eq!(Outcome::value(1).replace("done"), Outcome::value("done"));
    /// assert!(Outcome::<i32>::none().replace("done").is_none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

// Routed through `Outcome::map`, so a panic becomes the error state.
impl<T> Functor for Outcome<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}
