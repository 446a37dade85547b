//! Higher-kinded type emulation.
//!
//! Rust has no native higher-kinded types. A type that implements
//! [`TypeConstructor`] names the type it is applied to (`Inner`) and the same
//! constructor applied to any other type (`WithType<B>`), which is enough to
//! state `Functor` and `Monad` generically.

use crate::value::{Maybe, Outcome};

/// A type constructor applied to `Inner`.
///
/// `WithType<Inner>` must be the implementing type itself.
///
/// # Examples
///
/// ```rust
/// use trivalent::typeclass::TypeConstructor;
/// use trivalent::value::Maybe;
///
/// fn relabel<T: TypeConstructor>(_value: T) -> Option<T::WithType<String>> {
///     None
/// }
///
/// let relabeled: Option<Maybe<String>> = relabel(Maybe::some(1));
/// assert!(relabeled.is_none());
/// ```
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> TypeConstructor for Outcome<T> {
    type Inner = T;
    type WithType<B> = Outcome<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Unit;

    fn assert_inner<T: TypeConstructor<Inner = I>, I>() {}

    #[test]
    fn test_inner_types() {
        assert_inner::<Maybe<i32>, i32>();
        assert_inner::<Outcome<Unit>, Unit>();
    }

    #[test]
    fn test_with_type_keeps_constructor() {
        fn swap<T: TypeConstructor>(_value: &T) -> Option<T::WithType<&'static str>> {
            None
        }
        let swapped: Option<Outcome<&str>> = swap(&Outcome::value(1_u8));
        assert!(swapped.is_none());
    }
}
