//! The "default value means absence" rule.
//!
//! [`Maybe::of`](super::Maybe::of) and [`Outcome::of`](super::Outcome::of)
//! decide presence by asking the value whether it is its type's sentinel:
//! `0`, `false`, `""`, an empty collection, or `None`. Types opt in by
//! implementing [`Sentinel`]; the explicit constructors (`Maybe::some`,
//! `Outcome::value`) never inspect the value.
//!
//! [`Unit`] and `()` are never sentinels, so a successful action is always
//! present.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::value::{Maybe, Sentinel, Unit};
//!
//! assert!(0_i32.is_sentinel());
//! assert!(!Unit.is_sentinel());
//!
//! assert!(Maybe::of(0_i32).is_none());
//! assert!(Maybe::of(Unit).is_some());
//! ```
//!
//! User types whose `Default` value should count as absent can use
//! [`sentinel_by_default!`](crate::sentinel_by_default):
//!
//! ```rust
//! use trivalent::sentinel_by_default;
//! use trivalent::value::Maybe;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! sentinel_by_default!(Point);
//!
//! assert!(Maybe::of(Point::default()).is_none());
//! assert!(Maybe::of(Point { x: 1, y: 0 }).is_some());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::unit::{Nothing, Unit};

/// A value that may stand for "no value".
pub trait Sentinel {
    /// Returns `true` if this value is its type's sentinel and should be
    /// read as absence.
    fn is_sentinel(&self) -> bool;
}

/// Implements [`Sentinel`] by comparing against `Default::default()`.
///
/// Requires the listed types to implement `Default` and `PartialEq`.
#[macro_export]
macro_rules! sentinel_by_default {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::value::Sentinel for $type {
                #[inline]
                fn is_sentinel(&self) -> bool {
                    *self == <$type as ::core::default::Default>::default()
                }
            }
        )+
    };
}

sentinel_by_default!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

macro_rules! sentinel_when_empty {
    ($([$($generics:tt)*] $type:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Sentinel for $type {
                #[inline]
                fn is_sentinel(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

sentinel_when_empty!(
    [] String,
    [] str,
    [T] Vec<T>,
    [T] [T],
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
);

macro_rules! never_sentinel {
    ($([$($generics:tt)*] $type:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Sentinel for $type {
                #[inline]
                fn is_sentinel(&self) -> bool {
                    false
                }
            }
        )+
    };
}

// Owning pointers are never null, whatever they point to.
never_sentinel!(
    [] Unit,
    [] (),
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
);

impl Sentinel for Nothing {
    #[inline]
    fn is_sentinel(&self) -> bool {
        true
    }
}

impl<T> Sentinel for Option<T> {
    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_none()
    }
}

impl<T: Sentinel + ?Sized> Sentinel for &T {
    #[inline]
    fn is_sentinel(&self) -> bool {
        (**self).is_sentinel()
    }
}

impl<T: Sentinel + ?Sized + ToOwned> Sentinel for Cow<'_, T> {
    #[inline]
    fn is_sentinel(&self) -> bool {
        (**self).is_sentinel()
    }
}
