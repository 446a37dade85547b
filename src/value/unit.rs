//! Marker types for "no meaningful value" and "deliberate absence".
//!
//! [`Unit`] is the return placeholder of action-shaped computations, and is
//! always a present value. [`Nothing`] is the opposite: converting it into a
//! [`Maybe`](super::Maybe) or [`Outcome`](super::Outcome) yields the absent
//! state.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::value::{Maybe, Nothing, Outcome, Unit};
//!
//! let done: Outcome<Unit> = Outcome::value(Unit);
//! assert!(done.has_value());
//!
//! let missing: Maybe<i32> = Nothing.into();
//! assert!(missing.is_none());
//! ```

use std::fmt;

/// The result of a computation that produces no meaningful value.
///
/// `Unit` plays the role of `()` at the library's API boundary. Unlike a
/// sentinel value it is never treated as absent, so a successful action is
/// always distinguishable from a missing value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

impl Unit {
    /// Returns the single `Unit` value.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

/// Deliberate absence of a value.
///
/// `Nothing` converts into the absent state of every wrapper in this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nothing;

impl fmt::Display for Nothing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Nothing")
    }
}
