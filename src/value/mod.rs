//! Value types that make absence and failure explicit.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Outcome`]: a value, no value, or an [`Error`]
//! - [`Unit`] and [`Nothing`]: markers for "no meaningful value" and
//!   "deliberate absence"
//! - [`Sentinel`]: the opt-in rule that reads a type's empty value as absence
//!
//! # Examples
//!
//! ```rust
//! use trivalent::value::{Error, Maybe, Outcome};
//!
//! let maybe = Maybe::some(10).map(|n| n + 1);
//! assert_eq!(maybe.get_or_else(0), 11);
//!
//! let outcome: Outcome<i32> = Error::new("unavailable").into();
//! assert_eq!(outcome.get_or_else(-1), -1);
//! ```

mod error;
mod maybe;
mod outcome;
mod sentinel;
mod unit;

pub use error::{Cause, Error, PanicError, Payload};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use sentinel::Sentinel;
pub use unit::{Nothing, Unit};
