//! Type class traits over the value types (feature `typeclass`).
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: mapping over the held value
//! - [`Applicative`]: lifting values and combining independent computations
//! - [`Monad`]: sequencing dependent computations
//!
//! [`Maybe`](crate::value::Maybe) and [`Outcome`](crate::value::Outcome)
//! implement all of them, so code can be written once against the traits.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::typeclass::{Functor, Monad};
//! use trivalent::value::{Maybe, Outcome};
//!
//! fn describe<M>(container: M) -> M::WithType<String>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::some(7)), Maybe::some("#7".to_string()));
//! assert_eq!(describe(Outcome::value(7)), Outcome::value("#7".to_string()));
//!
//! let halved = Outcome::value(8).flat_map(|n| Outcome::value(n / 2));
//! assert_eq!(halved, Outcome::value(4));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
