//! # trivalent
//!
//! Algebraic substitutes for null and exceptions.
//!
//! ## Overview
//!
//! This library provides small value types that make absence and failure
//! explicit, together with combinators that chain computations over them:
//!
//! - **Values**: [`Maybe`](value::Maybe) (present/absent), [`Outcome`](value::Outcome)
//!   (value/no value/error), the [`Error`](value::Error) record and the
//!   [`Unit`](value::Unit) and [`Nothing`](value::Nothing) markers
//! - **Control**: fault-capturing `try_*` helpers, scoped resource disposal
//!   and the `Choose2`..`Choose5` tagged unions
//! - **Validation**: a fluent rule accumulator
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` instances for the
//!   value types
//! - **Effect**: async adapters, retry, timeout and fire-and-forget helpers
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Functor`, `Applicative` and `Monad`
//! - `choose`: `Choose2`..`Choose5`
//! - `validation`: `Validate` and `ValidationResult`
//! - `async`: async adapters on top of `tokio` and `futures`
//! - `serde`: serialization for the validation types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use trivalent::prelude::*;
//!
//! let shouted = Outcome::of("test")
//!     .map(str::to_uppercase)
//!     .fold(|value| value, || "none".to_string(), |error| error.message().to_string());
//! assert_eq!(shouted, "TEST");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use trivalent::prelude::*;
/// ```
pub mod prelude {

    pub use crate::value::*;

    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "validation")]
    pub use crate::validation::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

pub mod value;

pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "async")]
pub mod effect;
