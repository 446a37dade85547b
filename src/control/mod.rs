//! Control structures over the value types.
//!
//! - [`try_with`], [`try_outcome`], [`try_run`]: capture faults as errors
//! - [`use_resource`], [`using`]: scoped disposal of a [`Dispose`] resource
//! - [`Choose2`] .. [`Choose5`]: closed tagged unions (feature `choose`)
//!
//! # Examples
//!
//! ## Capturing Faults
//!
//! ```rust
//! use trivalent::control::try_with;
//!
//! let parsed = try_with(|| "12".parse::<i32>().expect("numeric input"));
//! assert_eq!(parsed.get_or_else(0), 12);
//!
//! let failed = try_with(|| "twelve".parse::<i32>().expect("numeric input"));
//! assert!(failed.is_error());
//! ```
//!
//! ## Scoped Disposal
//!
//! ```rust
//! use std::cell::RefCell;
//! use trivalent::control::{Disposable, use_resource};
//!
//! let log = RefCell::new(Vec::new());
//! let file = Disposable::new("data.bin", |name| log.borrow_mut().push(format!("closed {name}")));
//!
//! let outcome = use_resource(file, |_| -> usize { panic!("read failed") });
//! assert!(outcome.is_error());
//! assert_eq!(log.borrow().as_slice(), ["closed data.bin"]);
//! ```

#[cfg(feature = "choose")]
mod choose;
mod resource;
mod trying;

#[cfg(feature = "choose")]
pub use choose::{Choose2, Choose3, Choose4, Choose5};
pub use resource::{Disposable, Dispose, use_resource, use_resource_outcome, using};
pub use trying::{
    TryOptions, try_outcome, try_outcome_with_options, try_run, try_with, try_with_options,
};

#[cfg(feature = "async")]
pub(crate) use resource::settle;
#[cfg(feature = "async")]
pub(crate) use trying::capture;
