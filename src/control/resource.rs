//! Scoped resource disposal.
//!
//! [`use_resource`] runs a function with a resource and disposes the
//! resource exactly once afterwards, whether the function returned normally
//! or panicked. Disposal happens before the result reaches the caller.
//!
//! Disposal faults are not swallowed:
//!
//! - after a successful function, a panicking `dispose` becomes the error
//! - after a faulted function, the original fault wins and the disposal
//!   fault is logged at `error` level
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use trivalent::control::{Disposable, use_resource};
//!
//! let disposed = Cell::new(0);
//! let connection = Disposable::new(vec![1, 2, 3], |_| disposed.set(disposed.get() + 1));
//!
//! let total = use_resource(connection, |items| items.iter().sum::<i32>());
//! assert_eq!(total.get_or_else(0), 6);
//! assert_eq!(disposed.get(), 1);
//! ```

use std::ops::{Deref, DerefMut};

use super::trying::capture;
use crate::value::{Error, Outcome};

/// A resource with an explicit release step.
///
/// `dispose` consumes the resource, so it can run at most once.
pub trait Dispose {
    /// Releases the resource. A panic here is a disposal fault.
    fn dispose(self);
}

/// Pairs a value with the routine that releases it.
///
/// Dereferences to the wrapped value.
pub struct Disposable<T, F>
where
    F: FnOnce(T),
{
    value: T,
    release: F,
}

impl<T, F> Disposable<T, F>
where
    F: FnOnce(T),
{
    /// Wraps `value`; `release` receives it on disposal.
    pub const fn new(value: T, release: F) -> Self {
        Self { value, release }
    }
}

impl<T, F> Dispose for Disposable<T, F>
where
    F: FnOnce(T),
{
    fn dispose(self) {
        (self.release)(self.value);
    }
}

impl<T, F> Deref for Disposable<T, F>
where
    F: FnOnce(T),
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F> DerefMut for Disposable<T, F>
where
    F: FnOnce(T),
{
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// Merges the function's result with the disposal result.
pub(crate) fn settle<U>(result: Result<Outcome<U>, Error>, disposal: Result<(), Error>) -> Outcome<U> {
    match (result, disposal) {
        (Ok(outcome), Ok(())) => outcome,
        (Err(error), Ok(())) => Outcome::Error(error),
        (Ok(Outcome::Error(error)) | Err(error), Err(disposal_error)) => {
            tracing::error!(
                disposal = disposal_error.message(),
                original = error.message(),
                "resource disposal faulted after the computation failed; keeping the original error"
            );
            Outcome::Error(error)
        }
        (Ok(_), Err(disposal_error)) => Outcome::Error(disposal_error),
    }
}

/// Runs `function` with `resource`, then disposes it exactly once.
///
/// A panic in `function` becomes `Outcome::Error`.
pub fn use_resource<R, U, F>(resource: R, function: F) -> Outcome<U>
where
    R: Dispose,
    F: FnOnce(&mut R) -> U,
{
    use_resource_outcome(resource, |resource| Outcome::Some(function(resource)))
}

/// [`use_resource`] for an `Outcome`-returning function.
pub fn use_resource_outcome<R, U, F>(mut resource: R, function: F) -> Outcome<U>
where
    R: Dispose,
    F: FnOnce(&mut R) -> Outcome<U>,
{
    let result = capture(|| function(&mut resource));
    let disposal = capture(move || resource.dispose());
    settle(result, disposal)
}

/// Acquires a resource through `acquire`, then behaves like [`use_resource`].
///
/// If acquisition panics, nothing is disposed and the fault is returned.
///
/// # Examples
///
/// ```rust
/// use trivalent::control::{Disposable, using};
///
/// let outcome = using(
///     || -> Disposable<i32, fn(i32)> { panic!("connection refused") },
///     |resource| **resource + 1,
/// );
/// assert!(outcome.is_error());
/// ```
pub fn using<R, U, A, F>(acquire: A, function: F) -> Outcome<U>
where
    R: Dispose,
    A: FnOnce() -> R,
    F: FnOnce(&mut R) -> U,
{
    match capture(acquire) {
        Ok(resource) => use_resource(resource, function),
        Err(error) => Outcome::Error(error),
    }
}
