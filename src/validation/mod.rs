//! Fluent rule accumulation (feature `validation`).
//!
//! [`Validate`] evaluates each rule as soon as it is added and records a
//! [`ValidationError`] for every rule that fails. Rules never short-circuit:
//! all of them run, and the errors keep the order in which the rules were
//! added.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::validation::Validate;
//!
//! let name = "Ada";
//! let age = 46;
//!
//! let result = Validate::new()
//!     .rule(("name", name), |name| !name.trim().is_empty(), "Name is required.")
//!     .rule(("age", age), |age| age < 30, "Age must be lower than 30.")
//!     .rule(("age", age), |age| age > 0, "Age must be positive.")
//!     .run();
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.errors()[0].property(), "age");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::{Error, Outcome, Unit};

/// A failed rule: the property it was checked against and its message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{property}: {message}")]
pub struct ValidationError {
    property: String,
    message: String,
}

impl ValidationError {
    /// Creates a validation error.
    #[must_use]
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }

    /// The name of the checked property.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The rule's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The snapshot produced by [`Validate::run`].
///
/// Validity is always derived from the errors. When deserialized, a stored
/// `is_valid` flag is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "ValidationRecord")
)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// `true` when no rule failed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The failed rules, in the order they were added.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the result, returning the failed rules.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Iterates over the messages recorded for `property`.
    pub fn messages_for<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |error| error.property == property)
            .map(ValidationError::message)
    }

    /// Converts the result into an [`Outcome`].
    ///
    /// A valid result becomes `Outcome::Some(Unit)`. An invalid one becomes
    /// an error whose payload is the `Vec<ValidationError>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::validation::{Validate, ValidationError};
    ///
    /// let outcome = Validate::new()
    ///     .rule(("email", ""), |email| email.contains('@'), "Email is invalid.")
    ///     .run()
    ///     .into_outcome();
    ///
    /// let error = outcome.error_ref().unwrap();
    /// assert_eq!(error.message(), "validation failed: email: Email is invalid.");
    /// assert_eq!(error.data::<Vec<ValidationError>>().map(Vec::len), Some(1));
    /// ```
    #[must_use]
    pub fn into_outcome(self) -> Outcome<Unit> {
        if self.is_valid {
            return Outcome::Some(Unit);
        }
        let message = format!("validation failed: {self}");
        Outcome::Error(Error::new(message).with_data(self.errors))
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ValidationRecord {
    #[serde(default)]
    errors: Vec<ValidationError>,
}

#[cfg(feature = "serde")]
impl From<ValidationRecord> for ValidationResult {
    fn from(record: ValidationRecord) -> Self {
        Self::from_errors(record.errors)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            return formatter.write_str("valid");
        }
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

/// Fluent accumulator of validation rules.
#[derive(Debug, Clone, Default)]
pub struct Validate {
    errors: Vec<ValidationError>,
}

impl Validate {
    /// Starts an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Checks `predicate` against the named value right away.
    ///
    /// When the predicate returns `false`, `(name, message)` is recorded.
    #[must_use]
    pub fn rule<V, P>(
        mut self,
        (name, value): (impl Into<String>, V),
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        P: FnOnce(V) -> bool,
    {
        if !predicate(value) {
            self.errors.push(ValidationError::new(name, message));
        }
        self
    }

    /// Snapshots the recorded errors.
    #[must_use]
    pub fn run(self) -> ValidationResult {
        ValidationResult::from_errors(self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_rule_set_is_valid() {
        let result = Validate::new().run();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.to_string(), "valid");
    }

    #[rstest]
    #[case(10, true)]
    #[case(-1, false)]
    fn test_single_rule(#[case] value: i32, #[case] valid: bool) {
        let result = Validate::new()
            .rule(("value", value), |v| v >= 0, "must not be negative")
            .run();
        assert_eq!(result.is_valid(), valid);
    }

    #[test]
    fn test_messages_for_filters_by_property() {
        let result = Validate::new()
            .rule(("name", ""), |s: &str| !s.is_empty(), "required")
            .rule(("name", ""), |s: &str| s.len() > 2, "too short")
            .rule(("age", 0), |n| n > 0, "positive")
            .run();
        let messages: Vec<&str> = result.messages_for("name").collect();
        assert_eq!(messages, ["required", "too short"]);
    }

    #[test]
    fn test_valid_result_becomes_unit_outcome() {
        let outcome = Validate::new().rule(("x", 1), |x| x == 1, "one").run().into_outcome();
        assert_eq!(outcome, Outcome::value(Unit));
    }
}
