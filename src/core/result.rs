//! Outcome of evaluating a rule or a rule set.

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validity plus the ordered errors of every failing rule.
///
/// Only the errors are stored; a result is valid exactly when it holds no
/// errors. Results are plain immutable values: combining them produces a
/// new result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult<E = ValidationError> {
    errors: Vec<E>,
}

impl<E> ValidationResult<E> {
    /// A result with no errors.
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// A result holding `errors`. An empty vector yields a valid result.
    pub fn invalid(errors: Vec<E>) -> Self {
        Self { errors }
    }

    /// Whether no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors of the failing rules, in evaluation order.
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Consume the result, keeping only its errors.
    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }

    /// Combine with another result; this result's errors come first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validity::{ValidationError, ValidationResult};
    ///
    /// let name = ValidationResult::invalid(vec![ValidationError::new("name")]);
    /// let email = ValidationResult::invalid(vec![ValidationError::new("email")]);
    ///
    /// let merged = name.merge(ValidationResult::valid()).merge(email);
    /// let messages: Vec<_> = merged.errors().iter().map(|e| e.message()).collect();
    /// assert_eq!(messages, ["name", "email"]);
    /// ```
    pub fn merge(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Combine with several results, in iteration order.
    pub fn merge_all<I>(self, others: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        others.into_iter().fold(self, Self::merge)
    }

    /// `Ok(())` when valid, otherwise `Err` with every error.
    pub fn into_result(self) -> Result<(), Vec<E>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl<E: Clone> ValidationResult<E> {
    /// Express the result as an accumulating `Validation`.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<E>> {
        let checks: Vec<Validation<(), NonEmptyVec<E>>> = self
            .errors
            .into_iter()
            .map(Validation::<(), NonEmptyVec<E>>::fail)
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<E> Default for ValidationResult<E> {
    fn default() -> Self {
        Self::valid()
    }
}

impl<E: Clone> From<Validation<(), NonEmptyVec<E>>> for ValidationResult<E> {
    fn from(validation: Validation<(), NonEmptyVec<E>>) -> Self {
        match validation {
            Validation::Success(()) => Self::valid(),
            Validation::Failure(errors) => Self::invalid(errors.iter().cloned().collect()),
        }
    }
}
