//! Presence checks.

use crate::core::{ValidationError, ValidationRule};

/// Passes when an input is present at all, whatever its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRule<E = ValidationError> {
    error: E,
}

impl<E> RequiredRule<E> {
    /// Create a new presence rule.
    pub fn new(error: E) -> Self {
        Self { error }
    }
}

impl<U: ?Sized, E: Clone> ValidationRule<U> for RequiredRule<E> {
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        input.is_some()
    }

    fn error(&self) -> &E {
        &self.error
    }
}
