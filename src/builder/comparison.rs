//! Builder for constructing comparison rules.

use crate::builder::error::RuleError;
use crate::rules::ComparisonRule;
use std::fmt::Debug;

/// Builder for constructing comparison rules with a fluent API.
pub struct ComparisonRuleBuilder<T, E> {
    min: Option<T>,
    max: Option<T>,
    error: Option<E>,
}

impl<T: PartialOrd + Debug, E> ComparisonRuleBuilder<T, E> {
    /// Create a new comparison rule builder.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            error: None,
        }
    }

    /// Set the inclusive lower bound.
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound.
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the error reported on failure (required).
    pub fn error(mut self, error: E) -> Self {
        self.error = Some(error);
        self
    }

    /// Build the rule.
    /// Returns an error if the error or both bounds are missing, or if the
    /// bounds are inverted.
    pub fn build(self) -> Result<ComparisonRule<T, E>, RuleError> {
        let error = self.error.ok_or(RuleError::MissingError)?;
        ComparisonRule::new(self.min, self.max, error)
    }
}

impl<T: PartialOrd + Debug, E> Default for ComparisonRuleBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
