//! Builder for constructing length rules.

use crate::builder::error::RuleError;
use crate::rules::{LengthMetric, LengthRule};

/// Builder for constructing length rules with a fluent API.
pub struct LengthRuleBuilder<E> {
    min: Option<usize>,
    max: Option<usize>,
    metric: LengthMetric,
    error: Option<E>,
}

impl<E> LengthRuleBuilder<E> {
    /// Create a new length rule builder.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            metric: LengthMetric::default(),
            error: None,
        }
    }

    /// Set the inclusive lower bound.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Choose how length is counted (chars by default).
    pub fn metric(mut self, metric: LengthMetric) -> Self {
        self.metric = metric;
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
    pub fn build(self) -> Result<LengthRule<E>, RuleError> {
        let error = self.error.ok_or(RuleError::MissingError)?;
        let rule = LengthRule::new(self.min, self.max, error)?;
        Ok(rule.with_metric(self.metric))
    }
}

impl<E> Default for LengthRuleBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
