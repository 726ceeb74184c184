//! Numeric bounds.

use crate::builder::{ComparisonRuleBuilder, RuleError};
use crate::core::{ValidationError, ValidationRule};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Passes when an ordered value lies within inclusive bounds.
///
/// Same bound semantics as [`LengthRule`](super::LengthRule), applied to the
/// value itself. Missing input fails, and so does any value that does not
/// compare with a bound (such as `NaN`).
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRule<T, E = ValidationError> {
    min: Option<T>,
    max: Option<T>,
    error: E,
}

impl<T, E> ComparisonRule<T, E>
where
    T: PartialOrd + Debug,
{
    /// Create a rule from optional bounds.
    ///
    /// Fails when both bounds are missing, when a bound does not compare with
    /// itself (such as `NaN`), or when `min > max`.
    pub fn new(min: Option<T>, max: Option<T>, error: E) -> Result<Self, RuleError> {
        if min.is_none() && max.is_none() {
            return Err(RuleError::MissingBounds);
        }

        if let Some(bound) = min.iter().chain(max.iter()).find(|b| b.partial_cmp(b).is_none()) {
            return Err(RuleError::IncomparableBound {
                bound: format!("{bound:?}"),
            });
        }

        if let (Some(low), Some(high)) = (&min, &max) {
            if low.partial_cmp(high) == Some(Ordering::Greater) {
                return Err(RuleError::InvertedBounds {
                    min: format!("{low:?}"),
                    max: format!("{high:?}"),
                });
            }
        }

        Ok(Self { min, max, error })
    }

    /// Create a closed rule accepting `min..=max`.
    pub fn range(min: T, max: T, error: E) -> Result<Self, RuleError> {
        Self::new(Some(min), Some(max), error)
    }

    /// Start a fluent builder.
    pub fn builder() -> ComparisonRuleBuilder<T, E> {
        ComparisonRuleBuilder::new()
    }
}

// `Ord` bounds always compare, so single-bound construction cannot fail.
impl<T: Ord, E> ComparisonRule<T, E> {
    /// Create a rule with only a lower bound.
    pub fn at_least(min: T, error: E) -> Self {
        Self {
            min: Some(min),
            max: None,
            error,
        }
    }

    /// Create a rule with only an upper bound.
    pub fn at_most(max: T, error: E) -> Self {
        Self {
            min: None,
            max: Some(max),
            error,
        }
    }
}

impl<T, E> ComparisonRule<T, E> {
    /// The inclusive lower bound, if any.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// The inclusive upper bound, if any.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }
}

impl<T, E> ValidationRule<T> for ComparisonRule<T, E>
where
    T: PartialOrd,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&T>) -> bool {
        let Some(input) = input else {
            return false;
        };

        self.min.as_ref().map_or(true, |min| input >= min)
            && self.max.as_ref().map_or(true, |max| input <= max)
    }

    fn error(&self) -> &E {
        &self.error
    }
}
