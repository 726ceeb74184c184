//! Ordered collections of rules over one input type.

use super::error::ValidationError;
use super::result::ValidationResult;
use super::rule::ValidationRule;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace};

/// Type alias for the boxed rules held by a [`RuleSet`].
pub type BoxedRule<T, E> = Box<dyn ValidationRule<T, Error = E> + Send + Sync>;

/// An ordered collection of rules evaluated together against one input.
///
/// Insertion order decides the order of errors in the result. Every rule
/// always runs, even after an earlier one fails, so the result lists every
/// violated constraint at once.
///
/// Adding rules needs `&mut self`; once built, a set can be shared and
/// evaluated concurrently because evaluation never mutates it.
///
/// # Example
///
/// ```rust
/// use validity::patterns::{CasePattern, ContainsNumberPattern};
/// use validity::rules::{LengthRule, PatternRule};
/// use validity::{RuleSet, ValidationError};
///
/// let mut rules = RuleSet::<str>::new();
/// rules.add(LengthRule::range(5, 30, ValidationError::new("length")).unwrap());
/// rules.add(PatternRule::new(ContainsNumberPattern, ValidationError::new("digit")).unwrap());
/// rules.add(PatternRule::new(CasePattern::Uppercase, ValidationError::new("upper")).unwrap());
///
/// let result = rules.validate(Some("abc"));
/// assert!(!result.is_valid());
/// assert_eq!(result.errors().len(), 3);
/// ```
pub struct RuleSet<T: ?Sized, E = ValidationError> {
    rules: Vec<BoxedRule<T, E>>,
}

impl<T: ?Sized, E: Clone> RuleSet<T, E> {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a set from already boxed rules, keeping their order.
    pub fn with_rules(rules: Vec<BoxedRule<T, E>>) -> Self {
        Self { rules }
    }

    /// Append a rule. Duplicates are kept.
    pub fn add<R>(&mut self, rule: R)
    where
        R: ValidationRule<T, Error = E> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    /// Append a rule, builder style.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<T, Error = E> + Send + Sync + 'static,
    {
        self.add(rule);
        self
    }

    /// Number of rules, duplicates included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules. An empty set accepts any input.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against `input` and accumulate the failures.
    pub fn validate(&self, input: Option<&T>) -> ValidationResult<E> {
        let checks: Vec<Validation<(), NonEmptyVec<E>>> = self
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                let check = rule.check(input);
                trace!(index, passed = check.is_success(), "evaluated rule");
                check
            })
            .collect();

        let result = ValidationResult::from(Validation::all_vec(checks).map(|_| ()));

        if !result.is_valid() {
            debug!(
                rules = self.rules.len(),
                errors = result.errors().len(),
                present = input.is_some(),
                "rule set rejected input"
            );
        }

        result
    }
}

impl<T: ?Sized, E: Clone> Default for RuleSet<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> std::fmt::Debug for RuleSet<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ConditionRule;

    fn at_least(n: i32, message: &str) -> ConditionRule<i32> {
        ConditionRule::new(
            move |input: Option<&i32>| input.is_some_and(|v| *v >= n),
            ValidationError::new(message),
        )
    }

    #[test]
    fn empty_set_accepts_anything() {
        let rules = RuleSet::<i32>::new();
        assert!(rules.is_empty());
        assert!(rules.validate(Some(&1)).is_valid());
        assert!(rules.validate(None).is_valid());
    }

    #[test]
    fn every_rule_runs_after_a_failure() {
        let rules = RuleSet::new()
            .rule(at_least(10, "ten"))
            .rule(at_least(0, "zero"))
            .rule(at_least(20, "twenty"));

        let result = rules.validate(Some(&5));
        let messages: Vec<_> = result.errors().iter().map(|e| e.message()).collect();
        assert_eq!(messages, ["ten", "twenty"]);
    }

    #[test]
    fn duplicate_rules_report_twice() {
        let mut rules = RuleSet::new();
        rules.add(at_least(1, "positive"));
        rules.add(at_least(1, "positive"));

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.validate(Some(&0)).errors().len(), 2);
    }

    #[test]
    fn with_rules_preserves_order() {
        let rules: RuleSet<i32> = RuleSet::with_rules(vec![
            Box::new(at_least(3, "a")),
            Box::new(at_least(2, "b")),
        ]);

        let result = rules.validate(None);
        let messages: Vec<_> = result.errors().iter().map(|e| e.message()).collect();
        assert_eq!(messages, ["a", "b"]);
    }

    #[test]
    fn validation_is_idempotent() {
        let rules = RuleSet::new().rule(at_least(3, "a"));
        assert_eq!(rules.validate(Some(&1)), rules.validate(Some(&1)));
    }
}
