//! Entry points for evaluating input against rules.

use crate::core::{RuleSet, ValidationResult, ValidationRule};
use tracing::trace;

/// Facade that evaluates input against a single rule or a rule set.
///
/// Pure dispatch: it never mutates the rules it is given.
///
/// # Example
///
/// ```rust
/// use validity::rules::{ConditionRule, LengthRule};
/// use validity::{RuleSet, ValidationError, Validator};
///
/// let min = LengthRule::at_least(5, ValidationError::new("Too short"));
/// assert!(Validator::validate(Some("12345"), &min).is_valid());
///
/// let mut rules = RuleSet::<str>::new();
/// rules.add(min);
/// rules.add(ConditionRule::new(
///     |input: Option<&str>| input.is_some_and(|s| !s.contains(' ')),
///     ValidationError::new("No spaces"),
/// ));
///
/// let result = Validator::validate_set(Some("a b"), &rules);
/// let messages: Vec<_> = result.errors().iter().map(|e| e.message()).collect();
/// assert_eq!(messages, ["Too short", "No spaces"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Evaluate one rule. The result holds at most one error.
    pub fn validate<T, R>(input: Option<&T>, rule: &R) -> ValidationResult<R::Error>
    where
        T: ?Sized,
        R: ValidationRule<T> + ?Sized,
    {
        let result = ValidationResult::from(rule.check(input));
        trace!(
            passed = result.is_valid(),
            present = input.is_some(),
            "evaluated rule"
        );
        result
    }

    /// Evaluate every rule in `rules`, in insertion order.
    pub fn validate_set<T, E>(input: Option<&T>, rules: &RuleSet<T, E>) -> ValidationResult<E>
    where
        T: ?Sized,
        E: Clone,
    {
        rules.validate(input)
    }
}

/// Validate a value in place: `value.validate_rule(&rule)`.
///
/// Implemented for every type; the value is treated as present input.
///
/// # Example
///
/// ```rust
/// use validity::rules::ComparisonRule;
/// use validity::{Validatable, ValidationError};
///
/// let rule = ComparisonRule::range(5.0_f32, 7.0, ValidationError::new("5 to 7")).unwrap();
///
/// assert!(6.5_f32.validate_rule(&rule).is_valid());
/// assert!(!8.0_f32.validate_rule(&rule).is_valid());
/// ```
pub trait Validatable {
    fn validate_rule<R>(&self, rule: &R) -> ValidationResult<R::Error>
    where
        R: ValidationRule<Self> + ?Sized,
    {
        Validator::validate(Some(self), rule)
    }

    fn validate_rules<E: Clone>(&self, rules: &RuleSet<Self, E>) -> ValidationResult<E> {
        Validator::validate_set(Some(self), rules)
    }
}

impl<T: ?Sized> Validatable for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;
    use crate::rules::{EqualityRule, LengthRule, RequiredRule};

    #[test]
    fn single_rule_yields_at_most_one_error() {
        let rule = LengthRule::at_least(5, ValidationError::new("short"));

        assert!(Validator::validate(Some("12345"), &rule).errors().is_empty());
        assert_eq!(Validator::validate(Some("1234"), &rule).errors().len(), 1);
        assert_eq!(Validator::validate(None::<&str>, &rule).errors().len(), 1);
    }

    #[test]
    fn facade_matches_rule_set() {
        let mut rules = RuleSet::<str>::new();
        rules.add(RequiredRule::new(ValidationError::new("required")));
        rules.add(LengthRule::at_most(3, ValidationError::new("long")));

        assert_eq!(
            Validator::validate_set(Some("long"), &rules),
            rules.validate(Some("long"))
        );
    }

    #[test]
    fn validatable_extension() {
        let rule = EqualityRule::new(String::from("Password"), ValidationError::new("mismatch"));
        let rules = RuleSet::<str>::new().rule(LengthRule::at_least(20, ValidationError::new("short")));

        assert!("Password".validate_rule(&rule).is_valid());
        assert!(!"password".validate_rule(&rule).is_valid());
        assert_eq!("Password".validate_rules(&rules).errors().len(), 1);
    }

    #[test]
    fn works_with_trait_objects() {
        let rule: Box<dyn ValidationRule<str, Error = ValidationError>> =
            Box::new(LengthRule::at_most(2, ValidationError::new("long")));

        assert!(Validator::validate(Some("ab"), rule.as_ref()).is_valid());
        assert!(!Validator::validate(Some("abc"), &rule).is_valid());
    }
}
