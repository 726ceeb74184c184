//! Property-based tests for rule set aggregation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs and rule combinations.

use proptest::prelude::*;
use validity::patterns::{CasePattern, ContainsNumberPattern};
use validity::rules::{ConditionRule, ContainsRule, LengthRule, PatternRule, RequiredRule};
use validity::{RuleSet, ValidationError, ValidationRule, Validator};

type StrRule = Box<dyn ValidationRule<str, Error = ValidationError> + Send + Sync>;

/// Build the rule at `variant`, tagging its error with `tag`.
fn make_rule(variant: u8, tag: usize) -> StrRule {
    let error = ValidationError::new(format!("rule-{tag}"));
    match variant % 7 {
        0 => Box::new(LengthRule::at_least(5, error)),
        1 => Box::new(LengthRule::at_most(8, error)),
        2 => Box::new(PatternRule::new(ContainsNumberPattern, error).unwrap()),
        3 => Box::new(PatternRule::new(CasePattern::Uppercase, error).unwrap()),
        4 => Box::new(ContainsRule::new(["hello", "hey", "hi"], error)),
        5 => Box::new(RequiredRule::new(error)),
        _ => Box::new(ConditionRule::new(
            |input: Option<&str>| input.is_some_and(|s| s.starts_with('a')),
            error,
        )),
    }
}

fn rules_for(variants: &[u8]) -> Vec<StrRule> {
    variants
        .iter()
        .enumerate()
        .map(|(tag, variant)| make_rule(*variant, tag))
        .collect()
}

prop_compose! {
    fn arbitrary_input()(present in any::<bool>(), text in "[a-zA-Z0-9_ ]{0,12}") -> Option<String> {
        present.then_some(text)
    }
}

proptest! {
    #[test]
    fn set_is_valid_iff_every_rule_is(
        variants in prop::collection::vec(0..7u8, 0..8),
        input in arbitrary_input(),
    ) {
        let input = input.as_deref();
        let all_pass = rules_for(&variants)
            .iter()
            .all(|rule| Validator::validate(input, rule.as_ref()).is_valid());

        let set = RuleSet::with_rules(rules_for(&variants));
        prop_assert_eq!(Validator::validate_set(input, &set).is_valid(), all_pass);
    }

    #[test]
    fn errors_follow_insertion_order(
        variants in prop::collection::vec(0..7u8, 0..8),
        input in arbitrary_input(),
    ) {
        let input = input.as_deref();
        let expected: Vec<String> = rules_for(&variants)
            .iter()
            .filter(|rule| !rule.validate(input))
            .map(|rule| rule.error().message().to_owned())
            .collect();

        let set = RuleSet::with_rules(rules_for(&variants));
        let actual: Vec<String> = Validator::validate_set(input, &set)
            .errors()
            .iter()
            .map(|e| e.message().to_owned())
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn validation_is_idempotent(
        variants in prop::collection::vec(0..7u8, 0..8),
        input in arbitrary_input(),
    ) {
        let input = input.as_deref();
        let set = RuleSet::with_rules(rules_for(&variants));

        let first = Validator::validate_set(input, &set);
        let second = Validator::validate_set(input, &set);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn validity_matches_empty_errors(
        variants in prop::collection::vec(0..7u8, 0..8),
        input in arbitrary_input(),
    ) {
        let set = RuleSet::with_rules(rules_for(&variants));
        let result = set.validate(input.as_deref());
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    #[test]
    fn length_bounds_are_inclusive(min in 0..20usize, span in 0..20usize, len in 0..50usize) {
        let max = min + span;
        let rule = LengthRule::range(min, max, ValidationError::new("length")).unwrap();
        let input = "x".repeat(len);

        let expected = (min..=max).contains(&len);
        prop_assert_eq!(Validator::validate(Some(input.as_str()), &rule).is_valid(), expected);
    }

    #[test]
    fn result_round_trips_through_json(
        variants in prop::collection::vec(0..7u8, 0..8),
        input in arbitrary_input(),
    ) {
        let set = RuleSet::with_rules(rules_for(&variants));
        let result = set.validate(input.as_deref());

        let json = serde_json::to_string(&result).unwrap();
        let back: validity::ValidationResult = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, result);
    }
}
