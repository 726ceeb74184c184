//! Macros for ergonomic rule set construction.

/// Build a [`RuleSet`](crate::core::RuleSet) from rules, keeping their order.
///
/// The input type usually needs an annotation, since text rules accept both
/// `str` and `String`.
///
/// # Example
///
/// ```
/// use validity::rules::{LengthRule, RequiredRule};
/// use validity::{rule_set, RuleSet, ValidationError};
///
/// let rules: RuleSet<str> = rule_set![
///     RequiredRule::new(ValidationError::new("required")),
///     LengthRule::at_most(8, ValidationError::new("too long")),
/// ];
///
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules.validate(None).errors().len(), 2);
/// ```
#[macro_export]
macro_rules! rule_set {
    () => {
        $crate::core::RuleSet::new()
    };
    ($($rule:expr),+ $(,)?) => {{
        let mut rules = $crate::core::RuleSet::new();
        $(rules.add($rule);)+
        rules
    }};
}
