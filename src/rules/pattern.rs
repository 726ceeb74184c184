//! Whole-string format matching.

use crate::builder::RuleError;
use crate::core::{ValidationError, ValidationRule};
use crate::patterns::ValidationPattern;
use regex::Regex;

/// Passes when the entire input conforms to a regular expression.
///
/// The pattern is anchored at both ends, so a match somewhere inside the
/// input is not enough. Missing input fails.
///
/// # Example
///
/// ```rust
/// use validity::patterns::EmailPattern;
/// use validity::rules::PatternRule;
/// use validity::{ValidationError, Validator};
///
/// let rule = PatternRule::new(EmailPattern::Standard, ValidationError::new("Invalid email")).unwrap();
///
/// assert!(Validator::validate(Some("user_1@valid.co.uk"), &rule).is_valid());
/// assert!(!Validator::validate(Some("user@invalid@example.com"), &rule).is_valid());
///
/// // Anchored: "abc" alone does not match inside "xabcx"
/// let exact = PatternRule::new("abc", ValidationError::new("not abc")).unwrap();
/// assert!(!Validator::validate(Some("xabcx"), &exact).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct PatternRule<E = ValidationError> {
    pattern: String,
    regex: Regex,
    error: E,
}

impl<E> PatternRule<E> {
    /// Compile `pattern` into a rule. Fails when the expression is invalid.
    pub fn new<P: ValidationPattern>(pattern: P, error: E) -> Result<Self, RuleError> {
        let pattern = pattern.pattern().to_owned();
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            RuleError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            }
        })?;

        Ok(Self {
            pattern,
            regex,
            error,
        })
    }

    /// The expression as supplied, before anchoring.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<U, E> ValidationRule<U> for PatternRule<E>
where
    U: AsRef<str> + ?Sized,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        input.is_some_and(|input| self.regex.is_match(input.as_ref()))
    }

    fn error(&self) -> &E {
        &self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{CasePattern, ContainsNumberPattern, EmailPattern};

    fn rule<P: ValidationPattern>(pattern: P) -> PatternRule {
        PatternRule::new(pattern, ValidationError::new("pattern")).unwrap()
    }

    fn passes(rule: &PatternRule, input: &str) -> bool {
        ValidationRule::<str>::validate(rule, Some(input))
    }

    #[test]
    fn standard_email() {
        let rule = rule(EmailPattern::Standard);

        for invalid in [
            "user@invalid,com",
            "userinvalid.com",
            "invalid",
            "user@invalid@example.com",
        ] {
            assert!(!passes(&rule, invalid), "{invalid}");
        }

        for valid in ["user@valid.com", "user_1@valid.co.uk", "user@valid.museum"] {
            assert!(passes(&rule, valid), "{valid}");
        }
    }

    #[test]
    fn simple_email() {
        let rule = rule(EmailPattern::Simple);
        assert!(passes(&rule, "a@b.c"));
        assert!(!passes(&rule, "a@bc"));
        assert!(!passes(&rule, "ab.c"));
    }

    #[test]
    fn digit_presence() {
        let rule = rule(ContainsNumberPattern);

        for no_digit in ["invalid", "invali_d", "inv+alid"] {
            assert!(!passes(&rule, no_digit), "{no_digit}");
        }
        for digit in ["valid1", "9valid"] {
            assert!(passes(&rule, digit), "{digit}");
        }
    }

    #[test]
    fn letter_case_presence() {
        let upper = rule(CasePattern::Uppercase);
        let lower = rule(CasePattern::Lowercase);

        assert!(passes(&upper, "abC"));
        assert!(!passes(&upper, "abc"));
        assert!(passes(&lower, "ABc"));
        assert!(!passes(&lower, "ABC"));
    }

    #[test]
    fn matches_whole_input_only() {
        let rule = rule("[0-9]+");
        assert!(passes(&rule, "12345"));
        assert!(!passes(&rule, "12a45"));
        assert!(!passes(&rule, ""));
    }

    #[test]
    fn alternation_is_anchored_as_a_group() {
        let rule = rule("cat|dog");
        assert!(passes(&rule, "dog"));
        assert!(!passes(&rule, "cats"));
        assert!(!passes(&rule, "hotdog"));
    }

    #[test]
    fn missing_input_fails() {
        let rule = rule(".*");
        assert!(!ValidationRule::<str>::validate(&rule, None));
        assert!(passes(&rule, ""));
    }

    #[test]
    fn invalid_expression_is_a_construction_error() {
        let result = PatternRule::new(String::from("(unclosed"), ValidationError::new("x"));

        match result {
            Err(RuleError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("Expected invalid pattern, got {other:?}"),
        }
    }
}
