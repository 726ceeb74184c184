//! The capability every rule implements.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A single, pure check over an optionally present input.
///
/// Input is always optional: each rule decides for itself whether a missing
/// value passes. A rule never panics or returns an error for malformed
/// input; the only thing it reports is pass or fail, plus the error payload
/// it carries for the failing case.
///
/// Implementing the trait directly is the way to add rule kinds beyond the
/// built-in ones.
///
/// # Example
///
/// ```rust
/// use validity::{ValidationError, ValidationRule, Validator};
///
/// struct Even {
///     error: ValidationError,
/// }
///
/// impl ValidationRule<u32> for Even {
///     type Error = ValidationError;
///
///     fn validate(&self, input: Option<&u32>) -> bool {
///         input.is_some_and(|n| n % 2 == 0)
///     }
///
///     fn error(&self) -> &ValidationError {
///         &self.error
///     }
/// }
///
/// let rule = Even { error: ValidationError::new("must be even") };
/// assert!(Validator::validate(Some(&4), &rule).is_valid());
/// assert!(!Validator::validate(Some(&3), &rule).is_valid());
/// ```
pub trait ValidationRule<T: ?Sized> {
    /// Payload reported when the rule fails.
    type Error: Clone;

    /// Whether the input satisfies the rule.
    fn validate(&self, input: Option<&T>) -> bool;

    /// The error this rule reports on failure.
    fn error(&self) -> &Self::Error;

    /// Evaluate the rule as a `Validation`, so outcomes can be accumulated.
    fn check(&self, input: Option<&T>) -> Validation<(), NonEmptyVec<Self::Error>> {
        if self.validate(input) {
            Validation::success(())
        } else {
            Validation::fail(self.error().clone())
        }
    }
}

impl<T, R> ValidationRule<T> for Box<R>
where
    T: ?Sized,
    R: ValidationRule<T> + ?Sized,
{
    type Error = R::Error;

    fn validate(&self, input: Option<&T>) -> bool {
        (**self).validate(input)
    }

    fn error(&self) -> &Self::Error {
        (**self).error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    struct NonZero(ValidationError);

    impl ValidationRule<i64> for NonZero {
        type Error = ValidationError;

        fn validate(&self, input: Option<&i64>) -> bool {
            matches!(input, Some(n) if *n != 0)
        }

        fn error(&self) -> &ValidationError {
            &self.0
        }
    }

    #[test]
    fn check_succeeds_for_passing_input() {
        let rule = NonZero(ValidationError::new("zero"));
        assert!(rule.check(Some(&7)).is_success());
    }

    #[test]
    fn check_carries_the_rule_error() {
        let rule = NonZero(ValidationError::new("zero"));

        match rule.check(Some(&0)) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().all(|e| e.message() == "zero"));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn boxed_rule_delegates() {
        let rule: Box<dyn ValidationRule<i64, Error = ValidationError>> =
            Box::new(NonZero(ValidationError::new("zero")));

        assert!(rule.validate(Some(&1)));
        assert!(!rule.validate(None));
        assert_eq!(rule.error().message(), "zero");
    }
}
