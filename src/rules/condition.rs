//! Arbitrary caller-supplied predicates.

use crate::core::{ValidationError, ValidationRule};

/// Type alias for condition predicates.
pub type Predicate<T> = Box<dyn Fn(Option<&T>) -> bool + Send + Sync>;

/// Passes when the caller's predicate returns `true`.
///
/// The predicate receives the input exactly as given, missing or not, and
/// decides for itself what absence means.
///
/// # Example
///
/// ```rust
/// use validity::rules::ConditionRule;
/// use validity::{ValidationError, Validator};
///
/// let greets = ConditionRule::new(
///     |input: Option<&str>| input.is_some_and(|text| text.contains("Hello")),
///     ValidationError::new("Say Hello"),
/// );
///
/// assert!(Validator::validate(Some("Well, Hello there"), &greets).is_valid());
/// assert!(!Validator::validate(None, &greets).is_valid());
/// ```
pub struct ConditionRule<T: ?Sized, E = ValidationError> {
    predicate: Predicate<T>,
    error: E,
}

impl<T: ?Sized, E> ConditionRule<T, E> {
    /// Create a rule from a predicate over the optional input.
    pub fn new<F>(predicate: F, error: E) -> Self
    where
        F: Fn(Option<&T>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            error,
        }
    }
}

impl<T: ?Sized, E: Clone> ValidationRule<T> for ConditionRule<T, E> {
    type Error = E;

    fn validate(&self, input: Option<&T>) -> bool {
        (self.predicate)(input)
    }

    fn error(&self) -> &E {
        &self.error
    }
}

impl<T: ?Sized, E: std::fmt::Debug> std::fmt::Debug for ConditionRule<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionRule")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
