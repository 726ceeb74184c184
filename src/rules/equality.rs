//! Exact equality with a fixed or late-bound target.

use crate::core::{ValidationError, ValidationRule};
use std::borrow::Borrow;

/// Type alias for a target resolved at validation time.
pub type TargetResolver<T> = Box<dyn Fn() -> Option<T> + Send + Sync>;

enum Target<T> {
    Fixed(Option<T>),
    Dynamic(TargetResolver<T>),
}

/// Passes when the input equals a target value.
///
/// The target is either captured at construction or produced by a resolver
/// that runs on every call to `validate`; resolved targets are never cached.
/// Missing input only equals a missing target.
///
/// # Example
///
/// ```rust
/// use validity::rules::EqualityRule;
/// use validity::{ValidationError, Validator};
/// use std::sync::{Arc, Mutex};
///
/// let password = Arc::new(Mutex::new(String::from("hunter2")));
/// let current = Arc::clone(&password);
/// let confirm = EqualityRule::dynamic(
///     move || current.lock().map(|p| p.clone()).unwrap_or_default(),
///     ValidationError::new("Passwords differ"),
/// );
///
/// assert!(Validator::validate(Some("hunter2"), &confirm).is_valid());
///
/// *password.lock().unwrap() = String::from("correct horse");
/// assert!(!Validator::validate(Some("hunter2"), &confirm).is_valid());
/// ```
pub struct EqualityRule<T, E = ValidationError> {
    target: Target<T>,
    error: E,
}

impl<T, E> EqualityRule<T, E> {
    /// Compare against a fixed target.
    pub fn new(target: T, error: E) -> Self {
        Self::optional(Some(target), error)
    }

    /// Compare against a target that may itself be absent.
    pub fn optional(target: Option<T>, error: E) -> Self {
        Self {
            target: Target::Fixed(target),
            error,
        }
    }

    /// Compare against whatever `resolve` returns at validation time.
    pub fn dynamic<F>(resolve: F, error: E) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::dynamic_optional(move || Some(resolve()), error)
    }

    /// Like [`dynamic`](Self::dynamic), for resolvers that may yield nothing.
    pub fn dynamic_optional<F>(resolve: F, error: E) -> Self
    where
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        Self {
            target: Target::Dynamic(Box::new(resolve)),
            error,
        }
    }

    /// Whether the target is resolved on every call.
    pub fn is_dynamic(&self) -> bool {
        matches!(self.target, Target::Dynamic(_))
    }
}

fn equals<T, U>(input: Option<&U>, target: Option<&T>) -> bool
where
    T: Borrow<U>,
    U: PartialEq + ?Sized,
{
    match (input, target) {
        (None, None) => true,
        (Some(input), Some(target)) => target.borrow() == input,
        _ => false,
    }
}

impl<T, U, E> ValidationRule<U> for EqualityRule<T, E>
where
    T: Borrow<U>,
    U: PartialEq + ?Sized,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        match &self.target {
            Target::Fixed(target) => equals(input, target.as_ref()),
            Target::Dynamic(resolve) => equals(input, resolve().as_ref()),
        }
    }

    fn error(&self) -> &E {
        &self.error
    }
}

impl<T: std::fmt::Debug, E: std::fmt::Debug> std::fmt::Debug for EqualityRule<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("EqualityRule");
        match &self.target {
            Target::Fixed(target) => debug.field("target", target),
            Target::Dynamic(_) => debug.field("target", &"<dynamic>"),
        };
        debug.field("error", &self.error).finish()
    }
}
