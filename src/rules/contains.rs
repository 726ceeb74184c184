//! Membership in a fixed reference sequence.

use crate::core::{ValidationError, ValidationRule};
use std::borrow::Borrow;

/// Passes when the input is one of the reference items.
///
/// Items are compared by value; their order does not matter. Missing input
/// fails.
///
/// # Example
///
/// ```rust
/// use validity::rules::ContainsRule;
/// use validity::{ValidationError, Validator};
///
/// let greeting = ContainsRule::new(["hello", "hey", "hi"], ValidationError::new("Say hi"));
///
/// assert!(Validator::validate(Some("hey"), &greeting).is_valid());
/// assert!(!Validator::validate(Some("howdy"), &greeting).is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContainsRule<T, E = ValidationError> {
    items: Vec<T>,
    error: E,
}

impl<T, E> ContainsRule<T, E> {
    /// Create a rule from the reference items.
    pub fn new<I>(items: I, error: E) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
            error,
        }
    }

    /// The reference items, in the order given.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, U, E> ValidationRule<U> for ContainsRule<T, E>
where
    T: Borrow<U>,
    U: PartialEq + ?Sized,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        input.is_some_and(|input| self.items.iter().any(|item| item.borrow() == input))
    }

    fn error(&self) -> &E {
        &self.error
    }
}

/// Passes when every element of an input sequence is one of the reference
/// items.
///
/// An empty sequence passes; a missing one fails.
///
/// # Example
///
/// ```rust
/// use validity::rules::ElementsRule;
/// use validity::{ValidationError, Validator};
///
/// let toppings = ElementsRule::new(["cheese", "ham", "olives"], ValidationError::new("Unknown topping"));
///
/// assert!(Validator::validate(Some(&["ham", "cheese"][..]), &toppings).is_valid());
/// assert!(!Validator::validate(Some(&["ham", "pineapple"][..]), &toppings).is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ElementsRule<T, E = ValidationError> {
    items: Vec<T>,
    error: E,
}

impl<T, E> ElementsRule<T, E> {
    /// Create a rule from the reference items.
    pub fn new<I>(items: I, error: E) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
            error,
        }
    }

    /// The reference items, in the order given.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, U, E> ValidationRule<U> for ElementsRule<T, E>
where
    T: PartialEq,
    U: AsRef<[T]> + ?Sized,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        input.is_some_and(|input| {
            input
                .as_ref()
                .iter()
                .all(|element| self.items.contains(element))
        })
    }

    fn error(&self) -> &E {
        &self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err() -> ValidationError {
        ValidationError::new("not allowed")
    }

    #[test]
    fn input_must_be_a_member() {
        let rule = ContainsRule::new(["hello", "hey", "hi"].map(String::from), err());

        assert!(ValidationRule::<str>::validate(&rule, Some("hi")));
        assert!(!ValidationRule::<str>::validate(&rule, Some("Hi")));
        assert!(!ValidationRule::<str>::validate(&rule, Some("")));
        assert!(!ValidationRule::<str>::validate(&rule, None));
    }

    #[test]
    fn numeric_membership() {
        let rule = ContainsRule::new(vec![2_u8, 4, 8], err());
        assert!(ValidationRule::<u8>::validate(&rule, Some(&4)));
        assert!(!ValidationRule::<u8>::validate(&rule, Some(&3)));
    }

    #[test]
    fn empty_reference_rejects_everything() {
        let rule = ContainsRule::<i32>::new(Vec::new(), err());
        assert!(!ValidationRule::<i32>::validate(&rule, Some(&0)));
    }

    #[test]
    fn every_element_must_be_a_member() {
        let rule = ElementsRule::new([1, 2, 3], err());

        assert!(ValidationRule::<Vec<i32>>::validate(&rule, Some(&vec![3, 1, 1])));
        assert!(!ValidationRule::<Vec<i32>>::validate(&rule, Some(&vec![1, 4])));
        assert!(ValidationRule::<[i32]>::validate(&rule, Some(&[][..])));
        assert!(!ValidationRule::<[i32]>::validate(&rule, None));
    }
}
