//! String length bounds.

use crate::builder::{LengthRuleBuilder, RuleError};
use crate::core::{ValidationError, ValidationRule};
use unicode_segmentation::UnicodeSegmentation;

/// How a string's length is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMetric {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters, i.e. user-perceived characters.
    Graphemes,
    /// UTF-8 bytes.
    Bytes,
    /// UTF-16 code units.
    Utf16,
}

impl LengthMetric {
    /// Length of `input` in this metric's units.
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Chars => input.chars().count(),
            Self::Graphemes => input.graphemes(true).count(),
            Self::Bytes => input.len(),
            Self::Utf16 => input.encode_utf16().count(),
        }
    }
}

/// Passes when the input's length lies within inclusive bounds.
///
/// At least one bound is always set; an omitted bound leaves that side open.
/// Missing input fails.
///
/// # Example
///
/// ```rust
/// use validity::rules::LengthRule;
/// use validity::{ValidationError, Validator};
///
/// let rule = LengthRule::range(5, 20, ValidationError::new("5 to 20 characters")).unwrap();
///
/// assert!(Validator::validate(Some("12345"), &rule).is_valid());
/// assert!(!Validator::validate(Some("1234"), &rule).is_valid());
/// assert!(!Validator::validate(None::<&str>, &rule).is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthRule<E = ValidationError> {
    min: Option<usize>,
    max: Option<usize>,
    metric: LengthMetric,
    error: E,
}

impl<E> LengthRule<E> {
    /// Create a rule from optional bounds.
    ///
    /// Fails when both bounds are missing or when `min > max`.
    pub fn new(min: Option<usize>, max: Option<usize>, error: E) -> Result<Self, RuleError> {
        match (min, max) {
            (None, None) => Err(RuleError::MissingBounds),
            (Some(min), Some(max)) if min > max => Err(RuleError::InvertedBounds {
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(Self {
                min,
                max,
                metric: LengthMetric::default(),
                error,
            }),
        }
    }

    /// Create a rule with only a lower bound.
    pub fn at_least(min: usize, error: E) -> Self {
        Self {
            min: Some(min),
            max: None,
            metric: LengthMetric::default(),
            error,
        }
    }

    /// Create a rule with only an upper bound.
    pub fn at_most(max: usize, error: E) -> Self {
        Self {
            min: None,
            max: Some(max),
            metric: LengthMetric::default(),
            error,
        }
    }

    /// Create a closed rule accepting lengths `min..=max`.
    pub fn range(min: usize, max: usize, error: E) -> Result<Self, RuleError> {
        Self::new(Some(min), Some(max), error)
    }

    /// Start a fluent builder.
    pub fn builder() -> LengthRuleBuilder<E> {
        LengthRuleBuilder::new()
    }

    /// Count length with `metric` instead of chars.
    pub fn with_metric(mut self, metric: LengthMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The inclusive lower bound, if any.
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// The inclusive upper bound, if any.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// How this rule counts length.
    pub fn metric(&self) -> LengthMetric {
        self.metric
    }
}

impl<U, E> ValidationRule<U> for LengthRule<E>
where
    U: AsRef<str> + ?Sized,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        let Some(input) = input else {
            return false;
        };
        let length = self.metric.measure(input.as_ref());

        self.min.map_or(true, |min| length >= min) && self.max.map_or(true, |max| length <= max)
    }

    fn error(&self) -> &E {
        &self.error
    }
}
