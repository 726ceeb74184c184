//! Construction errors for rules and rule builders.

use thiserror::Error;

/// Errors raised while constructing a rule.
///
/// These are setup mistakes, reported once when the rule is built. They are
/// never produced while validating input.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Neither a minimum nor a maximum bound was set. Call .min(..) or .max(..)")]
    MissingBounds,

    #[error("Minimum bound {min} is greater than maximum bound {max}")]
    InvertedBounds { min: String, max: String },

    #[error("Bound {bound} cannot be compared, not even with itself")]
    IncomparableBound { bound: String },

    #[error("Pattern {pattern:?} is not a valid regular expression")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule error not specified. Call .error(error) before .build()")]
    MissingError,

    #[error("No card types accepted. Supply at least one card type")]
    EmptyCardTypes,
}
