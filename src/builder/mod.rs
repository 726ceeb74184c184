//! Builder API for ergonomic rule construction.
//!
//! This module provides fluent builders for bounded rules, the `rule_set!`
//! macro, and the [`RuleError`] reported when a rule is misconfigured.

pub mod comparison;
pub mod error;
pub mod length;
pub mod macros;

pub use comparison::ComparisonRuleBuilder;
pub use error::RuleError;
pub use length::LengthRuleBuilder;
