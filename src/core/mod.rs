//! Core validation types.
//!
//! This module contains the rule abstraction and how rules compose:
//! - Error payloads via `ValidationError`
//! - The `ValidationRule` capability every rule implements
//! - Ordered evaluation via `RuleSet`
//! - Accumulated outcomes via `ValidationResult`
//!
//! Everything here is pure: evaluating a rule or a set never mutates it.

mod error;
mod result;
mod rule;
mod rule_set;

pub use error::ValidationError;
pub use result::ValidationResult;
pub use rule::ValidationRule;
pub use rule_set::{BoxedRule, RuleSet};
