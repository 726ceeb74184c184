//! Validity: declarative, composable input validation
//!
//! Validity checks a value against rules built programmatically by the
//! caller. Every rule is a pure function of its input and its own
//! configuration, and evaluating a rule set runs every rule, collecting
//! every failure instead of stopping at the first one.
//!
//! # Core Concepts
//!
//! - **Rule**: a single check over one input type via the `ValidationRule` trait
//! - **Rule set**: an ordered `RuleSet` of rules evaluated together
//! - **Result**: a `ValidationResult` holding the ordered errors of failing rules
//! - **Validator**: the facade that evaluates input against a rule or a set
//!
//! Input is always optional, so "nothing entered yet" is a case each rule
//! handles explicitly.
//!
//! # Example
//!
//! ```rust
//! use validity::patterns::{CasePattern, ContainsNumberPattern};
//! use validity::rules::{LengthRule, PatternRule};
//! use validity::{RuleSet, ValidationError, Validator};
//!
//! let mut password = RuleSet::<str>::new();
//! password.add(LengthRule::range(5, 30, ValidationError::new("5 to 30 characters")).unwrap());
//! password.add(PatternRule::new(ContainsNumberPattern, ValidationError::new("Needs a digit")).unwrap());
//! password.add(PatternRule::new(CasePattern::Uppercase, ValidationError::new("Needs a capital")).unwrap());
//!
//! let result = Validator::validate_set(Some("abc"), &password);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 3);
//!
//! assert!(Validator::validate_set(Some("Secret42"), &password).is_valid());
//! ```

pub mod builder;
pub mod core;
pub mod patterns;
pub mod rules;
pub mod validator;

// Re-export commonly used types
pub use crate::builder::RuleError;
pub use crate::core::{RuleSet, ValidationError, ValidationResult, ValidationRule};
pub use crate::validator::{Validatable, Validator};
