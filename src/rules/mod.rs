//! Built-in rule variants.
//!
//! Each rule implements [`ValidationRule`](crate::core::ValidationRule) and
//! carries its own error payload. How a rule treats missing input:
//!
//! | Rule | Missing input |
//! |---|---|
//! | `LengthRule`, `ComparisonRule`, `PatternRule` | fails |
//! | `ContainsRule`, `ElementsRule` | fails |
//! | `UrlRule`, `PaymentCardRule`, `RequiredRule` | fails |
//! | `EqualityRule` | passes only if the target is also missing |
//! | `ConditionRule` | decided by the predicate |
//!
//! Rules over text accept any `AsRef<str>` input, so the same rule works
//! for `RuleSet<str>` and `RuleSet<String>`.

pub mod comparison;
pub mod condition;
pub mod contains;
pub mod equality;
pub mod length;
pub mod pattern;
pub mod payment_card;
pub mod required;
pub mod uri;

// Re-export commonly used types
pub use comparison::ComparisonRule;
pub use condition::ConditionRule;
pub use contains::{ContainsRule, ElementsRule};
pub use equality::EqualityRule;
pub use length::{LengthMetric, LengthRule};
pub use pattern::PatternRule;
pub use payment_card::{CardType, PaymentCardRule};
pub use required::RequiredRule;
pub use uri::UrlRule;
