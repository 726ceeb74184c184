//! Form Validation
//!
//! This example walks through the kinds of fields a sign-up form needs and
//! the rules that back them.
//!
//! Key concepts:
//! - One rule per constraint, collected into a rule set per field
//! - Every failing rule is reported, in the order the rules were added
//! - Dynamic targets for fields that depend on other fields
//!
//! Run with: RUST_LOG=validity=trace cargo run --example form_validation

use std::sync::{Arc, RwLock};
use tracing_subscriber::EnvFilter;
use validity::patterns::{CasePattern, ContainsNumberPattern, EmailPattern};
use validity::rules::{
    ComparisonRule, ConditionRule, ContainsRule, EqualityRule, LengthRule, PatternRule,
};
use validity::{RuleError, RuleSet, ValidationError, ValidationResult, Validator};

fn report(field: &str, input: &str, result: &ValidationResult) {
    if result.is_valid() {
        println!("  {field:<10} {input:?} -> ok");
    } else {
        let errors: Vec<&str> = result.errors().iter().map(|e| e.message()).collect();
        println!("  {field:<10} {input:?} -> {}", errors.join(", "));
    }
}

fn main() -> Result<(), RuleError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Form Validation Example ===\n");

    // Example 1: Password strength with several rules
    println!("Example 1: Password");
    let mut password = RuleSet::<str>::new();
    password.add(LengthRule::range(5, 30, ValidationError::new("5 to 30 characters"))?);
    password.add(PatternRule::new(
        ContainsNumberPattern,
        ValidationError::new("needs a digit"),
    )?);
    password.add(PatternRule::new(
        CasePattern::Uppercase,
        ValidationError::new("needs a capital letter"),
    )?);

    for input in ["abc", "abcdef", "Abcdef1"] {
        report("password", input, &Validator::validate_set(Some(input), &password));
    }
    println!();

    // Example 2: Confirmation against whatever the password field holds now
    println!("Example 2: Confirmation");
    let current = Arc::new(RwLock::new(String::from("Abcdef1")));
    let source = Arc::clone(&current);
    let confirm = EqualityRule::dynamic(
        move || source.read().map(|p| p.clone()).unwrap_or_default(),
        ValidationError::new("passwords differ"),
    );

    report("confirm", "Abcdef1", &Validator::validate(Some("Abcdef1"), &confirm));
    if let Ok(mut guard) = current.write() {
        *guard = String::from("Changed9");
    }
    report("confirm", "Abcdef1", &Validator::validate(Some("Abcdef1"), &confirm));
    println!();

    // Example 3: Email, greeting and free text
    println!("Example 3: Other text fields");
    let email = PatternRule::new(EmailPattern::Standard, ValidationError::new("not an email"))?;
    let greeting = ContainsRule::new(["hello", "hey", "hi"], ValidationError::new("say hi"));
    let bio = ConditionRule::new(
        |input: Option<&str>| input.is_some_and(|text| text.contains("Hello")),
        ValidationError::new("must say Hello"),
    );

    for input in ["user_1@valid.co.uk", "user@invalid@example.com"] {
        report("email", input, &Validator::validate(Some(input), &email));
    }
    report("greeting", "hey", &Validator::validate(Some("hey"), &greeting));
    report("bio", "Goodbye", &Validator::validate(Some("Goodbye"), &bio));
    println!();

    // Example 4: Numeric input
    println!("Example 4: Numeric slider");
    let slider = ComparisonRule::range(5.0_f32, 7.0, ValidationError::new("between 5 and 7"))?;
    for value in [4.5_f32, 6.0] {
        let result = Validator::validate(Some(&value), &slider);
        report("slider", &value.to_string(), &result);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
