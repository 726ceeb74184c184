//! Reusable pattern presets for [`PatternRule`](crate::rules::PatternRule).
//!
//! A preset is nothing more than a regular expression string. Presets are
//! plain values: each rule compiles its own copy, and there is no shared
//! registry.

/// Anything that can describe the format an input must conform to.
pub trait ValidationPattern {
    /// Regular expression the whole input must match.
    fn pattern(&self) -> &str;
}

impl ValidationPattern for str {
    fn pattern(&self) -> &str {
        self
    }
}

impl ValidationPattern for String {
    fn pattern(&self) -> &str {
        self
    }
}

impl<P: ValidationPattern + ?Sized> ValidationPattern for &P {
    fn pattern(&self) -> &str {
        (**self).pattern()
    }
}

/// Email address formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailPattern {
    /// Something, an `@`, something, a `.`, something.
    Simple,
    /// Word characters in the local part, a single `@`, and a dotted domain
    /// ending in an alphabetic label of two or more letters.
    Standard,
}

impl ValidationPattern for EmailPattern {
    fn pattern(&self) -> &str {
        match self {
            Self::Simple => r"^.+@.+\..+$",
            Self::Standard => {
                r"^[_A-Za-z0-9+-]+(\.[_A-Za-z0-9+-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(\.[A-Za-z]{2,})$"
            }
        }
    }
}

/// Requires at least one letter of the given case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasePattern {
    Uppercase,
    Lowercase,
}

impl ValidationPattern for CasePattern {
    fn pattern(&self) -> &str {
        match self {
            Self::Uppercase => r"^.*?[A-Z].*?$",
            Self::Lowercase => r"^.*?[a-z].*?$",
        }
    }
}

/// Requires at least one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContainsNumberPattern;

impl ValidationPattern for ContainsNumberPattern {
    fn pattern(&self) -> &str {
        r".*\d.*"
    }
}
