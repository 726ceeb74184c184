//! The default error payload attached to rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Describes why a rule rejected its input.
///
/// Rules are generic over their error payload, so callers can attach any
/// `Clone` type. `ValidationError` is the ready-made choice: a human-readable
/// message plus an optional machine-readable code.
///
/// # Example
///
/// ```rust
/// use validity::ValidationError;
///
/// let error = ValidationError::new("Too short").with_code("length.min");
///
/// assert_eq!(error.message(), "Too short");
/// assert_eq!(error.code(), Some("length.min"));
/// assert_eq!(error.to_string(), "Too short");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ValidationError {
    /// Create an error with `message` and no code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Attach a machine-readable code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The machine-readable code, if one was attached.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
