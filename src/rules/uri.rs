//! Absolute URL checks.

use crate::core::{ValidationError, ValidationRule};
use url::Url;

/// Passes when the input parses as an absolute URL.
///
/// Optionally restricted to a set of schemes, compared case-insensitively.
/// Missing input fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRule<E = ValidationError> {
    schemes: Vec<String>,
    error: E,
}

impl<E> UrlRule<E> {
    /// Create a rule accepting any scheme.
    pub fn new(error: E) -> Self {
        Self {
            schemes: Vec::new(),
            error,
        }
    }

    /// Accept only URLs whose scheme is one of `schemes`.
    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = schemes
            .into_iter()
            .map(|scheme| scheme.into().to_ascii_lowercase())
            .collect();
        self
    }
}

impl<U, E> ValidationRule<U> for UrlRule<E>
where
    U: AsRef<str> + ?Sized,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        let Some(Ok(url)) = input.map(|input| Url::parse(input.as_ref())) else {
            return false;
        };

        self.schemes.is_empty() || self.schemes.iter().any(|scheme| scheme == url.scheme())
    }

    fn error(&self) -> &E {
        &self.error
    }
}
