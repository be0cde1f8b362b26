//! Error type for validation failures
//!
//! All string fields use `Cow<'static, str>` so static codes and messages do
//! not allocate.

use std::borrow::Cow;
use std::fmt;

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use lumen_coerce::foundation::ValidationError;
///
/// let error = ValidationError::new("not_allowed", "value is not in the allowed set")
///     .with_param("allowed", "ID, post_title");
///
/// assert_eq!(error.param("allowed"), Some("ID, post_title"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
