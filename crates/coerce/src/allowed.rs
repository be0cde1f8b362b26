//! Closed-set validation
//!
//! A candidate is accepted only if it is strictly present in the allowed
//! set. Text gets one retry with blank characters trimmed; nothing fuzzier
//! is ever attempted.

use lumen_value::Value;
use tracing::trace;

use crate::foundation::{Validate, ValidationError};
use crate::strings::trim_blank;

/// Returns `candidate` if it is in `allowed`, the trimmed candidate if that
/// is, else `default`.
///
/// ```
/// use lumen_coerce::validate_allowed;
/// use lumen_value::Value;
///
/// let columns = [Value::from("ID"), Value::from("post_title")];
///
/// assert_eq!(validate_allowed(&Value::from("ID  "), &columns, Value::from("name")), Value::from("ID"));
/// assert_eq!(validate_allowed(&Value::from("name"), &columns, Value::from("ID")), Value::from("ID"));
/// ```
pub fn validate_allowed(candidate: &Value, allowed: &[Value], default: Value) -> Value {
    find_allowed(candidate, allowed).unwrap_or_else(|| {
        trace!(candidate = %candidate.kind(), "value not allowed, using default");
        default
    })
}

/// [`validate_allowed`] over string slices. `None` is the "no default"
/// marker.
pub fn validate_allowed_str<'a>(
    candidate: &'a str,
    allowed: &[&str],
    default: Option<&'a str>,
) -> Option<&'a str> {
    if allowed.contains(&candidate) {
        return Some(candidate);
    }
    let trimmed = trim_blank(candidate);
    if trimmed.len() != candidate.len() && allowed.contains(&trimmed) {
        return Some(trimmed);
    }
    default
}

fn find_allowed(candidate: &Value, allowed: &[Value]) -> Option<Value> {
    if allowed.contains(candidate) {
        return Some(candidate.clone());
    }
    let text = candidate.as_str()?;
    let trimmed = trim_blank(text);
    if trimmed.len() == text.len() {
        return None;
    }
    let trimmed = Value::from(trimmed);
    allowed.contains(&trimmed).then_some(trimmed)
}

/// A [`Validate`] implementor for closed sets, with code `not_allowed`.
///
/// ```
/// use lumen_coerce::AllowedValues;
/// use lumen_coerce::foundation::Validate;
/// use lumen_value::Value;
///
/// let order = AllowedValues::new(["asc", "desc"]);
/// assert!(order.is_valid(&Value::from("desc ")));
/// assert_eq!(order.validate(&Value::from("up")).unwrap_err().code, "not_allowed");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedValues {
    allowed: Vec<Value>,
}

impl AllowedValues {
    /// Creates a validator accepting exactly `allowed`.
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed set.
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }

    /// [`validate_allowed`] against this set.
    pub fn select(&self, candidate: &Value, default: Value) -> Value {
        validate_allowed(candidate, &self.allowed, default)
    }
}

impl Validate for AllowedValues {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if find_allowed(input, &self.allowed).is_some() {
            return Ok(());
        }
        let listed = self
            .allowed
            .iter()
            .map(|value| value.to_text().unwrap_or_else(|| value.kind().to_string()))
            .collect::<Vec<_>>()
            .join(", ");
        Err(ValidationError::new("not_allowed", "value is not in the allowed set")
            .with_param("allowed", listed))
    }
}
