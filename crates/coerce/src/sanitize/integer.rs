use std::borrow::Cow;

use lumen_value::Value;
use tracing::trace;

use super::{Sign, leading_sign};
use crate::coerce::parse_integer;
use crate::input::InputSource;

/// Extracts an integer from noisy input.
///
/// Native scalars are read through their textual form. The sign comes from
/// the run before the first digit, then everything but the ASCII digits is
/// stripped. The concatenated digits are read the way
/// [`i64::maybe_cast`](crate::Coerce::maybe_cast) reads text, so a leading
/// `0` reads as octal. No digits, an out-of-range number or a non-scalar
/// input yields `default`.
///
/// Fractions are not special: `-0.5` strips to the digits `05`, which read
/// as octal 5, so the result is `-5`.
///
/// ```
/// use lumen_coerce::sanitize_integer;
/// use lumen_value::Value;
///
/// assert_eq!(sanitize_integer(&Value::from("5-2+3pp"), 0), 523);
/// assert_eq!(sanitize_integer(&Value::from("-5-2+3pp"), 0), -523);
/// assert_eq!(sanitize_integer(&Value::from("-+pp"), 0), 0);
/// ```
pub fn sanitize_integer(input: &Value, default: i64) -> i64 {
    let Some(text) = scalar_text(input) else {
        trace!(input = %input.kind(), "integer sanitizer got a non-scalar input");
        return default;
    };

    let sign = leading_sign(&text);
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        trace!(input = %text, "no digits to sanitize");
        return default;
    }

    let sanitized = match sign {
        Sign::Positive => parse_integer(&digits),
        Sign::Negative => parse_integer(&digits)
            .and_then(i64::checked_neg)
            .or_else(|| parse_integer(&format!("-{digits}"))),
    };
    sanitized.unwrap_or_else(|| {
        trace!(input = %text, %digits, "sanitized digits out of range");
        default
    })
}

/// Reads `name` from `source` and sanitizes it with [`sanitize_integer`].
pub fn sanitize_integer_input<S>(source: &S, name: &str, default: i64) -> i64
where
    S: InputSource + ?Sized,
{
    source
        .get(name)
        .map_or(default, |value| sanitize_integer(&value, default))
}

fn scalar_text(input: &Value) -> Option<Cow<'_, str>> {
    match input {
        Value::Text(text) => Some(Cow::Borrowed(text)),
        Value::Int(_) | Value::Float(_) | Value::Bool(_) => input.to_text().map(Cow::Owned),
        Value::Null | Value::Array(_) | Value::Object(_) | Value::Callable(_) => None,
    }
}
