use std::borrow::Cow;

use lumen_value::Value;
use tracing::{debug, trace};

use super::{NumberFormat, Sign, leading_sign};
use crate::input::InputSource;

/// Hypotheses tried in order by [`sanitize_float`].
const HYPOTHESES: [NumberFormat; 2] = [NumberFormat::DOT_DECIMAL, NumberFormat::COMMA_DECIMAL];

/// Extracts a float from noisy input, disambiguating `.` and `,`.
///
/// Native floats and integers pass through and booleans are read through
/// their text. Text is reduced to digits, signs, `.`, `,` and exponent
/// markers, and `+` is dropped. Without an exponent marker the sign is taken
/// from the run before the first digit, every `-` is removed and a single
/// one is put back in front for negative numbers; with one the text is kept
/// as is. The result is read with `.` as the decimal point first and with
/// `,` second. Anything else yields `default`.
///
/// ```
/// use lumen_coerce::sanitize_float;
/// use lumen_value::Value;
///
/// assert_eq!(sanitize_float(&Value::from("19,500.5"), 0.0), 19500.5);
/// assert_eq!(sanitize_float(&Value::from("19.500,5"), 0.0), 19500.5);
/// assert_eq!(sanitize_float(&Value::from("-5-2f+3.3pp"), 0.0), -523.3);
/// ```
pub fn sanitize_float(input: &Value, default: f64) -> f64 {
    let text: Cow<'_, str> = match input {
        Value::Float(f) if f.is_finite() => return *f,
        Value::Int(i) => return *i as f64,
        Value::Text(text) => Cow::Borrowed(text),
        Value::Bool(_) => match input.to_text() {
            Some(text) => Cow::Owned(text),
            None => return default,
        },
        Value::Float(_) | Value::Null | Value::Array(_) | Value::Object(_) | Value::Callable(_) => {
            trace!(input = %input.kind(), "float sanitizer got an unusable input");
            return default;
        }
    };

    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ',' | 'e' | 'E'))
        .collect();

    let candidate = if filtered.contains(['e', 'E']) {
        filtered
    } else {
        let body = filtered.replace('-', "");
        match leading_sign(&text) {
            Sign::Negative => format!("-{body}"),
            Sign::Positive => body,
        }
    };

    for format in HYPOTHESES {
        if let Some(value) = format.parse(&candidate) {
            debug!(input = %text, %candidate, hypothesis = %format, value, "sanitized float");
            return value;
        }
    }
    trace!(input = %text, %candidate, "no separator convention matched");
    default
}

/// Reads `name` from `source` and sanitizes it with [`sanitize_float`].
pub fn sanitize_float_input<S>(source: &S, name: &str, default: f64) -> f64
where
    S: InputSource + ?Sized,
{
    source
        .get(name)
        .map_or(default, |value| sanitize_float(&value, default))
}
