use lumen_value::Value;

use super::Coerce;
use crate::strings::trim_blank;

impl Coerce for f64 {
    const TYPE_NAME: &'static str = "float";

    fn check(input: &Value) -> Option<Self> {
        input.as_float()
    }

    /// Native floats pass through, integers widen and `true` is 1.0. Text is
    /// trimmed and read with a single `.` decimal point and an optional
    /// exponent; thousands separators are not accepted here.
    fn cast(input: &Value) -> Option<Self> {
        match input {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            Value::Bool(true) => Some(1.0),
            Value::Text(text) => parse_decimal(trim_blank(text)),
            Value::Null
            | Value::Bool(false)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Callable(_) => None,
        }
    }
}

/// Parses `[+-]?(d+(.d*)?|.d+)([eE][+-]?d+)?` into a finite float.
fn parse_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let digits_before = count_digits(&bytes[i..]);
    i += digits_before;
    let mut digits_after = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        digits_after = count_digits(&bytes[i..]);
        i += digits_after;
    }
    if digits_before + digits_after == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exponent = count_digits(&bytes[i..]);
        if exponent == 0 {
            return None;
        }
        i += exponent;
    }
    if i != bytes.len() {
        return None;
    }

    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
