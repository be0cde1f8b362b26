use lumen_value::Value;

use super::Coerce;
use crate::strings::trim_blank;

// Exclusive upper bound of `i64` as a float; `i64::MIN` is exact.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Coerce for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn check(input: &Value) -> Option<Self> {
        input.as_int()
    }

    /// Native integers pass through; `true` is 1. Floats are accepted when
    /// they are whole and in range. Text is trimmed and read as decimal
    /// (`-15`), octal (`017`, `0o17`) or hexadecimal (`0xF`); out-of-range
    /// numbers are misses.
    fn cast(input: &Value) -> Option<Self> {
        match input {
            Value::Int(i) => Some(*i),
            Value::Bool(true) => Some(1),
            Value::Float(f) => from_whole_float(*f),
            Value::Text(text) => parse_integer(text),
            Value::Null
            | Value::Bool(false)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Callable(_) => None,
        }
    }
}

fn from_whole_float(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f >= -I64_UPPER && f < I64_UPPER).then_some(f as i64)
}

/// Parses decimal, octal or hexadecimal integer text.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    let text = trim_blank(text);
    let bytes = text.as_bytes();

    if bytes.len() > 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return radix(&text[2..], 16),
            b'o' | b'O' => return radix(&text[2..], 8),
            _ => {}
        }
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return radix(&text[1..], 8);
    }

    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let canonical = digits == "0" || (!digits.is_empty() && !digits.starts_with('0'));
    if !canonical || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn radix(digits: &str, radix: u32) -> Option<i64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}
