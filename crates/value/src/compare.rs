//! Loose comparison

use crate::array::Array;
use crate::value::Value;

impl Value {
    /// The host's loose equality.
    ///
    /// Numbers compare by magnitude across `Int` and `Float`, numeric text
    /// compares numerically against numbers and other numeric text, booleans
    /// compare by truthiness, and `null` equals every falsy scalar. Arrays are
    /// loosely equal when they hold the same keys with loosely equal values,
    /// in any order. Objects and callables compare strictly.
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(b), other) | (other, Self::Bool(b)) => *b == other.is_truthy(),
            (Self::Null, Self::Null) => true,
            (Self::Null, Self::Text(s)) | (Self::Text(s), Self::Null) => s.is_empty(),
            (Self::Null, Self::Array(a)) | (Self::Array(a), Self::Null) => a.is_empty(),
            (Self::Null, other) | (other, Self::Null) => {
                matches!(other, Self::Int(_) | Self::Float(_)) && !other.is_truthy()
            }
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => (*a as f64) == *b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (number @ (Self::Int(_) | Self::Float(_)), Self::Text(text))
            | (Self::Text(text), number @ (Self::Int(_) | Self::Float(_))) => {
                number_equals_text(number, text)
            }
            (Self::Text(a), Self::Text(b)) => match (numeric_text(a), numeric_text(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (Self::Array(a), Self::Array(b)) => arrays_loosely_equal(a, b),
            _ => self == other,
        }
    }
}

fn number_equals_text(number: &Value, text: &str) -> bool {
    let magnitude = match number {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        _ => return false,
    };
    match numeric_text(text) {
        Some(parsed) => parsed == magnitude,
        None => number.to_text().as_deref() == Some(text),
    }
}

fn arrays_loosely_equal(a: &Array, b: &Array) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.get(key)
                .is_some_and(|candidate| value.loosely_equals(candidate))
        })
}

/// Parses a host numeric string: optional surrounding whitespace, optional
/// sign, decimal digits with an optional fraction and exponent.
fn numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let integer_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - integer_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let fraction_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - fraction_start;
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exponent_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == exponent_start {
            return None;
        }
        i = j;
    }
    if i != bytes.len() {
        return None;
    }
    trimmed.parse().ok()
}
