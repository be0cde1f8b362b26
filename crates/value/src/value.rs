//! The boxed value type

use std::fmt;

use crate::array::Array;
use crate::callable::Callable;
use crate::object::Object;

/// An untrusted value of unknown origin.
///
/// Equality (`==`) is strict: variants must match and payloads must be equal,
/// so `Int(3) != Text("3")` and `Int(1) != Float(1.0)`. Use
/// [`Value::loosely_equals`] for the host's loose comparison.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Native boolean.
    Bool(bool),
    /// Native 64-bit integer.
    Int(i64),
    /// Native 64-bit float.
    Float(f64),
    /// Text.
    Text(String),
    /// Sequence or mapping.
    Array(Array),
    /// Structured host object.
    Object(Object),
    /// Invocable reference.
    Callable(Callable),
}

/// Discriminant of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Array,
    Object,
    Callable,
}

impl ValueKind {
    /// Lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Text => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Callable => "callable",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Callable(_) => ValueKind::Callable,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(c) => Some(c),
            _ => None,
        }
    }

    /// Host truthiness: `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty
    /// arrays are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => !(s.is_empty() || s == "0"),
            Self::Array(a) => !a.is_empty(),
            Self::Object(_) | Self::Callable(_) => true,
        }
    }

    /// The host's textual form of the value, where one exists.
    ///
    /// `null` is `""`, booleans are `"1"` / `""`, numbers use their display
    /// form, objects use their own representation. Arrays, callables and
    /// objects without a representation have none.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => Some(String::new()),
            Self::Bool(true) => Some("1".to_owned()),
            Self::Bool(false) => Some(String::new()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(format_float(*f)),
            Self::Text(s) => Some(s.clone()),
            Self::Object(o) => o.to_text(),
            Self::Array(_) | Self::Callable(_) => None,
        }
    }
}

/// Significant digits kept when a float is rendered as text.
const FLOAT_PRECISION: i32 = 14;

/// Formats a float the way the host stringifies it.
///
/// The value is rounded to 14 significant digits, so `0.1 + 0.2` prints as
/// `0.3`. Integral values print without a fraction (`15`). A decimal
/// exponent below -4 or at least 14 switches to `1.0E+14` / `1.0E-7`
/// notation. Non-finite values print as `INF`, `-INF` and `NAN`.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_owned();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_owned();
    }
    if f == 0.0 {
        // Covers -0.0, which prints as "-0" on the host.
        return if f.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // `{:.13e}` rounds to 14 significant digits: `d.ddddddddddddde<exp>`.
    let rounded = format!("{:.*e}", (FLOAT_PRECISION - 1) as usize, f.abs());
    let (mantissa, exponent) = rounded.split_once('e').unwrap_or((&rounded, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let sign = if f.is_sign_negative() { "-" } else { "" };

    if !(-4..FLOAT_PRECISION).contains(&exponent) {
        let (lead, fraction) = digits.split_at(1);
        let fraction = if fraction.is_empty() { "0" } else { fraction };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{lead}.{fraction}E{exponent_sign}{}", exponent.abs());
    }

    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("{sign}0.{zeros}{digits}");
    }
    let whole_len = exponent as usize + 1;
    if digits.len() <= whole_len {
        let padding = "0".repeat(whole_len - digits.len());
        format!("{sign}{digits}{padding}")
    } else {
        let (whole, fraction) = digits.split_at(whole_len);
        format!("{sign}{whole}.{fraction}")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(values.into_iter().collect())
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Self::Callable(c)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(15.0, "15")]
    #[case(1.5, "1.5")]
    #[case(-523.3, "-523.3")]
    #[case(0.0, "0")]
    #[case(-0.0, "-0")]
    #[case(1e20, "1.0E+20")]
    #[case(1.5e20, "1.5E+20")]
    #[case(1e-7, "1.0E-7")]
    #[case(0.1 + 0.2, "0.3")]
    #[case(1.0 / 3.0, "0.33333333333333")]
    #[case(0.0001, "0.0001")]
    #[case(-0.000_012_5, "-1.25E-5")]
    #[case(1e13, "10000000000000")]
    #[case(1e14, "1.0E+14")]
    #[case(99_999_999_999_999.9, "1.0E+14")]
    #[case(123_456_789.123_456_78, "123456789.12346")]
    #[case(f64::INFINITY, "INF")]
    #[case(f64::NEG_INFINITY, "-INF")]
    fn floats_format_like_the_host(#[case] input: f64, #[case] expected: &str) {
        assert_eq!(format_float(input), expected);
    }

    #[test]
    fn nan_formats_as_nan() {
        assert_eq!(format_float(f64::NAN), "NAN");
    }

    #[rstest]
    #[case(Value::Null, false)]
    #[case(Value::Bool(true), true)]
    #[case(Value::Int(0), false)]
    #[case(Value::Int(-1), true)]
    #[case(Value::Float(0.0), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from("0"), false)]
    #[case(Value::from("0.0"), true)]
    #[case(Value::Array(Array::new()), false)]
    #[case(Value::from(vec![Value::Null]), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn textual_forms() {
        assert_eq!(Value::Bool(true).to_text().as_deref(), Some("1"));
        assert_eq!(Value::Bool(false).to_text().as_deref(), Some(""));
        assert_eq!(Value::Int(-7).to_text().as_deref(), Some("-7"));
        assert_eq!(Value::Array(Array::new()).to_text(), None);
    }

    #[test]
    fn strict_equality_distinguishes_kinds() {
        assert_ne!(Value::Int(3), Value::from("3"));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }
}
