use lumen_value::Value;

use super::Coerce;
use crate::strings::trim_blank;

impl Coerce for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn check(input: &Value) -> Option<Self> {
        input.as_bool()
    }

    /// Native booleans pass through. Scalars are matched by their text,
    /// trimmed and case-insensitive: `1 true on yes` are `true`,
    /// `0 false off no` and the empty string are `false`.
    fn cast(input: &Value) -> Option<Self> {
        match input {
            Value::Bool(b) => Some(*b),
            Value::Int(_) | Value::Float(_) => parse_token(&input.to_text()?),
            Value::Text(text) => parse_token(text),
            Value::Null | Value::Array(_) | Value::Object(_) | Value::Callable(_) => None,
        }
    }
}

fn parse_token(text: &str) -> Option<bool> {
    let token = trim_blank(text);
    if ["1", "true", "on", "yes"]
        .iter()
        .any(|t| token.eq_ignore_ascii_case(t))
    {
        Some(true)
    } else if ["", "0", "false", "off", "no"]
        .iter()
        .any(|t| token.eq_ignore_ascii_case(t))
    {
        Some(false)
    } else {
        None
    }
}

/// `a || b`, shaped for folds.
pub fn logical_or(a: bool, b: bool) -> bool {
    a || b
}

/// `a && b`, shaped for folds.
pub fn logical_and(a: bool, b: bool) -> bool {
    a && b
}
