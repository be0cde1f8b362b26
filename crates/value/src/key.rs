//! Host array keys

use std::fmt;

use crate::value::Value;

/// A key of a host [`Array`](crate::Array).
///
/// Keys built from text follow host-array semantics: a canonical decimal
/// integer string (`"0"`, `"17"`, `"-3"`) becomes an [`Key::Index`], anything
/// else (`"017"`, `"-0"`, `"+1"`, `" 1"`) stays a [`Key::Name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key.
    Index(i64),
    /// String key.
    Name(String),
}

impl Key {
    /// Builds a key from text, normalizing canonical integers to [`Key::Index`].
    pub fn from_text(text: &str) -> Self {
        match canonical_index(text) {
            Some(index) => Self::Index(index),
            None => Self::Name(text.to_owned()),
        }
    }

    /// Returns the integer key, if this is one.
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the string key, if this is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }

    /// Returns `true` for string keys.
    pub const fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    /// Boxes the key as a value (`Int` or `Text`).
    pub fn to_value(&self) -> Value {
        match self {
            Self::Index(index) => Value::Int(*index),
            Self::Name(name) => Value::Text(name.clone()),
        }
    }
}

fn canonical_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros and negative zero are not canonical.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if digits == "0" && text.len() != digits.len() {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index as i64)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        match canonical_index(&text) {
            Some(index) => Self::Index(index),
            None => Self::Name(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Key::Index(0))]
    #[case("17", Key::Index(17))]
    #[case("-3", Key::Index(-3))]
    #[case("017", Key::Name("017".into()))]
    #[case("-0", Key::Name("-0".into()))]
    #[case("+1", Key::Name("+1".into()))]
    #[case(" 1", Key::Name(" 1".into()))]
    #[case("", Key::Name(String::new()))]
    #[case("99999999999999999999", Key::Name("99999999999999999999".into()))]
    fn text_keys_normalize_like_host_arrays(#[case] text: &str, #[case] expected: Key) {
        assert_eq!(Key::from(text), expected);
        assert_eq!(Key::from(text.to_owned()), expected);
    }

    #[test]
    fn display_round_trips_text() {
        assert_eq!(Key::Index(-3).to_string(), "-3");
        assert_eq!(Key::from("name").to_string(), "name");
    }
}
