//! String micro-helpers
//!
//! Small, total string utilities shared by the coercions and exposed for
//! callers normalizing free-form names and labels.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// Tag-like runs: `<` followed by a non-blank character up to the next `>` or
// the end of the text.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>\s][^>]*>?").expect("valid tag regex"));

/// Characters trimmed by [`trim_blank`].
pub const BLANK: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trims leading and trailing blank characters: space, tab, newline,
/// carriage return, NUL and vertical tab.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(BLANK)
}

/// Returns `true` if `haystack` starts with `needle`. Empty needles match.
pub fn starts_with(haystack: &str, needle: &str) -> bool {
    haystack.starts_with(needle)
}

/// Returns `true` if `haystack` ends with `needle`. Empty needles match.
pub fn ends_with(haystack: &str, needle: &str) -> bool {
    haystack.ends_with(needle)
}

/// Returns `true` if `haystack` contains `needle`. Empty needles match.
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// The default prefix of [`maybe_prefix`] and [`maybe_unprefix`].
pub const DEFAULT_PREFIX: &str = "_";

/// Prepends `prefix` unless `text` already starts with it.
pub fn maybe_prefix<'a>(text: &'a str, prefix: &str) -> Cow<'a, str> {
    if text.starts_with(prefix) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{prefix}{text}"))
    }
}

/// Removes `prefix` if `text` starts with it.
pub fn maybe_unprefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    text.strip_prefix(prefix).unwrap_or(text)
}

/// Appends `suffix` unless `text` already ends with it.
pub fn maybe_suffix<'a>(text: &'a str, suffix: &str) -> Cow<'a, str> {
    if text.ends_with(suffix) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{text}{suffix}"))
    }
}

/// Removes `suffix` if `text` ends with it.
pub fn maybe_unsuffix<'a>(text: &'a str, suffix: &str) -> &'a str {
    text.strip_suffix(suffix).unwrap_or(text)
}

/// Replaces each placeholder with its value, one pair after the other.
///
/// Later pairs see the output of earlier ones. Empty placeholders are
/// skipped.
///
/// ```
/// use lumen_coerce::strings::replace_placeholders;
///
/// let text = replace_placeholders(
///     "Hello {name}! How are you {time}?",
///     &[("{name}", "tester"), ("{time}", "today")],
/// );
/// assert_eq!(text, "Hello tester! How are you today?");
/// ```
pub fn replace_placeholders(text: &str, pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .filter(|(placeholder, _)| !placeholder.is_empty())
        .fold(text.to_owned(), |acc, (placeholder, value)| {
            acc.replace(placeholder, value)
        })
}

/// Keeps letters, digits and whitespace of any script.
pub fn to_alphanumeric_unicode_string(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Keeps `A-Z`, `a-z`, `0-9` and the space character.
pub fn to_alphanumeric_ascii_string(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Strips tags, encodes quotes as `&#39;` / `&#34;`, and drops control and
/// non-ASCII characters.
pub fn to_ascii_input_string(text: &str) -> String {
    let untagged = TAG.replace_all(text, "");
    let mut out = String::with_capacity(untagged.len());
    for c in untagged.chars() {
        match c {
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            _ => {}
        }
    }
    out
}

/// Replaces `unsafe_characters` pairs, applies [`to_ascii_input_string`] and
/// lowercases the result.
///
/// ```
/// use lumen_coerce::strings::to_safe_string;
///
/// let safe = to_safe_string(
///     "señorita / bibliotecă / ändern",
///     &[("ñ", "n"), ("ă", "a"), ("ä", "ae"), (" ", "")],
/// );
/// assert_eq!(safe, "senorita/biblioteca/aendern");
/// ```
pub fn to_safe_string(text: &str, unsafe_characters: &[(&str, &str)]) -> String {
    to_ascii_input_string(&replace_placeholders(text, unsafe_characters)).to_lowercase()
}

/// Expands a size shorthand such as `"2K"` or `"3M"` into a number.
///
/// `K`, `M`, `G`, `T` and `P` (any case) multiply by successive powers of
/// 1024. Without a suffix the whole text is read. The numeric part is the
/// leading integer after trimming; text without one reads as `0`. The
/// result saturates at the `i64` bounds.
pub fn letter_to_number(size: &str) -> i64 {
    let size = trim_blank(size);
    let (number, exponent) = match size.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some('K') => (&size[..size.len() - 1], 1),
        Some('M') => (&size[..size.len() - 1], 2),
        Some('G') => (&size[..size.len() - 1], 3),
        Some('T') => (&size[..size.len() - 1], 4),
        Some('P') => (&size[..size.len() - 1], 5),
        _ => (size, 0),
    };

    let base = leading_integer(trim_blank(number));
    (0..exponent).fold(base, |acc, _| acc.saturating_mul(1024))
}

fn leading_integer(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    let magnitude = digits[..end].bytes().fold(0_i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    if negative { -magnitude } else { magnitude }
}
