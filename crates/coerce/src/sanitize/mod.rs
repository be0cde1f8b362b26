//! Numeric sanitization of noisy input
//!
//! The sanitizers pull a number out of free-form text such as `"-5-2+3pp"`
//! or `"19.500,5"`. Like the coercions they never fail: input with no usable
//! number yields the caller's default.
//!
//! The sign is read before any noise is removed. Stripping deletes every
//! `-`, so a sign decided afterwards would turn `"-523"` into `523`. The
//! sign is negative when the run of characters before the first digit
//! contains a `-`, which also makes `"abc-5"` negative.

mod float;
mod integer;
mod number_format;

pub use float::{sanitize_float, sanitize_float_input};
pub use integer::{sanitize_integer, sanitize_integer_input};
pub use number_format::NumberFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
}

/// Reads the sign from the characters preceding the first ASCII digit.
fn leading_sign(text: &str) -> Sign {
    let run_end = text
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(text.len());
    if text[..run_end].contains('-') {
        Sign::Negative
    } else {
        Sign::Positive
    }
}
