use std::fmt;

/// Separator convention for reading formatted numbers.
///
/// `decimal` separates the fraction; `thousands`, when set, may group the
/// integer part in runs of exactly three digits after a leading group of one
/// to three. The two conventions the float sanitizer tries are
/// [`NumberFormat::DOT_DECIMAL`] (`19,500.5`) and
/// [`NumberFormat::COMMA_DECIMAL`] (`19.500,5`).
///
/// ```
/// use lumen_coerce::NumberFormat;
///
/// assert_eq!(NumberFormat::DOT_DECIMAL.parse("19,500.5"), Some(19500.5));
/// assert_eq!(NumberFormat::COMMA_DECIMAL.parse("19.500,5"), Some(19500.5));
/// assert_eq!(NumberFormat::DOT_DECIMAL.parse("19,5"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Decimal separator.
    pub decimal: char,
    /// Optional thousands separator.
    pub thousands: Option<char>,
}

impl NumberFormat {
    /// `.` decimal point, `,` thousands grouping.
    pub const DOT_DECIMAL: Self = Self::new('.', Some(','));

    /// `,` decimal point, `.` thousands grouping.
    pub const COMMA_DECIMAL: Self = Self::new(',', Some('.'));

    pub const fn new(decimal: char, thousands: Option<char>) -> Self {
        Self { decimal, thousands }
    }

    /// Parses `text` under this convention.
    ///
    /// Accepts an optional sign, an integer part (plain or grouped), an
    /// optional fraction, and an optional `e`/`E` exponent; at least one
    /// digit is required and the whole text must be consumed. Non-finite
    /// results are rejected.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let mut chars = text.chars().peekable();
        let mut normalized = String::with_capacity(text.len() + 2);

        if let Some(sign) = chars.next_if(|c| matches!(c, '+' | '-')) {
            normalized.push(sign);
        }

        let leading = take_digits(&mut chars, &mut normalized);
        if let Some(thousands) = self.thousands
            && chars.peek() == Some(&thousands)
        {
            if !(1..=3).contains(&leading) {
                return None;
            }
            while chars.next_if_eq(&thousands).is_some() {
                if take_digits(&mut chars, &mut normalized) != 3 {
                    return None;
                }
            }
        }

        let mut fraction = 0;
        if chars.next_if_eq(&self.decimal).is_some() {
            normalized.push('.');
            fraction = take_digits(&mut chars, &mut normalized);
        }
        if leading + fraction == 0 {
            return None;
        }

        if let Some(e) = chars.next_if(|c| matches!(c, 'e' | 'E')) {
            normalized.push(e);
            if let Some(sign) = chars.next_if(|c| matches!(c, '+' | '-')) {
                normalized.push(sign);
            }
            if take_digits(&mut chars, &mut normalized) == 0 {
                return None;
            }
        }

        if chars.next().is_some() {
            return None;
        }
        normalized.parse::<f64>().ok().filter(|f| f.is_finite())
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.thousands {
            Some(thousands) => write!(f, "decimal '{}', thousands '{thousands}'", self.decimal),
            None => write!(f, "decimal '{}'", self.decimal),
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) -> usize {
    let mut count = 0;
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        out.push(digit);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("523,453.3", Some(523_453.3))]
    #[case("1,234,567", Some(1_234_567.0))]
    #[case("1234.567", Some(1234.567))]
    #[case("-5.", Some(-5.0))]
    #[case(".25", Some(0.25))]
    #[case("1.2e3", Some(1200.0))]
    #[case("7E-10", Some(7e-10))]
    #[case("19,5", None)]
    #[case("1234,567", None)]
    #[case(",123", None)]
    #[case("1,23", None)]
    #[case("1,2345", None)]
    #[case("19.500,5", None)]
    #[case("523,43.3", None)]
    #[case("1e", None)]
    #[case(".", None)]
    #[case("", None)]
    #[case("1e999", None)]
    fn dot_decimal(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(NumberFormat::DOT_DECIMAL.parse(text), expected);
    }

    #[rstest]
    #[case("19,5", Some(19.5))]
    #[case("19.500,5", Some(19500.5))]
    #[case("-52343,3", Some(-52343.3))]
    #[case("1,2e3", Some(1200.0))]
    #[case("523,43.3", None)]
    fn comma_decimal(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(NumberFormat::COMMA_DECIMAL.parse(text), expected);
    }

    #[test]
    fn without_grouping_separators_are_rejected() {
        let plain = NumberFormat::new('.', None);
        assert_eq!(plain.parse("1234.5"), Some(1234.5));
        assert_eq!(plain.parse("1,234.5"), None);
        assert_eq!(plain.to_string(), "decimal '.'");
    }
}
