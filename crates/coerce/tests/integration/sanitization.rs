//! Integration test: salvaging numbers from noisy input

use lumen_coerce::{
    Coerce, EnvInput, NumberFormat, sanitize_float, sanitize_float_input, sanitize_integer,
    sanitize_integer_input,
};
use lumen_value::{Array, Value};
use rstest::rstest;

#[rstest]
#[case("5-2+3pp", 523)]
#[case("-5-2+3pp", -523)]
#[case("-+pp", 0)]
#[case("  42 items", 42)]
#[case("abc-5", -5)]
#[case("", 0)]
fn integers(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(sanitize_integer(&Value::from(input), 0), expected);
}

#[rstest]
#[case("19,500.5", 19500.5)]
#[case("19.500,5", 19500.5)]
#[case("19,5", 19.5)]
#[case("1.2e3", 1200.0)]
#[case("7E-10", 7e-10)]
#[case("€ 1,234.50", 1234.5)]
#[case("-3.5 kg", -3.5)]
#[case("no digits", 0.0)]
fn floats(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(sanitize_float(&Value::from(input), 0.0), expected);
}

#[test]
fn non_scalars_fall_back() {
    assert_eq!(sanitize_integer(&Value::Array(Array::list([1])), 7), 7);
    assert_eq!(sanitize_float(&Value::Null, 1.5), 1.5);
}

#[test]
fn sanitized_values_are_ordinary_numbers() {
    let total = sanitize_float(&Value::from("1.299,99"), 0.0);

    assert_eq!(f64::validate(&Value::from(total), None), Some(1299.99));
    assert_eq!(i64::maybe_cast(&Value::from(sanitize_integer(&Value::from("#12"), 0)), None), Some(12));
}

#[test]
fn environment_numbers() {
    let env = EnvInput::from_vars([("MEMORY", "256M"), ("PRICE", "1.000,25")]);

    assert_eq!(sanitize_integer_input(&env, "MEMORY", 0), 256);
    assert_eq!(sanitize_float_input(&env, "PRICE", 0.0), 1000.25);
    assert_eq!(sanitize_float_input(&env, "MISSING", 9.5), 9.5);
}

#[test]
fn conventions_are_data() {
    let swiss = NumberFormat::new('.', Some('\''));

    assert_eq!(swiss.parse("1'234.5"), Some(1234.5));
    assert_eq!(NumberFormat::DOT_DECIMAL.parse("1'234.5"), None);
}
