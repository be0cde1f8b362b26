//! Property-based tests for the coercion tiers using proptest
//!
//! These tests verify the invariants every target type shares: coercion is
//! idempotent, strict validation is a subset of casting, and no input
//! makes a coercion or a sanitizer fail.

use lumen_coerce::{Coerce, sanitize_float, sanitize_integer};
use lumen_value::{Array, Value};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("NaN never equals itself", |f| !f.is_nan())
            .prop_map(Value::Float),
        "[ -~]{0,12}".prop_map(Value::from),
        "[ 0-9+.,eE-]{0,12}".prop_map(Value::from),
        prop::sample::select(vec!["yes", "off", " 0x1F ", "017", "1e3", ".5", "TRUE"])
            .prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 8, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(|items| Value::Array(Array::list(items)))
    })
}

fn idempotent<T>(input: &Value, default: Option<T>) -> Result<(), TestCaseError>
where
    T: Coerce + Clone + PartialEq + std::fmt::Debug,
{
    let once = T::maybe_cast(input, default.clone());
    if let Some(value) = once.clone() {
        let twice = T::maybe_cast(&value.into(), default);
        prop_assert_eq!(twice, once);
    }
    Ok(())
}

fn validate_implies_cast<T>(input: &Value) -> Result<(), TestCaseError>
where
    T: Coerce + PartialEq + std::fmt::Debug,
{
    if let Some(valid) = T::validate(input, None) {
        prop_assert_eq!(T::maybe_cast(input, None), Some(valid));
    }
    Ok(())
}

// ===== COERCION PROPERTIES =====

proptest! {
    #[test]
    fn maybe_cast_is_idempotent(input in value()) {
        idempotent::<bool>(&input, Some(false))?;
        idempotent::<i64>(&input, Some(-1))?;
        idempotent::<f64>(&input, Some(0.5))?;
        idempotent::<String>(&input, None)?;
        idempotent::<Array>(&input, None)?;
    }

    #[test]
    fn validate_is_a_subset_of_maybe_cast(input in value()) {
        validate_implies_cast::<bool>(&input)?;
        validate_implies_cast::<i64>(&input)?;
        validate_implies_cast::<f64>(&input)?;
        validate_implies_cast::<String>(&input)?;
        validate_implies_cast::<Array>(&input)?;
    }

    #[test]
    fn misses_return_the_default_unchanged(input in value(), default in any::<i64>()) {
        if i64::cast(&input).is_none() {
            prop_assert_eq!(i64::maybe_cast(&input, Some(default)), Some(default));
            prop_assert_eq!(i64::maybe_cast(&input, None), None);
        }
    }

    #[test]
    fn float_casts_are_finite(input in value()) {
        if let Some(f) = f64::maybe_cast(&input, None) {
            prop_assert!(f.is_finite() || matches!(input, Value::Float(_)));
        }
    }
}

// ===== SANITIZER PROPERTIES =====

proptest! {
    #[test]
    fn sanitizers_are_total(input in value()) {
        let _ = sanitize_integer(&input, 0);
        let f = sanitize_float(&input, 0.0);
        prop_assert!(!f.is_nan());
    }

    #[test]
    fn plain_integers_survive_sanitizing(x in any::<i64>()) {
        prop_assert_eq!(sanitize_integer(&Value::Int(x), 0), x);
        prop_assert_eq!(sanitize_integer(&Value::from(x.to_string()), 0), x);
    }

    #[test]
    fn digit_noise_keeps_the_digits(digits in "[1-9][0-9]{0,8}", noise in "[a-z#%$ ]{0,4}") {
        let expected: i64 = digits.parse().unwrap();
        let input = Value::from(format!("{noise}{digits}{noise}"));
        prop_assert_eq!(sanitize_integer(&input, 0), expected);
    }

    #[test]
    fn grouped_floats_read_under_both_conventions(
        whole in 1_000u32..1_000_000,
        cents in 0u32..100,
    ) {
        let expected = f64::from(whole) + f64::from(cents) / 100.0;
        let thousands = whole / 1_000;
        let rest = whole % 1_000;

        let dot = format!("{thousands},{rest:03}.{cents:02}");
        let comma = format!("{thousands}.{rest:03},{cents:02}");

        let from_dot = sanitize_float(&Value::from(dot), -1.0);
        let from_comma = sanitize_float(&Value::from(comma), -1.0);
        prop_assert!((from_dot - expected).abs() < 1e-6);
        prop_assert_eq!(from_dot, from_comma);
    }
}
