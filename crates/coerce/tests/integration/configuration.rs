//! Integration test: constants layered over the environment

use lumen_coerce::{Coerce, Constants, ConstantsError, EnvInput, sanitize_integer_input};
use lumen_coerce::strings::letter_to_number;
use lumen_value::Value;
use pretty_assertions::assert_eq;
use serde_json::json;

fn constants() -> Constants {
    Constants::with_fallback(EnvInput::from_vars([
        ("SCRIPT_DEBUG", "true"),
        ("WP_MEMORY_LIMIT", "64M"),
        ("POSTS_PER_PAGE", "10"),
    ]))
}

#[test]
fn json_overrides_take_precedence() {
    let mut constants = constants();
    constants
        .extend_from_json(json!({ "SCRIPT_DEBUG": false, "POSTS_PER_PAGE": "25" }))
        .unwrap();

    assert!(!constants.is_true("SCRIPT_DEBUG"));
    assert_eq!(constants.get_as::<i64>("POSTS_PER_PAGE", Some(10)), Some(25));

    constants.clear_all();
    assert!(constants.is_true("SCRIPT_DEBUG"));
    assert_eq!(constants.get_as::<i64>("POSTS_PER_PAGE", None), Some(10));
}

#[test]
fn memory_limits_read_with_suffixes() {
    let constants = constants();
    let limit = constants
        .get_as::<String>("WP_MEMORY_LIMIT", None)
        .map_or(0, |limit| letter_to_number(&limit));

    assert_eq!(limit, 64 * 1024 * 1024);
    assert_eq!(sanitize_integer_input(&constants, "WP_MEMORY_LIMIT", 0), 64);
}

#[test]
fn constants_are_an_input_source() {
    let mut constants = constants();
    constants.set("THEME", Value::from("twentytwenty"));

    assert_eq!(String::maybe_cast_input(&constants, "THEME", None), Some("twentytwenty".to_owned()));
    assert_eq!(bool::maybe_cast_input(&constants, "UNDEFINED", None), None);
}

#[test]
fn scalar_documents_are_rejected() {
    let error = constants().extend_from_json(json!("SCRIPT_DEBUG")).unwrap_err();

    assert_eq!(error, ConstantsError::NotAnObject { found: "string" });
    assert_eq!(
        error.to_string(),
        "constants must be loaded from a JSON object, got string"
    );
}
