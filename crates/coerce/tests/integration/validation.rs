//! Integration test: coercing a decoded request payload
//!
//! A JSON body is decoded into host values and every field is read with the
//! coercion tier its caller would use.

use lumen_coerce::foundation::Validate;
use lumen_coerce::{AllowedValues, Coerce, InputSource, IsList, validate_allowed};
use lumen_value::{Array, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn request() -> Array {
    let body = json!({
        "debug": " Yes ",
        "page": "017",
        "per_page": 20,
        "ratio": "0.75",
        "title": 15,
        "orderby": "ID  ",
        "tags": "news",
        "ids": [3, 5, 8],
        "minify": "maybe",
    });
    match Value::from(body) {
        Value::Array(fields) => fields,
        other => panic!("expected an array, got {other:?}"),
    }
}

#[test]
fn fields_coerce_to_their_types() {
    let request = request();

    assert_eq!(bool::maybe_cast_input(&request, "debug", Some(false)), Some(true));
    assert_eq!(bool::maybe_cast_input(&request, "minify", Some(true)), Some(true));
    assert_eq!(bool::maybe_cast_input(&request, "minify", Some(false)), Some(false));
    assert_eq!(i64::maybe_cast_input(&request, "page", Some(1)), Some(15));
    assert_eq!(i64::maybe_cast_input(&request, "per_page", Some(10)), Some(20));
    assert_eq!(f64::maybe_cast_input(&request, "ratio", None), Some(0.75));
    assert_eq!(
        String::maybe_cast_input(&request, "title", None),
        Some("15".to_owned())
    );
}

#[test]
fn strict_validation_does_not_convert() {
    let request = request();
    let title = InputSource::get(&request, "title").expect("title");

    assert_eq!(
        String::validate(&title, Some("untitled".to_owned())),
        Some("untitled".to_owned())
    );
    assert_eq!(i64::validate(&title, None), Some(15));
    assert_eq!(f64::validate(&title, None), None);
}

#[test]
fn scalars_become_lists_and_lists_stay_lists() {
    let request = request();

    let tags = Array::maybe_cast_input(&request, "tags", None).expect("tags");
    let ids = Array::maybe_cast_input(&request, "ids", None).expect("ids");

    assert_eq!(tags, Array::list(["news"]));
    assert_eq!(ids, Array::list([3, 5, 8]));
    assert!(IsList.is_valid(&tags));
    assert!(IsList.is_valid(&ids));
    assert_eq!(Array::maybe_cast_input(&request, "missing", None), None);
}

#[test]
fn ordering_column_is_picked_from_a_closed_set() {
    let request = request();
    let columns = [Value::from("ID"), Value::from("post_title")];
    let orderby = InputSource::get(&request, "orderby").expect("orderby");

    assert_eq!(
        validate_allowed(&orderby, &columns, Value::from("post_title")),
        Value::from("ID")
    );
    assert!(AllowedValues::new(["ID", "post_title"]).is_valid(&orderby));
}

#[rstest]
#[case(Value::from("yes2"), Some(true), Some(true))]
#[case(Value::from("12"), Some(false), Some(false))]
#[case(Value::from("OFF"), Some(true), Some(false))]
#[case(Value::Int(1), None, Some(true))]
#[case(Value::Float(0.0), None, Some(false))]
#[case(Value::Null, Some(true), Some(true))]
fn flags(#[case] input: Value, #[case] default: Option<bool>, #[case] expected: Option<bool>) {
    assert_eq!(bool::maybe_cast(&input, default), expected);
}
