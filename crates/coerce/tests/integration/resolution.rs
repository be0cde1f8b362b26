//! Integration test: resolving values that may be callables
//!
//! Settings often hold either a literal or a callback producing it; the
//! resolver treats both the same way.

use lumen_coerce::{CallableTableExt, Coerce};
use lumen_value::{Callable, CallableTable, HostObject, InvokeError, Object, Value};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Settings;

impl HostObject for Settings {
    fn class_name(&self) -> &str {
        "Settings"
    }

    fn to_text(&self) -> Option<String> {
        Some("stringify".to_owned())
    }

    fn has_method(&self, name: &str) -> bool {
        name == "get_string"
    }

    fn call(&self, method: &str, _args: &[Value]) -> Result<Value, InvokeError> {
        match method {
            "get_string" => Ok(Value::from("string")),
            _ => Err(self.unknown_method(method)),
        }
    }
}

fn method_pair(method: &str) -> Value {
    Value::from(vec![Value::Object(Object::new(Settings)), Value::from(method)])
}

#[test]
fn literals_and_closures_resolve_alike() {
    let answer = Value::Callable(Callable::infallible(|_| 42));
    let garbage = Value::Callable(Callable::infallible(|_| "not_an_int"));

    assert_eq!(i64::resolve(&answer, Some(0), &[]).unwrap(), Some(42));
    assert_eq!(i64::resolve(&Value::Int(42), Some(0), &[]).unwrap(), Some(42));
    assert_eq!(i64::resolve(&garbage, Some(0), &[]).unwrap(), Some(0));
}

#[test]
fn arguments_reach_the_callable() {
    let count = Value::Callable(Callable::infallible(|args: &[Value]| args.len() as i64));

    assert_eq!(
        i64::resolve(&count, None, &[Value::Null, Value::Null]).unwrap(),
        Some(2)
    );
}

#[test]
fn callable_failures_propagate() {
    let failing = Value::Callable(Callable::new(|_| Err(InvokeError::msg("boom"))));

    let error = String::resolve(&failing, Some("fallback".to_owned()), &[]).unwrap_err();
    assert!(matches!(&error, InvokeError::Message(message) if message == "boom"));
}

#[test]
fn object_methods_resolve() {
    assert_eq!(
        String::resolve(&method_pair("get_string"), None, &[]).unwrap(),
        Some("string".to_owned())
    );
    assert_eq!(
        String::resolve(&method_pair(" get_string "), None, &[]).unwrap(),
        None
    );
    assert!(Callable::maybe_cast(&method_pair(" get_string "), None).is_some());
    assert_eq!(
        String::resolve(&Value::Object(Object::new(Settings)), None, &[]).unwrap(),
        Some("stringify".to_owned())
    );
}

#[test]
fn named_functions_resolve_through_a_table() {
    let table = CallableTable::new()
        .with("site_name", |_| Ok(Value::from("Lumen")))
        .with("Limits::per_page", |_| Ok(Value::from("25")));

    assert_eq!(
        table.resolve::<String>(&Value::from("site_name"), None, &[]).unwrap(),
        Some("Lumen".to_owned())
    );
    assert_eq!(
        table
            .resolve::<i64>(&Value::from(vec![Value::from("Limits"), Value::from("per_page")]), None, &[])
            .unwrap(),
        Some(25)
    );
    // Unregistered names are plain text.
    assert_eq!(
        table.resolve::<String>(&Value::from("tagline"), None, &[]).unwrap(),
        Some("tagline".to_owned())
    );
    assert!(table.validate(&Value::from(" site_name"), None).is_none());
    assert!(table.maybe_cast(&Value::from(" site_name"), None).is_some());
}
