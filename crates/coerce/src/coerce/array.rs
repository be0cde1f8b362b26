use lumen_value::{Array, Value};

use super::Coerce;

impl Coerce for Array {
    const TYPE_NAME: &'static str = "array";

    fn check(input: &Value) -> Option<Self> {
        input.as_array().cloned()
    }

    /// Arrays pass through, `null` is a miss, and any other value is wrapped
    /// into a one-element list.
    fn cast(input: &Value) -> Option<Self> {
        match input {
            Value::Array(array) => Some(array.clone()),
            Value::Null => None,
            other => Some(Array::list([other.clone()])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_value::Key;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars_are_wrapped() {
        assert_eq!(
            Array::maybe_cast(&Value::from("one"), None),
            Some(Array::list(["one"]))
        );
        assert_eq!(
            Array::maybe_cast(&Value::Bool(false), None),
            Some(Array::list([false]))
        );
    }

    #[test]
    fn arrays_pass_through_with_their_keys() {
        let mut keyed = Array::new();
        keyed.insert(Key::from("a"), Value::Int(1));

        assert_eq!(
            Array::maybe_cast(&Value::Array(keyed.clone()), None),
            Some(keyed.clone())
        );
        assert_eq!(Array::validate(&Value::Array(keyed.clone()), None), Some(keyed));
    }

    #[test]
    fn null_yields_default() {
        assert_eq!(Array::maybe_cast(&Value::Null, None), None);
        assert_eq!(
            Array::maybe_cast(&Value::Null, Some(Array::list([1]))),
            Some(Array::list([1]))
        );
        assert_eq!(Array::validate(&Value::from("x"), None), None);
    }
}
