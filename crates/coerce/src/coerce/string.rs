use lumen_value::Value;

use super::Coerce;

impl Coerce for String {
    const TYPE_NAME: &'static str = "string";

    fn check(input: &Value) -> Option<Self> {
        input.as_str().map(str::to_owned)
    }

    /// Text passes through and scalars render to their textual form
    /// (`true` is `"1"`, `false` is `""`). Objects succeed only when they
    /// have a textual representation. `null`, arrays and callables never
    /// stringify.
    fn cast(input: &Value) -> Option<Self> {
        match input {
            Value::Null | Value::Array(_) | Value::Callable(_) => None,
            Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Text(_)
            | Value::Object(_) => input.to_text(),
        }
    }
}
