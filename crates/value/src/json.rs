//! Conversions between [`Value`] and `serde_json::Value`

use crate::array::Array;
use crate::error::ValueError;
use crate::key::Key;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Array(
                map.into_iter()
                    .map(|(key, value)| (Key::from(key), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ValueError;

    /// Lists become JSON arrays, other arrays become objects keyed by the
    /// textual key. Objects become their textual form; objects without one
    /// and callables have no JSON form.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Int(i) => Ok(Self::from(*i)),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(Self::Number)
                .ok_or(ValueError::NonFiniteFloat(*f)),
            Value::Text(s) => Ok(Self::String(s.clone())),
            Value::Array(array) => array_to_json(array),
            Value::Object(object) => object
                .to_text()
                .map(Self::String)
                .ok_or(ValueError::NotRepresentable { kind: value.kind() }),
            Value::Callable(_) => Err(ValueError::NotRepresentable { kind: value.kind() }),
        }
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

fn array_to_json(array: &Array) -> Result<serde_json::Value, ValueError> {
    if array.is_list() {
        return array
            .values()
            .map(serde_json::Value::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array);
    }

    let mut map = serde_json::Map::with_capacity(array.len());
    for (key, value) in array {
        map.insert(key.to_string(), serde_json::Value::try_from(value)?);
    }
    Ok(serde_json::Value::Object(map))
}
