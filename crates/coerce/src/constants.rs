//! Constants store
//!
//! Named configuration values with runtime overrides. A value set on the
//! store shadows the same name in the fallback [`InputSource`], which is the
//! process environment unless another source is given. The store is an
//! ordinary value owned by the caller, so tests can build, override and
//! reset it without touching shared state.

use std::collections::HashMap;

use lumen_value::Value;
use thiserror::Error;
use tracing::debug;

use crate::coerce::Coerce;
use crate::input::{EnvInput, InputSource};

/// Errors raised while loading constants.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstantsError {
    /// Constants can only be loaded from a JSON object.
    #[error("constants must be loaded from a JSON object, got {found}")]
    NotAnObject {
        /// JSON type that was found instead
        found: &'static str,
    },
}

/// Named values with overrides over a fallback source.
///
/// ```
/// use lumen_coerce::{Constants, EnvInput};
/// use lumen_value::Value;
///
/// let mut constants = Constants::with_fallback(EnvInput::from_vars([("SCRIPT_DEBUG", "on")]));
/// assert!(constants.is_true("SCRIPT_DEBUG"));
///
/// constants.set("SCRIPT_DEBUG", false);
/// assert!(!constants.is_true("SCRIPT_DEBUG"));
///
/// constants.clear("SCRIPT_DEBUG");
/// assert_eq!(constants.get("SCRIPT_DEBUG"), Some(Value::from("on")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Constants<S = EnvInput> {
    overrides: HashMap<String, Value>,
    fallback: S,
}

impl Constants<EnvInput> {
    /// A store backed by a snapshot of the process environment.
    pub fn from_env() -> Self {
        Self::with_fallback(EnvInput::from_process())
    }
}

impl<S: InputSource> Constants<S> {
    /// A store backed by `fallback`.
    pub fn with_fallback(fallback: S) -> Self {
        Self {
            overrides: HashMap::new(),
            fallback,
        }
    }

    /// Sets an override, returning the previous override if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        debug!(%name, kind = %value.kind(), "overriding constant");
        self.overrides.insert(name, value)
    }

    /// The override for `name`, else the fallback's value.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.overrides
            .get(name)
            .cloned()
            .or_else(|| self.fallback.get(name))
    }

    /// [`get`](Self::get) coerced to `T`.
    pub fn get_as<T: Coerce>(&self, name: &str, default: Option<T>) -> Option<T> {
        T::maybe_cast_input(self, name, default)
    }

    /// Returns `true` if `name` is overridden or present in the fallback.
    pub fn is_defined(&self, name: &str) -> bool {
        self.overrides.contains_key(name) || self.fallback.has(name)
    }

    /// Returns `true` if `name` is defined and reads as a true flag.
    pub fn is_true(&self, name: &str) -> bool {
        self.get_as(name, Some(false)).unwrap_or(false)
    }

    /// Removes the override for `name`; the fallback shows through again.
    pub fn clear(&mut self, name: &str) -> Option<Value> {
        self.overrides.remove(name)
    }

    /// Removes every override.
    pub fn clear_all(&mut self) {
        self.overrides.clear();
    }

    /// Number of overrides currently set.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Sets an override for every member of a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantsError::NotAnObject`] if `json` is not an object;
    /// the store is left unchanged.
    pub fn extend_from_json(&mut self, json: serde_json::Value) -> Result<(), ConstantsError> {
        let serde_json::Value::Object(members) = json else {
            return Err(ConstantsError::NotAnObject {
                found: json_type(&json),
            });
        };
        for (name, value) in members {
            self.set(name, Value::from(value));
        }
        Ok(())
    }
}

impl<S: InputSource> InputSource for Constants<S> {
    fn get(&self, name: &str) -> Option<Value> {
        Self::get(self, name)
    }

    fn has(&self, name: &str) -> bool {
        self.is_defined(name)
    }
}

fn json_type(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
