//! Input sources
//!
//! An [`InputSource`] is where raw values come from before they are
//! coerced: the process environment, a request-style parameter map, or any
//! caller-provided lookup. The source only retrieves; coercion is left to
//! [`Coerce::maybe_cast_input`](crate::Coerce::maybe_cast_input) and the
//! `sanitize_*_input` functions.

use std::collections::HashMap;

use lumen_value::{Array, Key, Value};
use tracing::trace;

/// A named lookup of raw values.
pub trait InputSource {
    /// Returns the raw value stored under `name`.
    fn get(&self, name: &str) -> Option<Value>;

    /// Returns `true` if a value is stored under `name`.
    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<S: InputSource + ?Sized> InputSource for &S {
    fn get(&self, name: &str) -> Option<Value> {
        (**self).get(name)
    }

    fn has(&self, name: &str) -> bool {
        (**self).has(name)
    }
}

impl InputSource for Array {
    fn get(&self, name: &str) -> Option<Value> {
        Array::get(self, &Key::from(name)).cloned()
    }

    fn has(&self, name: &str) -> bool {
        self.contains_key(&Key::from(name))
    }
}

impl InputSource for HashMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }

    fn has(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

/// A snapshot of environment variables.
///
/// Values are exposed as text. An optional prefix is prepended to every
/// lookup, so `EnvInput::from_process().with_prefix("APP_")` reads `DEBUG` from
/// `APP_DEBUG`.
#[derive(Debug, Clone, Default)]
pub struct EnvInput {
    prefix: Option<String>,
    vars: HashMap<String, String>,
}

impl EnvInput {
    /// Snapshots the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (Ok(name), Err(_)) => {
                    trace!(%name, "skipping non UTF-8 environment value");
                    None
                }
                (Err(_), _) => None,
            })
            .collect();
        Self { prefix: None, vars }
    }

    /// Builds a snapshot from explicit pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: None,
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Prepends `prefix` to every lookup.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variables were captured.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<&String> {
        match &self.prefix {
            Some(prefix) => self.vars.get(&format!("{prefix}{name}")),
            None => self.vars.get(name),
        }
    }
}

/// Names that look like they hold secrets.
fn is_sensitive_key(name: &str) -> bool {
    let lower = name.to_lowercase();
    ["password", "secret", "token", "api_key", "private", "credential"]
        .iter()
        .any(|marker| lower.contains(marker))
}

impl InputSource for EnvInput {
    fn get(&self, name: &str) -> Option<Value> {
        let value = self.lookup(name)?;
        if is_sensitive_key(name) {
            trace!(%name, "reading environment input = [REDACTED]");
        } else {
            trace!(%name, %value, "reading environment input");
        }
        Some(Value::Text(value.clone()))
    }

    fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}
