//! Invocable values and the named-function table

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::InvokeError;
use crate::object::Object;
use crate::value::Value;

/// Shared function signature for invocable values.
pub type Function = Arc<dyn Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync>;

/// A value that can be invoked with arguments to produce a value.
///
/// Three shapes exist: an anonymous closure, a function registered under a
/// name in a [`CallableTable`], and a method bound to a host [`Object`].
#[derive(Clone)]
pub struct Callable {
    target: Target,
}

#[derive(Clone)]
enum Target {
    Closure(Function),
    Named { name: String, function: Function },
    Method { receiver: Object, method: String },
}

impl Callable {
    /// Wraps an anonymous closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        Self {
            target: Target::Closure(Arc::new(function)),
        }
    }

    /// Wraps a closure that cannot fail.
    pub fn infallible<F, R>(function: F) -> Self
    where
        F: Fn(&[Value]) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self::new(move |args| Ok(function(args).into()))
    }

    /// Wraps a function under a name.
    pub fn named(name: impl Into<String>, function: Function) -> Self {
        Self {
            target: Target::Named {
                name: name.into(),
                function,
            },
        }
    }

    /// Binds `method` on `receiver`, if the receiver exposes it.
    pub fn method(receiver: Object, method: impl Into<String>) -> Option<Self> {
        let method = method.into();
        receiver.has_method(&method).then(|| Self {
            target: Target::Method { receiver, method },
        })
    }

    /// Invokes the callable with `args`.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, InvokeError> {
        trace!(callable = %self.describe(), args = args.len(), "invoking callable");
        match &self.target {
            Target::Closure(function) | Target::Named { function, .. } => function(args),
            Target::Method { receiver, method } => receiver.call(method, args),
        }
    }

    /// Registered name, if this is a named function.
    pub fn name(&self) -> Option<&str> {
        match &self.target {
            Target::Named { name, .. } => Some(name),
            Target::Closure(_) | Target::Method { .. } => None,
        }
    }

    /// Human-readable description: the name, `Class::method`, or `{closure}`.
    pub fn describe(&self) -> String {
        match &self.target {
            Target::Closure(_) => "{closure}".to_owned(),
            Target::Named { name, .. } => name.clone(),
            Target::Method { receiver, method } => {
                format!("{}::{method}", receiver.class_name())
            }
        }
    }
}

fn same_function(a: &Function, b: &Function) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (&self.target, &other.target) {
            (Target::Closure(a), Target::Closure(b)) => same_function(a, b),
            (
                Target::Named { name: a, function: fa },
                Target::Named { name: b, function: fb },
            ) => a == b && same_function(fa, fb),
            (
                Target::Method { receiver: ra, method: ma },
                Target::Method { receiver: rb, method: mb },
            ) => ra == rb && ma == mb,
            _ => false,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callable").field(&self.describe()).finish()
    }
}

/// Registry of named functions.
///
/// Plays the role of the host's global function namespace, but as an
/// explicit value: callers build one, register what their plugin exposes,
/// and pass it wherever names should resolve to callables. Static methods
/// are registered under `Class::method`.
#[derive(Clone, Default)]
pub struct CallableTable {
    functions: HashMap<String, Function>,
}

impl CallableTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        self.register(name, function);
        self
    }

    /// Returns `true` if a function is registered under `name`.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Looks up `name` as a named callable.
    pub fn get(&self, name: &str) -> Option<Callable> {
        self.functions
            .get(name)
            .map(|function| Callable::named(name, Arc::clone(function)))
    }

    /// Looks up the static method `class::method`.
    pub fn get_static(&self, class: &str, method: &str) -> Option<Callable> {
        self.get(&format!("{class}::{method}"))
    }

    /// Calls the function registered under `name`.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, InvokeError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| InvokeError::UnknownFunction(name.to_owned()))?;
        function(args)
    }

    /// All registered names, sorted.
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for CallableTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableTable")
            .field("functions", &self.function_names())
            .finish()
    }
}
