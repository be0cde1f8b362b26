//! Structured host objects

use std::fmt;
use std::sync::Arc;

use crate::error::InvokeError;
use crate::value::Value;

/// A structured value handed over by the host.
///
/// Objects are opaque to the coercion layer except for three capabilities:
/// a class name, an optional textual representation, and named methods that
/// can be bound into a [`Callable`](crate::Callable).
///
/// # Examples
///
/// ```
/// use lumen_value::{HostObject, InvokeError, Object, Value};
///
/// #[derive(Debug)]
/// struct Greeter;
///
/// impl HostObject for Greeter {
///     fn class_name(&self) -> &str {
///         "Greeter"
///     }
///
///     fn to_text(&self) -> Option<String> {
///         Some("greeter".into())
///     }
///
///     fn has_method(&self, name: &str) -> bool {
///         name == "greet"
///     }
///
///     fn call(&self, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
///         match method {
///             "greet" => Ok(Value::from(format!("hello {}", args.len()))),
///             _ => Err(self.unknown_method(method)),
///         }
///     }
/// }
///
/// let object = Object::new(Greeter);
/// assert_eq!(object.to_text().as_deref(), Some("greeter"));
/// assert!(object.has_method("greet"));
/// ```
pub trait HostObject: fmt::Debug + Send + Sync {
    /// Class name, used for `Class::method` lookups and diagnostics.
    fn class_name(&self) -> &str;

    /// Textual representation, if the object has one.
    fn to_text(&self) -> Option<String> {
        None
    }

    /// Returns `true` if the object exposes `name` as a callable method.
    fn has_method(&self, _name: &str) -> bool {
        false
    }

    /// Invokes a method by name.
    fn call(&self, method: &str, _args: &[Value]) -> Result<Value, InvokeError> {
        Err(self.unknown_method(method))
    }

    /// Builds the error for a method this object does not have.
    fn unknown_method(&self, method: &str) -> InvokeError {
        InvokeError::UnknownMethod {
            class: self.class_name().to_owned(),
            method: method.to_owned(),
        }
    }
}

/// A shared handle to a [`HostObject`].
///
/// Equality is identity: two handles are equal only if they point at the
/// same object.
#[derive(Clone)]
pub struct Object(Arc<dyn HostObject>);

impl Object {
    /// Wraps a host object.
    pub fn new(object: impl HostObject + 'static) -> Self {
        Self(Arc::new(object))
    }

    /// Wraps an already shared host object.
    pub fn from_arc(object: Arc<dyn HostObject>) -> Self {
        Self(object)
    }

    /// Class name of the object.
    pub fn class_name(&self) -> &str {
        self.0.class_name()
    }

    /// Textual representation, if any.
    pub fn to_text(&self) -> Option<String> {
        self.0.to_text()
    }

    /// Returns `true` if the object exposes `name`.
    pub fn has_method(&self, name: &str) -> bool {
        self.0.has_method(name)
    }

    /// Invokes a method by name.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
        self.0.call(method, args)
    }

    /// Returns `true` if both handles share the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
