use lumen_value::{Array, Callable, CallableTable, InvokeError, Key, Value};
use tracing::trace;

use super::Coerce;
use crate::strings::trim_blank;

impl Coerce for Callable {
    const TYPE_NAME: &'static str = "callable";

    /// Native callables, and `[object, method]` pairs whose object exposes
    /// the method.
    fn check(input: &Value) -> Option<Self> {
        match input {
            Value::Callable(callable) => Some(callable.clone()),
            Value::Array(pair) => bind_method(pair, false),
            _ => None,
        }
    }

    /// Like [`check`](Coerce::check), retrying a pair with its method name
    /// trimmed. Names of functions only resolve through a
    /// [`CallableTable`], see [`CallableTableExt`].
    fn cast(input: &Value) -> Option<Self> {
        Self::check(input).or_else(|| match input {
            Value::Array(pair) => bind_method(pair, true),
            _ => None,
        })
    }
}

fn pair(array: &Array) -> Option<(&Value, &str)> {
    if array.len() != 2 {
        return None;
    }
    let target = array.get(&Key::Index(0))?;
    let method = array.get(&Key::Index(1))?.as_str()?;
    Some((target, method))
}

fn bind_method(array: &Array, trim: bool) -> Option<Callable> {
    let (target, method) = pair(array)?;
    let object = target.as_object()?;
    let method = if trim { trim_blank(method) } else { method };
    Callable::method(object.clone(), method)
}

/// Callable coercion that also resolves function names through a
/// [`CallableTable`].
///
/// Text resolves as a registered function name and `["Class", "method"]`
/// pairs as the static method `Class::method`.
///
/// ```
/// use lumen_coerce::{CallableTableExt, Coerce};
/// use lumen_value::{CallableTable, Value};
///
/// let table = CallableTable::new().with("answer", |_| Ok(Value::Int(42)));
///
/// assert!(table.check(&Value::from("answer")).is_some());
/// assert!(table.check(&Value::from(" answer ")).is_none());
/// assert!(table.maybe_cast(&Value::from(" answer "), None).is_some());
/// assert_eq!(table.resolve::<i64>(&Value::from("answer"), None, &[]).unwrap(), Some(42));
/// ```
pub trait CallableTableExt {
    /// Strict check, with function names looked up as-is.
    fn check(&self, input: &Value) -> Option<Callable>;

    /// Best-effort conversion, retrying trimmed names.
    fn cast(&self, input: &Value) -> Option<Callable>;

    /// [`check`](Self::check), falling back to `default`.
    fn validate(&self, input: &Value, default: Option<Callable>) -> Option<Callable> {
        self.check(input).or(default)
    }

    /// [`cast`](Self::cast), falling back to `default`.
    fn maybe_cast(&self, input: &Value, default: Option<Callable>) -> Option<Callable> {
        self.cast(input).or(default)
    }

    /// [`Coerce::resolve`] where function names count as callables.
    fn resolve<T: Coerce>(
        &self,
        input: &Value,
        default: Option<T>,
        args: &[Value],
    ) -> Result<Option<T>, InvokeError> {
        match self.check(input) {
            Some(callable) => {
                let produced = callable.invoke(args)?;
                Ok(T::maybe_cast(&produced, default))
            }
            None => Ok(T::maybe_cast(input, default)),
        }
    }
}

impl CallableTableExt for CallableTable {
    fn check(&self, input: &Value) -> Option<Callable> {
        Callable::check(input).or_else(|| lookup(self, input, false))
    }

    fn cast(&self, input: &Value) -> Option<Callable> {
        let found = self
            .check(input)
            .or_else(|| Callable::cast(input))
            .or_else(|| lookup(self, input, true));
        if found.is_none() {
            trace!(input = %input.kind(), "no callable found in table");
        }
        found
    }
}

fn lookup(table: &CallableTable, input: &Value, trim: bool) -> Option<Callable> {
    let clean = |name: &str| (if trim { trim_blank(name) } else { name }).to_owned();
    match input {
        Value::Text(name) => table.get(&clean(name)),
        Value::Array(array) => {
            let (class, method) = pair(array)?;
            table.get_static(&clean(class.as_str()?), &clean(method))
        }
        _ => None,
    }
}
