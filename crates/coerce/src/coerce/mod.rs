//! Typed coercion of untrusted values
//!
//! Every target type offers the same three tiers:
//!
//! - [`Coerce::validate`]: the value is returned only if it already has the
//!   target type.
//! - [`Coerce::maybe_cast`]: a best-effort conversion.
//! - [`Coerce::resolve`]: like `maybe_cast`, but a callable input is first
//!   invoked and its result is coerced instead.
//!
//! A miss is never an error. It yields the caller's `default`, and `None`
//! is the explicit "no default" marker.
//!
//! # Examples
//!
//! ```
//! use lumen_coerce::Coerce;
//! use lumen_value::Value;
//!
//! assert_eq!(bool::maybe_cast(&Value::from(" Yes "), Some(false)), Some(true));
//! assert_eq!(i64::maybe_cast(&Value::from("0xF"), None), Some(15));
//! assert_eq!(f64::maybe_cast(&Value::from("not a number"), Some(20.5)), Some(20.5));
//! assert_eq!(String::validate(&Value::Int(5), None), None);
//! ```

mod array;
mod boolean;
mod callable;
mod float;
mod integer;
mod string;

use lumen_value::{Callable, InvokeError, Value};
use tracing::trace;

use crate::input::InputSource;

pub use boolean::{logical_and, logical_or};
pub use callable::CallableTableExt;
pub(crate) use integer::parse_integer;

/// A target type of coercion.
pub trait Coerce: Sized + Into<Value> {
    /// Name of the target type, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Returns the value if it already has the target type.
    fn check(input: &Value) -> Option<Self>;

    /// Converts the value to the target type, if possible.
    ///
    /// Implementations must accept everything [`check`](Self::check) accepts
    /// and return the same result for it.
    fn cast(input: &Value) -> Option<Self>;

    /// Returns `input` if it already has the target type, else `default`.
    fn validate(input: &Value, default: Option<Self>) -> Option<Self> {
        Self::check(input).or(default)
    }

    /// Converts `input` to the target type, else returns `default`.
    fn maybe_cast(input: &Value, default: Option<Self>) -> Option<Self> {
        match Self::cast(input) {
            Some(value) => Some(value),
            None => {
                trace!(
                    target_type = Self::TYPE_NAME,
                    input = %input.kind(),
                    "coercion miss, using default"
                );
                default
            }
        }
    }

    /// Invokes `input` with `args` if it is callable and coerces the result;
    /// otherwise coerces `input` itself.
    ///
    /// Failures of the invoked callable propagate unchanged.
    fn resolve(input: &Value, default: Option<Self>, args: &[Value]) -> Result<Option<Self>, InvokeError> {
        match Callable::check(input) {
            Some(callable) => {
                let produced = callable.invoke(args)?;
                Ok(Self::maybe_cast(&produced, default))
            }
            None => Ok(Self::maybe_cast(input, default)),
        }
    }

    /// Reads `name` from `source` and coerces it. Absent variables yield
    /// `default`.
    fn maybe_cast_input<S>(source: &S, name: &str, default: Option<Self>) -> Option<Self>
    where
        S: InputSource + ?Sized,
    {
        match source.get(name) {
            Some(value) => Self::maybe_cast(&value, default),
            None => default,
        }
    }
}
