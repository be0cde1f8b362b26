//! # lumen-coerce
//!
//! Typed coercion and numeric sanitization of untrusted host values.
//!
//! Form fields, configuration constants and environment variables arrive as
//! loosely typed [`Value`](lumen_value::Value)s. This crate turns them into
//! typed values without ever failing: every miss falls back to a
//! caller-supplied default.
//!
//! - [`Coerce`]: `validate` / `maybe_cast` / `resolve` for `bool`, `i64`,
//!   `f64`, `String`, `Array` and `Callable`.
//! - [`sanitize_integer`] and [`sanitize_float`]: digits are salvaged from
//!   noisy text, and floats are read under both the dot-decimal and
//!   comma-decimal conventions.
//! - [`validate_allowed`]: closed-set selection with one trim retry.
//! - [`InputSource`] and [`Constants`]: where raw values come from.
//! - [`strings`]: small string helpers used across the toolkit.
//!
//! ## Quick Start
//!
//! ```
//! use lumen_coerce::{Coerce, sanitize_float, sanitize_integer};
//! use lumen_value::Value;
//!
//! assert_eq!(bool::maybe_cast(&Value::from("on"), Some(false)), Some(true));
//! assert_eq!(i64::maybe_cast(&Value::from("12px"), Some(0)), Some(0));
//! assert_eq!(sanitize_integer(&Value::from("12px"), 0), 12);
//! assert_eq!(sanitize_float(&Value::from("19.500,5"), 0.0), 19500.5);
//! ```

pub mod foundation;
mod macros;
pub mod sanitize;
pub mod shape;
pub mod strings;

mod allowed;
mod coerce;
mod constants;
mod input;

pub use allowed::{AllowedValues, validate_allowed, validate_allowed_str};
pub use coerce::{CallableTableExt, Coerce, logical_and, logical_or};
pub use constants::{Constants, ConstantsError};
pub use input::{EnvInput, InputSource};
pub use sanitize::{
    NumberFormat, sanitize_float, sanitize_float_input, sanitize_integer, sanitize_integer_input,
};
pub use shape::{IsList, NoStringKeys};

/// Common imports for coercing host values.
pub mod prelude {
    pub use crate::foundation::{Validate, ValidationError};
    pub use crate::{
        CallableTableExt, Coerce, Constants, EnvInput, InputSource, sanitize_float,
        sanitize_integer, validate_allowed,
    };
    pub use lumen_value::{Array, Callable, CallableTable, Key, Value};
}
