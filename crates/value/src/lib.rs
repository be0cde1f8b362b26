//! # lumen-value
//!
//! The boxed value model shared by the Lumen helper crates.
//!
//! Raw host values (form fields, configuration constants, environment
//! variables, literal call-site values) enter the toolkit as a [`Value`]: a
//! closed sum type that the coercion layer pattern-matches exhaustively
//! instead of probing types at runtime.
//!
//! ## Quick Start
//!
//! ```
//! use lumen_value::{Array, Key, Value};
//!
//! let mut fields = Array::new();
//! fields.insert(Key::from("title"), Value::from("Hello"));
//! fields.push(Value::from(42));
//!
//! assert!(fields.has_string_keys());
//! assert!(!fields.is_list());
//! assert_eq!(fields.get(&Key::Index(0)), Some(&Value::Int(42)));
//! ```
//!
//! ## Host arrays
//!
//! Sequences and mappings share one representation, [`Array`], an
//! insertion-ordered map from [`Key`] to [`Value`]. The [`ops`] module
//! provides the shape checks ([`ops::is_list`], [`ops::has_string_keys`])
//! and the search/insert helpers built on top of it.
//!
//! ## Callables
//!
//! A [`Callable`] is a shared function over `&[Value]`. Named functions live in
//! an explicit [`CallableTable`] owned by the caller rather than in a global
//! namespace.

mod array;
mod callable;
mod compare;
mod error;
mod json;
mod key;
mod object;
pub mod ops;
mod value;

pub use array::Array;
pub use callable::{Callable, CallableTable, Function};
pub use error::{InvokeError, ValueError};
pub use key::Key;
pub use object::{HostObject, Object};
pub use value::{Value, ValueKind, format_float};

/// Common imports for working with host values.
pub mod prelude {
    pub use crate::ops::{has_string_keys, is_list};
    pub use crate::{
        Array, Callable, CallableTable, HostObject, InvokeError, Key, Object, Value, ValueKind,
    };
}
