//! Error types for the value model
//!
//! Coercion misses are not errors; these types only cover the two places
//! where failure is real: an invoked callable failing, and a value that has
//! no representation on the other side of a boundary.

use crate::value::ValueKind;

/// A failure raised by an invoked [`Callable`](crate::Callable).
///
/// The resolver propagates these unchanged: they belong to the callable, not
/// to the coercion that asked for its result.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The callable reported a failure.
    #[error("{0}")]
    Message(String),

    /// The receiver of a bound method does not expose the method.
    #[error("`{class}` has no method `{method}`")]
    UnknownMethod {
        /// Class name of the receiver.
        class: String,
        /// Requested method name.
        method: String,
    },

    /// No function is registered under the name.
    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    /// The callable received arguments it cannot use.
    #[error("`{callable}` expects {expected} argument(s), got {actual}")]
    Arity {
        /// Description of the callable.
        callable: String,
        /// Expected number of arguments.
        expected: usize,
        /// Received number of arguments.
        actual: usize,
    },
}

impl InvokeError {
    /// Creates a plain message failure.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// A value that cannot cross a representation boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The value kind has no representation in the target format.
    #[error("{kind} values cannot be represented as JSON")]
    NotRepresentable {
        /// Kind of the offending value.
        kind: ValueKind,
    },

    /// JSON numbers must be finite.
    #[error("non-finite float {0} cannot be represented as JSON")]
    NonFiniteFloat(f64),
}
