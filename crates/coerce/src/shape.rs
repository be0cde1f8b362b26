//! Array shape validators
//!
//! [`Validate`](crate::foundation::Validate) wrappers around the shape
//! checks in [`lumen_value::ops`].

use lumen_value::Array;

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Accepts arrays keyed exactly `0..len` in order.
    pub IsList for Array;
    rule(input) { input.is_list() }
    error(input) {
        ValidationError::new("not_list", "array must be a list")
            .with_param("len", input.len().to_string())
    }
    fn list();
}

validator! {
    /// Accepts arrays without string keys.
    pub NoStringKeys for Array;
    rule(input) { !input.has_string_keys() }
    error(input) { ValidationError::new("string_keys", "array must not have string keys") }
    fn no_string_keys();
}
