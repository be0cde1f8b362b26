//! Foundation for declarative validators
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Coercions never fail; they fall back to a default. The validators built
//! on this foundation are the complementary surface for callers that want a
//! structured reason instead of a fallback, and compose with any other
//! [`Validate`] implementor.
//!
//! # Examples
//!
//! ```
//! use lumen_coerce::foundation::{Validate, ValidationError};
//!
//! struct NotBlank;
//!
//! impl Validate for NotBlank {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.trim().is_empty() {
//!             Err(ValidationError::new("blank", "must not be blank"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! assert!(NotBlank.validate("ID").is_ok());
//! assert_eq!(NotBlank.validate("  ").unwrap_err().code, "blank");
//! ```

mod error;
mod traits;

pub use error::ValidationError;
pub use traits::Validate;
