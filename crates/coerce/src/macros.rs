//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```
//! use lumen_coerce::validator;
//! use lumen_coerce::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("blank", "must not be blank") }
//!     fn not_blank();
//! }
//!
//! assert!(not_blank().validate("ID").is_ok());
//! assert!(not_blank().validate(" ").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation and
/// an optional factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
