//! Presence validator for nullable operands
//!
//! # Validators
//!
//! - [`Required`] / [`NotNull`] - Validates that an operand holds a value
//!
//! # Examples
//!
//! ```
//! use rulebook::validators::required;
//! use rulebook::foundation::Validate;
//!
//! let validator = required::<Option<String>>();
//! assert!(validator.validate(&Some("hello".to_string())).is_ok());
//! assert!(validator.validate(&None).is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Operand, Validate, ValidationError};

/// Validates that an operand is present.
///
/// Always passes for non-nullable operands.
pub struct Required<V> {
    _phantom: PhantomData<fn(&V)>,
}

impl<V> Clone for Required<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Required<V> {}

impl<V> fmt::Debug for Required<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Required")
    }
}

impl<V: Operand> Validate for Required<V> {
    type Input = V;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_absent() {
            Err(ValidationError::required())
        } else {
            Ok(())
        }
    }
}

/// Creates a `Required` validator.
#[must_use]
pub fn required<V>() -> Required<V> {
    Required {
        _phantom: PhantomData,
    }
}

/// Alias for [`Required`].
pub type NotNull<V> = Required<V>;

/// Creates a `NotNull` validator. Alias for [`required`].
#[must_use]
pub fn not_null<V>() -> NotNull<V> {
    required()
}
