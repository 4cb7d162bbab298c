//! Core traits for the validation system
//!
//! This module defines the trait every predicate implements.

use crate::foundation::ValidationError;

// ============================================================================
// CORE PREDICATE TRAIT
// ============================================================================

/// The trait all predicates implement.
///
/// A predicate looks at one extracted value and either accepts it or
/// describes why not. Rules own their predicates as
/// `Box<dyn Validate<Input = V> + Send + Sync>`, so the trait stays
/// object-safe.
///
/// # Examples
///
/// ```
/// use rulebook::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "Value must be even"))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the predicate holds
    /// * `Err(ValidationError)` describing the failure otherwise
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
