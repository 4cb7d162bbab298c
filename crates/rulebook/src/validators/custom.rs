//! Caller-supplied predicate

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Operand, Validate, ValidationError};

/// Passes when the present value satisfies a closure. An absent value fails.
///
/// # Examples
///
/// ```
/// use rulebook::validators::satisfies;
/// use rulebook::foundation::Validate;
///
/// let even = satisfies::<Option<u32>, _>(|n: &u32| n % 2 == 0);
/// assert!(even.validate(&Some(4)).is_ok());
/// assert!(even.validate(&Some(3)).is_err());
/// assert!(even.validate(&None).is_err());
/// ```
pub struct Satisfies<V, F> {
    predicate: F,
    _value: PhantomData<fn(&V)>,
}

impl<V, F> Satisfies<V, F> {
    /// Creates the predicate.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _value: PhantomData,
        }
    }
}

impl<V, F> fmt::Debug for Satisfies<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfies")
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<V, F> Validate for Satisfies<V, F>
where
    V: Operand,
    F: Fn(&V::Value) -> bool,
{
    type Input = V;

    fn validate(&self, input: &V) -> Result<(), ValidationError> {
        match input.present() {
            Some(value) if (self.predicate)(value) => Ok(()),
            Some(_) => Err(ValidationError::new(
                "satisfies",
                "Value does not satisfy the predicate",
            )),
            None => Err(ValidationError::new(
                "satisfies",
                "Value is absent and cannot satisfy the predicate",
            )),
        }
    }
}

/// Creates a [`Satisfies`] predicate.
#[must_use]
pub fn satisfies<V, F>(predicate: F) -> Satisfies<V, F> {
    Satisfies::new(predicate)
}
