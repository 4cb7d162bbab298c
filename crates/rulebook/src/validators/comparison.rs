//! Comparison predicates
//!
//! Every predicate here compares the extracted value against a reference
//! captured at build time. Both sides are [`Operand`]s, so each predicate
//! covers all four nullability combinations with one rule: **if either side
//! is absent, the predicate fails.** Two absent values are not the same.

use std::fmt::{self, Display};
use std::marker::PhantomData;

use crate::foundation::{Operand, Validate, ValidationError};

const ABSENT: &str = "null";

fn describe<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| ABSENT.to_owned(), ToString::to_string)
}

fn compare<T, C>(
    value: Option<&T>,
    reference: Option<&T>,
    code: &'static str,
    relation: &'static str,
    holds: C,
) -> Result<(), ValidationError>
where
    T: Display,
    C: FnOnce(&T, &T) -> bool,
{
    match (value, reference) {
        (Some(v), Some(r)) if holds(v, r) => Ok(()),
        _ => {
            let expected = describe(reference);
            Err(
                ValidationError::new(code, format!("Value must be {relation} {expected}"))
                    .with_param("expected", expected)
                    .with_param("actual", describe(value)),
            )
        }
    }
}

macro_rules! comparison {
    (
        $(#[$meta:meta])*
        pub $name:ident: $bound:ident, $code:literal, $relation:literal, $holds:expr;
        fn $factory:ident;
    ) => {
        $(#[$meta])*
        pub struct $name<V, R> {
            reference: R,
            _value: PhantomData<fn(&V)>,
        }

        impl<V, R> $name<V, R> {
            /// Creates the predicate with the given reference.
            pub fn new(reference: R) -> Self {
                Self {
                    reference,
                    _value: PhantomData,
                }
            }

            /// Returns the reference operand.
            pub fn reference(&self) -> &R {
                &self.reference
            }
        }

        impl<V, R: Clone> Clone for $name<V, R> {
            fn clone(&self) -> Self {
                Self::new(self.reference.clone())
            }
        }

        impl<V, R: fmt::Debug> fmt::Debug for $name<V, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("reference", &self.reference)
                    .finish()
            }
        }

        impl<V, R> Validate for $name<V, R>
        where
            V: Operand,
            R: Operand<Value = V::Value>,
            V::Value: $bound + Display,
        {
            type Input = V;

            fn validate(&self, input: &V) -> Result<(), ValidationError> {
                compare(
                    input.present(),
                    self.reference.present(),
                    $code,
                    $relation,
                    $holds,
                )
            }
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] predicate.")]
        #[must_use]
        pub fn $factory<V, R>(reference: R) -> $name<V, R> {
            $name::new(reference)
        }
    };
}

comparison! {
    /// Passes when the value equals the reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulebook::validators::same_as;
    /// use rulebook::foundation::Validate;
    ///
    /// assert!(same_as::<i32, _>(5).validate(&5).is_ok());
    /// assert!(same_as::<i32, _>(Some(5)).validate(&5).is_ok());
    /// assert!(same_as::<Option<i32>, _>(5).validate(&None).is_err());
    /// assert!(same_as::<Option<i32>, _>(None::<i32>).validate(&None).is_err());
    /// ```
    pub SameAs: PartialEq, "same_as", "the same as", |v, r| v == r;
    fn same_as;
}

comparison! {
    /// Passes when the value is strictly after (greater than) the reference.
    pub After: PartialOrd, "after", "after", |v, r| v > r;
    fn after;
}

comparison! {
    /// Passes when the value is strictly before (less than) the reference.
    pub Before: PartialOrd, "before", "before", |v, r| v < r;
    fn before;
}

comparison! {
    /// Passes when the value is after or the same as the reference.
    pub AfterOrSameAs: PartialOrd, "after_or_same_as", "after or the same as", |v, r| v >= r;
    fn after_or_same_as;
}

comparison! {
    /// Passes when the value is before or the same as the reference.
    pub BeforeOrSameAs: PartialOrd, "before_or_same_as", "before or the same as", |v, r| v <= r;
    fn before_or_same_as;
}

// ============================================================================
// TESTS
// ============================================================================
