//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`Operand`]
//! - **Errors**: [`RuleError`], [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! ## 1. Predicates are typed
//!
//! A predicate validates one extracted value type:
//!
//! ```rust,ignore
//! impl<V: Operand, R: Operand<Value = V::Value>> Validate for SameAs<V, R> {
//!     type Input = V;
//!     // ...
//! }
//! ```
//!
//! ## 2. Nullability lives in the operand
//!
//! `T` and `Option<T>` are both operands over the same `Value`. A predicate
//! compares `Option<&T>` on both sides and never needs four overloads.
//!
//! ## 3. Construction errors are not failures
//!
//! [`RuleError`] aborts building; [`ValidationError`] is recorded data.

pub mod error;
pub mod operand;
pub mod traits;

pub use error::{Params, RuleError, ValidationError, ValidationErrors};
pub use operand::Operand;
pub use traits::Validate;
