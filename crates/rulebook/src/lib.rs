//! # rulebook
//!
//! A fluent, type-safe rule engine for validating model properties.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{DateTime, FixedOffset};
//! use rulebook::prelude::*;
//!
//! struct Model {
//!     value: DateTime<FixedOffset>,
//!     null_value: Option<DateTime<FixedOffset>>,
//! }
//!
//! let day = DateTime::parse_from_rfc3339("2017-06-10T00:00:00+00:00").unwrap();
//! let model = Model { value: day, null_value: None };
//!
//! let result = RuleSet::<Model>::create()
//!     .ensure(|m| m.value, |rule| rule.is_same_as(day))?
//!     .for_model(&model)
//!     .validate();
//! assert!(result.succeeded());
//!
//! // An absent value is never the same as anything, not even another absence.
//! let result = RuleSet::<Model>::create()
//!     .ensure(|m| m.null_value, |rule| rule.is_same_as(None::<DateTime<FixedOffset>>))?
//!     .for_model(&model)
//!     .validate();
//! assert!(!result.succeeded());
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Building Blocks
//!
//! - [`RuleSet`] collects rules; [`Validation`] runs them against one model.
//! - [`RuleInProgress`](rule::RuleInProgress) provides the predicates:
//!   `is_same_as`, `is_after`, `is_before`, `is_after_or_same_as`,
//!   `is_before_or_same_as`, `required`, `satisfies`, and the modifiers
//!   `with_message`, `with_error_code`, `when`, `tag`.
//! - [`ValidationResult`] is the snapshot returned by every run.
//! - [`RuleError`] is returned from builder calls that cannot be honored.
//!
//! Failing predicates are data in the result; they are never raised.

pub mod foundation;
mod macros;
pub mod options;
pub mod prelude;
pub mod result;
pub mod rule;
pub mod validators;

pub use foundation::{Operand, RuleError, ValidationError, ValidationErrors};
pub use options::{Strategy, ValidationOptions};
pub use result::ValidationResult;
pub use rule::{RuleBuilder, RuleInProgress, RuleResult, RuleSet, Validation};
