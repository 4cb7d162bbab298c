//! Prelude module for convenient imports.
//!
//! Provides a single `use rulebook::prelude::*;` import that brings in the
//! rule set, the builder trait with all predicates, and the result types.
//!
//! # Examples
//!
//! ```
//! use rulebook::prelude::*;
//!
//! struct Ticket { seat: Option<u16> }
//!
//! let rules = RuleSet::<Ticket>::create()
//!     .ensure(|t| t.seat, |rule| rule.required().with_message("Pick a seat"))?;
//! let result = rules.for_model(&Ticket { seat: None }).validate();
//! assert_eq!(result.error_messages().collect::<Vec<_>>(), ["Pick a seat"]);
//! # Ok::<(), RuleError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Operand, RuleError, Validate, ValidationError, ValidationErrors};

// ============================================================================
// RULES: Builder, rule set, execution
// ============================================================================

pub use crate::rule::{RuleBuilder, RuleInProgress, RuleResult, RuleSet, Validation};

// ============================================================================
// OUTCOME AND OPTIONS
// ============================================================================

pub use crate::options::{Strategy, ValidationOptions};
pub use crate::result::ValidationResult;
