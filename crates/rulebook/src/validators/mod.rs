//! Built-in predicates
//!
//! # Categories
//!
//! - **Comparison**: [`SameAs`], [`After`], [`Before`], [`AfterOrSameAs`],
//!   [`BeforeOrSameAs`]
//! - **Nullable**: [`Required`]
//! - **Custom**: [`Satisfies`]
//!
//! Rules normally attach these through
//! [`RuleInProgress`](crate::rule::RuleInProgress); the types are public so
//! they can also be used standalone.

pub mod comparison;
pub mod custom;
pub mod nullable;

pub use comparison::{
    After, AfterOrSameAs, Before, BeforeOrSameAs, SameAs, after, after_or_same_as, before,
    before_or_same_as, same_as,
};
pub use custom::{Satisfies, satisfies};
pub use nullable::{NotNull, Required, not_null, required};
