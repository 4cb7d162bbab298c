//! Fluent rule builder
//!
//! A rule is configured inside [`RuleSet::ensure`](crate::RuleSet::ensure) by
//! chaining predicates and modifiers on the builder it hands out:
//!
//! ```
//! use rulebook::prelude::*;
//!
//! struct Booking { nights: u32 }
//!
//! let rules = RuleSet::<Booking>::create()
//!     .ensure(|b| b.nights, |rule| {
//!         rule.is_after(0_u32)
//!             .with_error_code("NO_NIGHTS")
//!             .is_before_or_same_as(30_u32)
//!     })?;
//!
//! assert!(rules.for_model(&Booking { nights: 3 }).validate().succeeded());
//! # Ok::<(), RuleError>(())
//! ```
//!
//! Every step returns `Result<RuleBuilder, RuleError>`, and the chain keeps
//! going on that `Result` because [`RuleInProgress`] is implemented for it.
//! The first construction error short-circuits the rest of the chain.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::foundation::{Operand, RuleError, Validate};
use crate::rule::check::Check;
use crate::validators::{
    After, AfterOrSameAs, Before, BeforeOrSameAs, SameAs, Satisfies, required,
};

/// Shorthand for the value every builder step returns.
pub type RuleResult<M, V> = Result<RuleBuilder<M, V>, RuleError>;

// ============================================================================
// RULE BUILDER
// ============================================================================

/// A rule under construction for model `M` and extracted value `V`.
///
/// Owned and passed by value; it becomes immutable once the rule set takes it.
pub struct RuleBuilder<M, V> {
    checks: Vec<Check<M, V>>,
}

impl<M, V> RuleBuilder<M, V> {
    pub(crate) fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Returns the number of attached predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no predicate is attached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Attaches an arbitrary predicate.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Validate<Input = V> + Send + Sync + 'static,
    {
        self.checks.push(Check::new(predicate));
        self
    }

    fn last_mut(&mut self, modifier: &'static str) -> Result<&mut Check<M, V>, RuleError> {
        self.checks
            .last_mut()
            .ok_or_else(|| RuleError::no_predicate(modifier))
    }

    pub(crate) fn into_checks(self) -> Vec<Check<M, V>> {
        self.checks
    }
}

impl<M, V> fmt::Debug for RuleBuilder<M, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBuilder")
            .field("checks", &self.checks)
            .finish()
    }
}

// ============================================================================
// RULE IN PROGRESS
// ============================================================================

/// Anything that may hold a rule under construction.
///
/// Implemented for [`RuleBuilder`] itself, for `Option<RuleBuilder>` (where
/// `None` is a missing rule), and for [`RuleResult`] (so chains continue
/// after the first step). Predicate and modifier methods are provided here,
/// so they are available on all three.
///
/// Calling any of them on a missing rule returns
/// [`RuleError::MissingRule`] and evaluates nothing.
pub trait RuleInProgress: Sized {
    /// The model the rule is declared for.
    type Model;
    /// The value the rule's accessor extracts.
    type Value;

    /// Resolves to the underlying builder, or the construction error that
    /// prevents `operation` from running.
    fn resolve(self, operation: &'static str) -> RuleResult<Self::Model, Self::Value>;

    /// Requires the value to be the same as `reference`.
    ///
    /// `reference` may be nullable independently of the value. An absent
    /// value or reference fails, including when both are absent.
    fn is_same_as<R>(self, reference: R) -> RuleResult<Self::Model, Self::Value>
    where
        Self::Value: Operand + 'static,
        R: Operand<Value = <Self::Value as Operand>::Value> + Send + Sync + 'static,
        <Self::Value as Operand>::Value: PartialEq + Display,
    {
        Ok(self
            .resolve("is_same_as")?
            .with_predicate(SameAs::new(reference)))
    }

    /// Requires the value to be strictly after `reference`.
    fn is_after<R>(self, reference: R) -> RuleResult<Self::Model, Self::Value>
    where
        Self::Value: Operand + 'static,
        R: Operand<Value = <Self::Value as Operand>::Value> + Send + Sync + 'static,
        <Self::Value as Operand>::Value: PartialOrd + Display,
    {
        Ok(self
            .resolve("is_after")?
            .with_predicate(After::new(reference)))
    }

    /// Requires the value to be strictly before `reference`.
    fn is_before<R>(self, reference: R) -> RuleResult<Self::Model, Self::Value>
    where
        Self::Value: Operand + 'static,
        R: Operand<Value = <Self::Value as Operand>::Value> + Send + Sync + 'static,
        <Self::Value as Operand>::Value: PartialOrd + Display,
    {
        Ok(self
            .resolve("is_before")?
            .with_predicate(Before::new(reference)))
    }

    /// Requires the value to be after or the same as `reference`.
    fn is_after_or_same_as<R>(self, reference: R) -> RuleResult<Self::Model, Self::Value>
    where
        Self::Value: Operand + 'static,
        R: Operand<Value = <Self::Value as Operand>::Value> + Send + Sync + 'static,
        <Self::Value as Operand>::Value: PartialOrd + Display,
    {
        Ok(self
            .resolve("is_after_or_same_as")?
            .with_predicate(AfterOrSameAs::new(reference)))
    }

    /// Requires the value to be before or the same as `reference`.
    fn is_before_or_same_as<R>(self, reference: R) -> RuleResult<Self::Model, Self::Value>
    where
        Self::Value: Operand + 'static,
        R: Operand<Value = <Self::Value as Operand>::Value> + Send + Sync + 'static,
        <Self::Value as Operand>::Value: PartialOrd + Display,
    {
        Ok(self
            .resolve("is_before_or_same_as")?
            .with_predicate(BeforeOrSameAs::new(reference)))
    }

    /// Requires the value to be present.
    fn required(self) -> RuleResult<Self::Model, Self::Value>
    where
        Self::Value: Operand + 'static,
    {
        Ok(self
            .resolve("required")?
            .with_predicate(required::<Self::Value>()))
    }

    /// Requires the present value to satisfy `predicate`.
    fn satisfies<F>(self, predicate: F) -> RuleResult<Self::Model, Self::Value>
    where
        Self::Value: Operand + 'static,
        F: Fn(&<Self::Value as Operand>::Value) -> bool + Send + Sync + 'static,
    {
        Ok(self
            .resolve("satisfies")?
            .with_predicate(Satisfies::new(predicate)))
    }

    /// Replaces the failure message of the last predicate.
    fn with_message(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> RuleResult<Self::Model, Self::Value> {
        let mut rule = self.resolve("with_message")?;
        rule.last_mut("with_message")?.message = Some(message.into());
        Ok(rule)
    }

    /// Replaces the failure code of the last predicate.
    fn with_error_code(
        self,
        code: impl Into<Cow<'static, str>>,
    ) -> RuleResult<Self::Model, Self::Value> {
        let mut rule = self.resolve("with_error_code")?;
        rule.last_mut("with_error_code")?.code = Some(code.into());
        Ok(rule)
    }

    /// Runs the last predicate only when `condition` holds for the model.
    ///
    /// A skipped predicate counts as passed.
    fn when<C>(self, condition: C) -> RuleResult<Self::Model, Self::Value>
    where
        C: Fn(&Self::Model) -> bool + Send + Sync + 'static,
    {
        let mut rule = self.resolve("when")?;
        rule.last_mut("when")?.condition = Some(Box::new(condition));
        Ok(rule)
    }

    /// Tags the last predicate for selective validation.
    fn tag(self, tag: impl Into<Cow<'static, str>>) -> RuleResult<Self::Model, Self::Value> {
        let mut rule = self.resolve("tag")?;
        rule.last_mut("tag")?.tags.push(tag.into());
        Ok(rule)
    }
}

impl<M, V> RuleInProgress for RuleBuilder<M, V> {
    type Model = M;
    type Value = V;

    #[inline]
    fn resolve(self, _operation: &'static str) -> RuleResult<M, V> {
        Ok(self)
    }
}

impl<M, V> RuleInProgress for Option<RuleBuilder<M, V>> {
    type Model = M;
    type Value = V;

    #[inline]
    fn resolve(self, operation: &'static str) -> RuleResult<M, V> {
        self.ok_or_else(|| RuleError::missing_rule(operation))
    }
}

impl<M, V> RuleInProgress for RuleResult<M, V> {
    type Model = M;
    type Value = V;

    #[inline]
    fn resolve(self, _operation: &'static str) -> RuleResult<M, V> {
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
