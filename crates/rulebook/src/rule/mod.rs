//! Rules, rule sets and their execution
//!
//! - [`RuleBuilder`] / [`RuleInProgress`]: fluent configuration of one rule
//! - [`RuleSet`]: ordered rules for one model type
//! - [`Validation`]: a rule set bound to one model instance

mod builder;
mod check;
mod set;

pub use builder::{RuleBuilder, RuleInProgress, RuleResult};
pub use set::{RuleSet, Validation};

use std::borrow::Cow;

use crate::foundation::ValidationError;
use crate::options::{Strategy, ValidationOptions};
use check::Check;

// ============================================================================
// MODEL RULE
// ============================================================================

/// Object-safe view of a rule, erasing the extracted value type.
pub(crate) trait ModelRule<M>: Send + Sync {
    /// Evaluates the rule against `model`, appending failures in predicate
    /// order. Returns true if the rule passed.
    fn evaluate(
        &self,
        model: &M,
        options: &ValidationOptions,
        failures: &mut Vec<ValidationError>,
    ) -> bool;
}

/// An accessor with its ordered predicates.
pub(crate) struct Rule<M, V, A> {
    name: Option<Cow<'static, str>>,
    accessor: A,
    checks: Vec<Check<M, V>>,
}

impl<M, V, A> Rule<M, V, A>
where
    A: Fn(&M) -> V,
{
    pub(crate) fn new(
        name: Option<Cow<'static, str>>,
        accessor: A,
        checks: Vec<Check<M, V>>,
    ) -> Self {
        Self {
            name,
            accessor,
            checks,
        }
    }
}

impl<M, V, A> ModelRule<M> for Rule<M, V, A>
where
    A: Fn(&M) -> V + Send + Sync,
{
    fn evaluate(
        &self,
        model: &M,
        options: &ValidationOptions,
        failures: &mut Vec<ValidationError>,
    ) -> bool {
        // The accessor runs at most once, and only if some check applies.
        let mut value = None;
        let mut passed = true;

        for check in &self.checks {
            if !check.applies(model, options) {
                continue;
            }

            let value = value.get_or_insert_with(|| (self.accessor)(model));
            if let Err(error) = check.run(value) {
                tracing::trace!(
                    rule = self.name.as_deref().unwrap_or("<unnamed>"),
                    code = %error.code,
                    "predicate failed"
                );
                passed = false;
                failures.push(match &self.name {
                    Some(name) => error.with_field(name.clone()),
                    None => error,
                });
                if options.strategy == Strategy::FailFast {
                    break;
                }
            }
        }

        passed
    }
}
