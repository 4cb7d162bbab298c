//! Rule sets and their execution against a model

use std::borrow::Cow;
use std::fmt;

use crate::foundation::RuleError;
use crate::options::{Strategy, ValidationOptions};
use crate::result::ValidationResult;
use crate::rule::builder::{RuleBuilder, RuleInProgress};
use crate::rule::{ModelRule, Rule};

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered collection of rules for model type `M`.
///
/// Built by value through [`create`](Self::create) and
/// [`ensure`](Self::ensure), then borrowed immutably by every
/// [`for_model`](Self::for_model) call. A rule set is `Send + Sync` and can be
/// reused across validations and threads.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rulebook::prelude::*;
///
/// struct Event {
///     starts: NaiveDate,
///     ends: Option<NaiveDate>,
/// }
///
/// let opening = NaiveDate::from_ymd_opt(2017, 6, 10).unwrap();
///
/// let rules = RuleSet::<Event>::create()
///     .ensure_named("starts", |e| e.starts, |rule| rule.is_same_as(opening))?
///     .ensure_named("ends", |e| e.ends, |rule| rule.required().is_after(opening))?;
///
/// let event = Event { starts: opening, ends: None };
/// let result = rules.for_model(&event).validate();
///
/// assert!(!result.succeeded());
/// assert_eq!(result.error_codes().collect::<Vec<_>>(), ["required", "after"]);
/// # Ok::<(), RuleError>(())
/// ```
pub struct RuleSet<M> {
    rules: Vec<Box<dyn ModelRule<M>>>,
    options: ValidationOptions,
}

impl<M> RuleSet<M> {
    /// Starts an empty rule set.
    #[must_use]
    pub fn create() -> Self {
        Self {
            rules: Vec::new(),
            options: ValidationOptions::default(),
        }
    }

    /// Attaches a rule over the value extracted by `accessor`.
    ///
    /// `configure` receives a fresh [`RuleBuilder`] and returns anything that
    /// holds a rule in progress. A construction error aborts here and no
    /// rule is attached.
    pub fn ensure<V, A, C, R>(self, accessor: A, configure: C) -> Result<Self, RuleError>
    where
        M: 'static,
        V: 'static,
        A: Fn(&M) -> V + Send + Sync + 'static,
        C: FnOnce(RuleBuilder<M, V>) -> R,
        R: RuleInProgress<Model = M, Value = V>,
    {
        self.attach(None, accessor, configure)
    }

    /// Like [`ensure`](Self::ensure), but failures of this rule carry `name`
    /// as their field.
    pub fn ensure_named<V, A, C, R>(
        self,
        name: impl Into<Cow<'static, str>>,
        accessor: A,
        configure: C,
    ) -> Result<Self, RuleError>
    where
        M: 'static,
        V: 'static,
        A: Fn(&M) -> V + Send + Sync + 'static,
        C: FnOnce(RuleBuilder<M, V>) -> R,
        R: RuleInProgress<Model = M, Value = V>,
    {
        self.attach(Some(name.into()), accessor, configure)
    }

    fn attach<V, A, C, R>(
        mut self,
        name: Option<Cow<'static, str>>,
        accessor: A,
        configure: C,
    ) -> Result<Self, RuleError>
    where
        M: 'static,
        V: 'static,
        A: Fn(&M) -> V + Send + Sync + 'static,
        C: FnOnce(RuleBuilder<M, V>) -> R,
        R: RuleInProgress<Model = M, Value = V>,
    {
        let checks = configure(RuleBuilder::new())
            .resolve("ensure")?
            .into_checks();
        self.rules.push(Box::new(Rule::new(name, accessor, checks)));
        Ok(self)
    }

    /// Sets the evaluation strategy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Replaces all validation options.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options used by [`Validation::validate`].
    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule was attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Binds the rule set to one model instance.
    #[must_use]
    pub fn for_model<'a>(&'a self, model: &'a M) -> Validation<'a, M> {
        Validation {
            rules: self,
            model,
            options: self.options.clone(),
        }
    }
}

impl<M> Default for RuleSet<M> {
    fn default() -> Self {
        Self::create()
    }
}

impl<M> fmt::Debug for RuleSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// A rule set bound to one model, ready to run.
pub struct Validation<'a, M> {
    rules: &'a RuleSet<M>,
    model: &'a M,
    options: ValidationOptions,
}

impl<M> Validation<'_, M> {
    /// Overrides the strategy for this run only.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Runs every rule in insertion order.
    #[must_use = "validation result must be checked"]
    pub fn validate(&self) -> ValidationResult {
        self.run(&self.options)
    }

    /// Runs only predicates tagged with one of `tags`.
    #[must_use = "validation result must be checked"]
    pub fn validate_tagged<I, S>(&self, tags: I) -> ValidationResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = self.options.clone().with_tags(tags);
        self.run(&options)
    }

    fn run(&self, options: &ValidationOptions) -> ValidationResult {
        let span = tracing::debug_span!(
            "validate",
            rules = self.rules.len(),
            strategy = %options.strategy
        );
        let _guard = span.enter();

        let mut failures = Vec::new();
        for (index, rule) in self.rules.rules.iter().enumerate() {
            let passed = rule.evaluate(self.model, options, &mut failures);
            if !passed && options.strategy == Strategy::FailFast {
                tracing::trace!(rule = index, "stopping after first failure");
                break;
            }
        }

        let result = ValidationResult::from_failures(failures);
        tracing::debug!(
            succeeded = result.succeeded(),
            failures = result.failures().len(),
            "validation finished"
        );
        result
    }
}

impl<M> fmt::Debug for Validation<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("rules", &self.rules.len())
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
