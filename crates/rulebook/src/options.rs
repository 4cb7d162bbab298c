//! Validation options
//!
//! Options control how a rule set is executed, not what it checks. They
//! deserialize from any serde format, so they can live in an application's
//! config file:
//!
//! ```
//! use rulebook::{Strategy, ValidationOptions};
//!
//! let options: ValidationOptions =
//!     serde_json::from_str(r#"{ "strategy": "fail_fast" }"#).unwrap();
//! assert_eq!(options.strategy, Strategy::FailFast);
//! assert!(options.tags.is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable read by [`ValidationOptions::from_env`] for the strategy.
pub const STRATEGY_ENV: &str = "RULEBOOK_STRATEGY";

/// Environment variable read by [`ValidationOptions::from_env`] for the tags
/// (comma separated).
pub const TAGS_ENV: &str = "RULEBOOK_TAGS";

/// Whether evaluation continues after the first failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Evaluate every rule and record every failure.
    #[default]
    Complete,
    /// Stop at the first failing predicate.
    FailFast,
}

impl Strategy {
    /// Returns the configuration name of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::FailFast => "fail_fast",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation strategy `{0}` (expected `complete` or `fail_fast`)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "fail_fast" | "failfast" | "fail-fast" => Ok(Self::FailFast),
            other => Err(ParseStrategyError(other.to_owned())),
        }
    }
}

/// How a rule set is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Evaluation strategy.
    pub strategy: Strategy,
    /// When non-empty, only predicates carrying one of these tags run.
    pub tags: Vec<String>,
}

impl ValidationOptions {
    /// Evaluate everything (the default).
    #[must_use]
    pub fn complete() -> Self {
        Self::default()
    }

    /// Stop at the first failure.
    #[must_use]
    pub fn fail_fast() -> Self {
        Self {
            strategy: Strategy::FailFast,
            ..Self::default()
        }
    }

    /// Restricts evaluation to predicates carrying one of `tags`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Create options from environment variables.
    ///
    /// Reads [`STRATEGY_ENV`] and [`TAGS_ENV`]. Unknown strategies fall back
    /// to [`Strategy::Complete`] with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create options from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(raw) = lookup(STRATEGY_ENV) {
            options.strategy = raw.parse().unwrap_or_else(|err: ParseStrategyError| {
                tracing::warn!(error = %err, "falling back to complete strategy");
                Strategy::Complete
            });
        }

        if let Some(raw) = lookup(TAGS_ENV) {
            options.tags = raw
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect();
        }

        options
    }

    /// Returns true if a predicate with `tags` should run under these options.
    pub(crate) fn selects<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.tags.is_empty()
            || tags
                .iter()
                .any(|tag| self.tags.iter().any(|wanted| wanted == tag.as_ref()))
    }
}
