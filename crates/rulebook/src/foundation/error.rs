//! Error types for rule construction and validation failures
//!
//! Two kinds live here and they never mix:
//!
//! - [`RuleError`] is a construction error. It is returned from builder calls
//!   and aborts the builder chain.
//! - [`ValidationError`] is a failure descriptor. Predicates produce it and the
//!   validator records it inside a [`ValidationResult`](crate::ValidationResult).
//!   It is data, not control flow.
//!
//! All descriptor strings use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// CONSTRUCTION ERROR
// ============================================================================

/// Error raised while building a rule set.
///
/// A construction error means the call site is wrong; there is nothing to
/// retry. It is returned at the first builder call that detects it and no
/// partial rule is attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// An operation was invoked on a rule-in-progress that does not exist.
    #[error("cannot apply `{operation}`: the rule is missing")]
    MissingRule {
        /// The builder operation that was attempted.
        operation: &'static str,
    },

    /// A modifier was applied before any predicate was attached.
    #[error("`{modifier}` must follow a predicate")]
    NoPredicate {
        /// The modifier that was attempted.
        modifier: &'static str,
    },
}

impl RuleError {
    /// Creates a missing-rule error for the given operation.
    #[must_use]
    pub fn missing_rule(operation: &'static str) -> Self {
        Self::MissingRule { operation }
    }

    /// Creates a no-predicate error for the given modifier.
    #[must_use]
    pub fn no_predicate(modifier: &'static str) -> Self {
        Self::NoPredicate { modifier }
    }
}

// ============================================================================
// FAILURE DESCRIPTOR
// ============================================================================

/// Parameter list of a failure descriptor. Predicates attach at most two.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured description of one failed predicate.
///
/// # Examples
///
/// ```
/// use rulebook::ValidationError;
///
/// let error = ValidationError::new("same_as", "Value must be the same as 5")
///     .with_field("count")
///     .with_param("expected", "5")
///     .with_param("actual", "3");
///
/// assert_eq!(error.param("actual"), Some("3"));
/// assert_eq!(error.to_string(), "[count] same_as: Value must be the same as 5 (params: [expected=5, actual=3])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable identifier of the predicate, or the override set by
    /// `with_error_code`.
    pub code: Cow<'static, str>,

    /// What the caller is shown.
    pub message: Cow<'static, str>,

    /// Name given to the rule with `ensure_named`.
    pub field: Option<Cow<'static, str>>,

    /// `expected` / `actual` for comparisons, empty otherwise.
    pub params: Params,
}

impl ValidationError {
    /// Creates a new failure descriptor with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Params::new(),
        }
    }

    /// Sets the field name for this failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "required" failure.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "Value is required")
    }

    /// Converts the failure to a JSON object.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{field}] ")?;
        }
        write!(f, "{}: {}", self.code, self.message)?;

        let mut params = self.params.iter();
        if let Some((key, value)) = params.next() {
            write!(f, " (params: [{key}={value}")?;
            for (key, value) in params {
                write!(f, ", {key}={value}")?;
            }
            f.write_str("])")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Failures of an unsuccessful validation, for callers that want `?`.
///
/// Produced by [`ValidationResult::into_result`](crate::ValidationResult::into_result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
