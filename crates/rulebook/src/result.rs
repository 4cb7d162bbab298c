//! Aggregate validation outcome

use std::fmt;
use std::ops::BitAnd;

use crate::foundation::{ValidationError, ValidationErrors};

/// Snapshot of one validation run.
///
/// Succeeds iff no predicate failed. Failures keep rule order, and within a
/// rule, predicate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failures: Vec<ValidationError>,
}

impl ValidationResult {
    /// A successful result.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Builds a result from recorded failures.
    #[must_use]
    pub fn from_failures(failures: Vec<ValidationError>) -> Self {
        Self { failures }
    }

    /// Returns true if every rule passed.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the failure descriptors in rule order.
    #[must_use]
    pub fn failures(&self) -> &[ValidationError] {
        &self.failures
    }

    /// Returns the failure messages in rule order.
    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.message.as_ref())
    }

    /// Returns the failure codes in rule order.
    pub fn error_codes(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.code.as_ref())
    }

    /// Combines two results. The merged result succeeds iff both did.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.failures.extend(other.failures);
        self
    }

    /// Converts into a `Result`, for callers that want `?`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.succeeded() {
            Ok(())
        } else {
            Err(ValidationErrors::from(self.failures))
        }
    }

    /// Converts the result to a JSON object.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "succeeded": self.succeeded(),
            "failures": self
                .failures
                .iter()
                .map(ValidationError::to_json_value)
                .collect::<Vec<_>>(),
        })
    }
}

impl BitAnd for ValidationResult {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded() {
            return f.write_str("Validation succeeded");
        }
        write!(f, "Validation failed with {} failure(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}
