//! Structural validation records.

use serde::{Deserialize, Serialize};

use crate::enums::{ErrorType, Severity, WarningType};

/// A rule violation found in an HTML template. Blocks validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    #[must_use]
    pub fn new(kind: ErrorType, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            location: None,
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// A non-blocking observation about an HTML template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    #[serde(rename = "type")]
    pub kind: WarningType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    #[must_use]
    pub fn new(kind: WarningType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Aggregate outcome of running every structural check.
///
/// `is_valid` is derived from `errors` alone; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Build a result from collected errors and warnings.
    #[must_use]
    pub fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Number of errors at the given severity.
    #[must_use]
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Descriptive 0–100 score: each error and warning deducts a fixed amount.
    #[must_use]
    pub fn quality_score(&self) -> u32 {
        let deductions: usize = self
            .errors
            .iter()
            .map(|e| match e.severity {
                Severity::Critical => 25,
                Severity::Major => 10,
                Severity::Minor => 3,
            })
            .sum::<usize>()
            + self.warnings.len();
        u32::try_from(100_usize.saturating_sub(deductions)).unwrap_or(0)
    }
}
