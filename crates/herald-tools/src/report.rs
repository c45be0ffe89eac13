//! JSON reports written next to the campaign template.

use std::path::{Path, PathBuf};

use herald_core::{
    EnhancementResult, EnhancementValidation, PreferredVersion, SizeAnalysis, ValidationResult,
    Versions,
};
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Static guidance included in every error report.
pub const RECOVERY_ACTIONS: [&str; 4] = [
    "Check that the campaign directory exists and contains templates/email-template.html",
    "Verify that the requirement JSON files under content/, docs/specifications/ and assets/manifests/ are readable",
    "Confirm the LLM API key and endpoint if enhancement is expected to run",
    "Re-run the validation once the cause is fixed; previous enhanced templates are left untouched",
];

/// `docs/html-validation-report.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub campaign_path: String,
    pub trace_id: Option<String>,
    pub timestamp: String,
    pub model: String,
    pub initial_validation: ValidationResult,
    pub final_validation: ValidationResult,
    pub quality_score: QualityScore,
    pub enhancement: EnhancementSummary,
    pub mjml_template_present: bool,
    pub files_written: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    pub initial: u32,
    #[serde(rename = "final")]
    pub final_score: u32,
}

/// The enhancement outcome without the HTML bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementSummary {
    pub preferred: PreferredVersion,
    pub size_analysis: SizeAnalysis,
    pub enhancements_made: Vec<String>,
    pub warning_reasons: Vec<String>,
    pub integrity_valid: Option<bool>,
    pub attempts: u32,
}

impl From<&EnhancementResult> for EnhancementSummary {
    fn from(result: &EnhancementResult) -> Self {
        Self {
            preferred: result.versions.preferred,
            size_analysis: result.size_analysis,
            enhancements_made: result.enhancements_made.clone(),
            warning_reasons: result.validation.warning_reasons.clone(),
            integrity_valid: result
                .validation
                .integrity_check
                .as_ref()
                .map(|check| check.is_valid),
            attempts: result.attempts,
        }
    }
}

/// `templates/enhancement-comparison-<ts>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub timestamp: String,
    pub versions: Versions,
    pub size_analysis: SizeAnalysis,
    pub validation: EnhancementValidation,
    pub enhancements_made: Vec<String>,
}

impl ComparisonReport {
    #[must_use]
    pub fn new(timestamp: &str, result: &EnhancementResult) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            versions: result.versions.clone(),
            size_analysis: result.size_analysis,
            validation: result.validation.clone(),
            enhancements_made: result.enhancements_made.clone(),
        }
    }
}

/// `docs/html-validation-error-report.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub error: String,
    /// The error followed by each of its sources.
    pub stack: Vec<String>,
    pub campaign_path: String,
    pub trace_id: Option<String>,
    pub timestamp: String,
    pub recovery_actions: Vec<String>,
}

impl ErrorReport {
    #[must_use]
    pub fn new(
        error: &(dyn std::error::Error + 'static),
        campaign_path: &str,
        trace_id: Option<&str>,
        timestamp: String,
    ) -> Self {
        let stack = std::iter::successors(Some(error), |e| e.source())
            .map(ToString::to_string)
            .collect();
        Self {
            error: error.to_string(),
            stack,
            campaign_path: campaign_path.to_string(),
            trace_id: trace_id.map(str::to_string),
            timestamp,
            recovery_actions: RECOVERY_ACTIONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Pretty-print `value` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ToolError`] if serialization or the write fails.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf, ToolError> {
    let json = serde_json::to_string_pretty(value)?;
    write_text(path, &json).await
}

/// Write `contents` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ToolError::Io`] if the directory or file cannot be written.
pub async fn write_text(path: &Path, contents: &str) -> Result<PathBuf, ToolError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ToolError::io(parent, source))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ToolError::io(path, source))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_report_records_source_chain() {
        let error = ToolError::io(
            "/c/templates/email-template.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let report = ErrorReport::new(&error, "/c", Some("trace-1"), "ts".into());
        assert_eq!(report.stack.len(), 2);
        assert_eq!(report.stack[1], "denied");
        assert_eq!(report.trace_id.as_deref(), Some("trace-1"));
        assert_eq!(report.recovery_actions.len(), RECOVERY_ACTIONS.len());
    }

    #[test]
    fn quality_score_serializes_final_key() {
        let json = serde_json::to_value(QualityScore {
            initial: 60,
            final_score: 90,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"initial": 60, "final": 90}));
    }

    #[tokio::test]
    async fn write_json_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/nested/report.json");
        write_json(&path, &serde_json::json!({"ok": true})).await.unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"ok\": true"));
    }
}
