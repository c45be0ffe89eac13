//! Enhancement records: the AI-rewritten variant, the protection decision,
//! and the size bookkeeping that fed it.

use serde::{Deserialize, Serialize};

use crate::enums::PreferredVersion;
use crate::integrity::IntegrityCheckResult;

/// Both HTML variants plus the selector chosen by the protection logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versions {
    pub original: String,
    pub optimized: String,
    pub preferred: PreferredVersion,
}

/// Size delta between the original and optimized documents, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeAnalysis {
    pub original_length: usize,
    pub optimized_length: usize,
    pub change_percent: f64,
    pub change_bytes: i64,
}

impl SizeAnalysis {
    /// Compare two documents. An empty original yields a 0% change.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn between(original: &str, optimized: &str) -> Self {
        let original_length = original.len();
        let optimized_length = optimized.len();
        let change_bytes = optimized_length as i64 - original_length as i64;
        let change_percent = if original_length == 0 {
            0.0
        } else {
            change_bytes as f64 / original_length as f64 * 100.0
        };
        Self {
            original_length,
            optimized_length,
            change_percent,
            change_bytes,
        }
    }
}

/// Warnings raised while deciding between the variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementValidation {
    pub has_warnings: bool,
    pub warning_reasons: Vec<String>,
    /// Absent when no candidate was produced (LLM failure).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity_check: Option<IntegrityCheckResult>,
}

/// Result of one enhancement call.
///
/// When `versions.preferred` is [`PreferredVersion::Original`],
/// `enhanced_html` is byte-for-byte the input HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResult {
    pub enhanced_html: String,
    pub enhancements_made: Vec<String>,
    pub versions: Versions,
    pub size_analysis: SizeAnalysis,
    pub validation: EnhancementValidation,
    /// How many LLM calls were made before the decision settled.
    #[serde(default = "default_attempts")]
    pub attempts: u32,
}

const fn default_attempts() -> u32 {
    1
}

impl EnhancementResult {
    /// Whether the protection logic kept the original document.
    #[must_use]
    pub fn protection_triggered(&self) -> bool {
        self.versions.preferred == PreferredVersion::Original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_analysis_reports_growth_and_shrinkage() {
        let grown = SizeAnalysis::between("abcd", "abcdefghij");
        assert_eq!(grown.change_bytes, 6);
        assert!((grown.change_percent - 150.0).abs() < f64::EPSILON);

        let shrunk = SizeAnalysis::between("abcdefghij", "abcde");
        assert_eq!(shrunk.change_bytes, -5);
        assert!((shrunk.change_percent + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn size_analysis_empty_original_is_zero_percent() {
        let analysis = SizeAnalysis::between("", "<html></html>");
        assert!(analysis.change_percent.abs() < f64::EPSILON);
        assert_eq!(analysis.optimized_length, 13);
    }
}
