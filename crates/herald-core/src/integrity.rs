//! Content-integrity records produced when an AI-modified document is
//! compared against its original.

use serde::{Deserialize, Serialize};

/// Per-check outcome flags. `true` means the check passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct IntegrityDetails {
    pub title_match: bool,
    pub main_text_match: bool,
    pub image_count_match: bool,
    pub link_count_match: bool,
    pub cta_buttons_match: bool,
    pub structure_valid: bool,
    pub meta_tags_match: bool,
    pub css_integrity_match: bool,
}

impl Default for IntegrityDetails {
    fn default() -> Self {
        Self {
            title_match: true,
            main_text_match: true,
            image_count_match: true,
            link_count_match: true,
            cta_buttons_match: true,
            structure_valid: true,
            meta_tags_match: true,
            css_integrity_match: true,
        }
    }
}

impl IntegrityDetails {
    /// Number of checks that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        [
            self.title_match,
            self.main_text_match,
            self.image_count_match,
            self.link_count_match,
            self.cta_buttons_match,
            self.structure_valid,
            self.meta_tags_match,
            self.css_integrity_match,
        ]
        .iter()
        .filter(|passed| !**passed)
        .count()
    }
}

/// Outcome of an integrity comparison. `is_valid` holds iff `issues` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityCheckResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub details: IntegrityDetails,
}

impl IntegrityCheckResult {
    #[must_use]
    pub fn from_parts(issues: Vec<String>, details: IntegrityDetails) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_details_all_pass() {
        let details = IntegrityDetails::default();
        assert_eq!(details.failed_count(), 0);
        let result = IntegrityCheckResult::from_parts(Vec::new(), details);
        assert!(result.is_valid);
    }

    #[test]
    fn issues_invalidate() {
        let details = IntegrityDetails {
            link_count_match: false,
            ..IntegrityDetails::default()
        };
        let result =
            IntegrityCheckResult::from_parts(vec!["Link count decreased significantly: 4 → 1".into()], details);
        assert!(!result.is_valid);
        assert_eq!(result.details.failed_count(), 1);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["details"]["linkCountMatch"], false);
        assert_eq!(value["isValid"], false);
    }
}
