//! Protection logic: decide whether an AI rewrite may replace the original.
//!
//! Four independent vetoes, evaluated in order; any one keeps the original:
//! truncation on heavy shrinkage, bloat on heavy growth, lost document tags,
//! and a failed content-integrity check.

use herald_check::{check_integrity, html};
use herald_config::EnhancementConfig;
use herald_core::IntegrityCheckResult;

/// Number of leading body-text characters that must survive shrinkage.
const BODY_PREFIX_CHARS: usize = 100;

/// Size thresholds, in percent of the original length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtectionPolicy {
    pub shrink_threshold_percent: f64,
    pub growth_threshold_percent: f64,
}

impl Default for ProtectionPolicy {
    fn default() -> Self {
        Self::from(&EnhancementConfig::default())
    }
}

impl From<&EnhancementConfig> for ProtectionPolicy {
    fn from(config: &EnhancementConfig) -> Self {
        Self {
            shrink_threshold_percent: config.shrink_threshold_percent,
            growth_threshold_percent: config.growth_threshold_percent,
        }
    }
}

/// Outcome of the four vetoes.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Why the original should be kept. Empty when the candidate is accepted.
    pub reasons: Vec<String>,
    pub integrity: IntegrityCheckResult,
}

impl Assessment {
    #[must_use]
    pub fn should_prefer_original(&self) -> bool {
        !self.reasons.is_empty()
    }
}

/// Run every veto against `candidate`.
#[must_use]
pub fn assess(
    original: &str,
    candidate: &str,
    change_percent: f64,
    policy: &ProtectionPolicy,
) -> Assessment {
    let mut reasons = Vec::new();

    if change_percent < policy.shrink_threshold_percent {
        let lost = truncated_content(original, candidate);
        if !lost.is_empty() {
            reasons.push(format!(
                "Обнаружено обрезание контента (размер уменьшился на {:.1}%): потеряны {}",
                change_percent.abs(),
                lost.join(", ")
            ));
        }
    }

    if change_percent > policy.growth_threshold_percent {
        reasons.push(format!(
            "Слишком большое увеличение размера: {change_percent:.1}%"
        ));
    }

    let missing = html::missing_tags(candidate, &html::DOCUMENT_TAGS);
    if !missing.is_empty() {
        reasons.push(format!(
            "Нарушена HTML-структура: отсутствует {}",
            missing.join(", ")
        ));
    }

    let integrity = check_integrity(original, candidate);
    if !integrity.is_valid {
        reasons.push(format!(
            "Проверка целостности контента не пройдена: {}",
            integrity.issues.join("; ")
        ));
    }

    Assessment { reasons, integrity }
}

/// Content of `original` that no longer appears in `candidate`: the title
/// text, the first 100 characters of body text, and any `<img>` tag.
#[must_use]
pub fn truncated_content(original: &str, candidate: &str) -> Vec<String> {
    let mut lost = Vec::new();

    if let Some(title) = html::extract_title(original) {
        if !candidate.contains(&title) {
            lost.push(format!("заголовок «{title}»"));
        }
    }

    let body = html::body_text(original);
    let prefix: String = body.chars().take(BODY_PREFIX_CHARS).collect();
    if !prefix.is_empty() && !html::body_text(candidate).contains(&prefix) {
        lost.push(String::from("начало текста письма"));
    }

    let missing_images = html::img_tags(original)
        .into_iter()
        .filter(|tag| !candidate.contains(tag))
        .count();
    if missing_images > 0 {
        lost.push(format!("изображения ({missing_images})"));
    }

    lost
}
