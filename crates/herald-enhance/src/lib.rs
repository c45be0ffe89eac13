//! # herald-enhance
//!
//! AI enhancement of campaign email HTML.
//!
//! [`Enhancer::enhance`] asks a [`CompletionClient`] for a CSS-repaired
//! version of the template, then runs the protection vetoes in
//! [`protection`] to decide whether the rewrite may replace the original.
//! Both variants are always returned; callers decide what to persist.
//!
//! Model failures never escape: they become a result that keeps the
//! original and carries the error as its only reason.

pub mod diagnostics;
pub mod markers;
pub mod prompt;
pub mod protection;
pub mod response;

use std::sync::Arc;

use herald_config::EnhancementConfig;
use herald_core::{
    EnhancementResult, EnhancementValidation, PreferredVersion, RequirementsBundle, SizeAnalysis,
    Versions,
};
use herald_llm::{CompletionClient, CompletionRequest, LlmError};
use tracing::{debug, info, warn};

use crate::diagnostics::CampaignDiagnostics;
use crate::protection::{Assessment, ProtectionPolicy};

/// Prefix of the single reason recorded when the model call fails.
pub const FALLBACK_REASON_PREFIX: &str = "Ошибка AI-оптимизации, сохранён оригинал";

/// Runs the enhancement protocol against one completion client.
pub struct Enhancer {
    client: Arc<dyn CompletionClient>,
    config: EnhancementConfig,
    policy: ProtectionPolicy,
}

impl Enhancer {
    #[must_use]
    pub fn new(client: Arc<dyn CompletionClient>, config: EnhancementConfig) -> Self {
        let policy = ProtectionPolicy::from(&config);
        Self {
            client,
            config,
            policy,
        }
    }

    /// Model identifier of the underlying client.
    #[must_use]
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Enhance `current_html` using the campaign's requirement bundle.
    ///
    /// With `max_attempts > 1` the model is asked again while protection
    /// keeps triggering; the last assessed candidate wins. A model failure
    /// on a retry keeps the previous protected result.
    pub async fn enhance(
        &self,
        current_html: &str,
        requirements: &RequirementsBundle,
    ) -> EnhancementResult {
        let diagnostics = CampaignDiagnostics::from_content(&requirements.content);
        debug!(
            subject = %diagnostics.subject,
            destination = %diagnostics.destination,
            price = %diagnostics.price,
            currency = %diagnostics.currency,
            "campaign diagnostics"
        );
        let request = prompt::build_request(
            current_html,
            &diagnostics,
            &requirements.template.brand_colors,
        );

        let max_attempts = self.config.max_attempts.max(1);
        let mut last: Option<EnhancementResult> = None;

        for attempt in 1..=max_attempts {
            info!(attempt, max_attempts, model = self.client.model(), "requesting enhancement");
            let candidate = match self.request_candidate(&request).await {
                Ok(candidate) => candidate,
                Err(error) => {
                    warn!(attempt, %error, "enhancement call failed, keeping original");
                    return last.unwrap_or_else(|| fallback(current_html, &error, attempt));
                }
            };

            let size = SizeAnalysis::between(current_html, &candidate);
            let assessment =
                protection::assess(current_html, &candidate, size.change_percent, &self.policy);
            let protected = assessment.should_prefer_original();
            let result = settle(current_html, candidate, size, assessment, requirements, attempt);

            if !protected {
                info!(
                    attempt,
                    change_percent = result.size_analysis.change_percent,
                    "enhancement accepted"
                );
                return result;
            }
            warn!(
                attempt,
                reasons = ?result.validation.warning_reasons,
                "protection triggered, original preferred"
            );
            last = Some(result);
        }

        // max_attempts >= 1, so at least one result was stored.
        last.unwrap_or_else(|| {
            fallback(
                current_html,
                &LlmError::EmptyResponse {
                    model: self.client.model().to_string(),
                },
                0,
            )
        })
    }

    /// One model call; fenced or blank output is normalized here.
    async fn request_candidate(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let raw = self.client.complete(request).await?;
        let candidate = response::strip_code_fences(&raw);
        if candidate.trim().is_empty() {
            return Err(LlmError::EmptyResponse {
                model: self.client.model().to_string(),
            });
        }
        Ok(candidate)
    }
}

/// Turn an assessed candidate into the call's result.
fn settle(
    current_html: &str,
    candidate: String,
    size_analysis: SizeAnalysis,
    assessment: Assessment,
    requirements: &RequirementsBundle,
    attempts: u32,
) -> EnhancementResult {
    let Assessment { reasons, integrity } = assessment;

    if reasons.is_empty() {
        let enhancements_made =
            markers::detect_enhancements(&candidate, &requirements.template.brand_colors);
        EnhancementResult {
            enhanced_html: candidate.clone(),
            enhancements_made,
            versions: Versions {
                original: current_html.to_string(),
                optimized: candidate,
                preferred: PreferredVersion::Optimized,
            },
            size_analysis,
            validation: EnhancementValidation {
                has_warnings: false,
                warning_reasons: Vec::new(),
                integrity_check: Some(integrity),
            },
            attempts,
        }
    } else {
        EnhancementResult {
            enhanced_html: current_html.to_string(),
            enhancements_made: reasons.clone(),
            versions: Versions {
                original: current_html.to_string(),
                optimized: candidate,
                preferred: PreferredVersion::Original,
            },
            size_analysis,
            validation: EnhancementValidation {
                has_warnings: true,
                warning_reasons: reasons,
                integrity_check: Some(integrity),
            },
            attempts,
        }
    }
}

/// Result used when no candidate could be obtained.
fn fallback(current_html: &str, error: &LlmError, attempts: u32) -> EnhancementResult {
    let reason = format!("{FALLBACK_REASON_PREFIX}: {error}");
    EnhancementResult {
        enhanced_html: current_html.to_string(),
        enhancements_made: vec![reason.clone()],
        versions: Versions {
            original: current_html.to_string(),
            optimized: current_html.to_string(),
            preferred: PreferredVersion::Original,
        },
        size_analysis: SizeAnalysis::between(current_html, current_html),
        validation: EnhancementValidation {
            has_warnings: true,
            warning_reasons: vec![reason],
            integrity_check: None,
        },
        attempts,
    }
}
