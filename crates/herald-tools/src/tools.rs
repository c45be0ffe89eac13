//! The two campaign tool operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use herald_config::{CacheConfig, HeraldConfig};
use herald_core::{EnhancementResult, RequirementsBundle, ValidationResult};
use herald_enhance::Enhancer;
use herald_llm::CompletionClient;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{Instrument, info, warn};

use crate::cache::TtlCache;
use crate::error::ToolError;
use crate::loaders;
use crate::paths::{CampaignPaths, file_timestamp};
use crate::report::{
    ComparisonReport, EnhancementSummary, ErrorReport, QualityScore, ValidationReport, write_json,
    write_text,
};
use crate::status;

/// Input accepted by both tool operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParams {
    pub campaign_path: String,
    #[serde(default)]
    pub trace_id: Option<String>,
}

impl ToolParams {
    #[must_use]
    pub fn new(campaign_path: impl Into<String>) -> Self {
        Self {
            campaign_path: campaign_path.into(),
            trace_id: None,
        }
    }

    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct CampaignOutcome {
    pub report: ValidationReport,
    pub enhancement: EnhancementResult,
    pub report_path: PathBuf,
}

/// Validation and enhancement entry points for campaign directories.
///
/// Owns the two read-through caches; build a fresh instance for isolated
/// runs.
pub struct CampaignTools {
    enhancer: Enhancer,
    validation_cache: TtlCache<String, ValidationResult>,
    context_cache: TtlCache<PathBuf, RequirementsBundle>,
}

impl CampaignTools {
    #[must_use]
    pub fn new(enhancer: Enhancer, cache: &CacheConfig) -> Self {
        Self {
            enhancer,
            validation_cache: TtlCache::new(cache.ttl(), cache.validation_capacity),
            context_cache: TtlCache::new(cache.ttl(), cache.context_capacity),
        }
    }

    /// Wire `client` into an enhancer using the loaded configuration.
    #[must_use]
    pub fn from_config(client: Arc<dyn CompletionClient>, config: &HeraldConfig) -> Self {
        Self::new(
            Enhancer::new(client, config.enhancement.clone()),
            &config.cache,
        )
    }

    /// Validate the campaign template, enhance it, re-validate the chosen
    /// version, persist every variant, and summarize the validation.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] on missing input or a failed write. An error
    /// report is written to the campaign first whenever possible.
    pub async fn validate_and_correct_html(&self, params: &ToolParams) -> Result<String, ToolError> {
        let outcome = self.run(params).await?;
        Ok(status::validation_summary(&outcome))
    }

    /// Same pipeline as [`Self::validate_and_correct_html`], summarized from
    /// the design-enhancement point of view.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_and_correct_html`].
    pub async fn enhance_email_design(&self, params: &ToolParams) -> Result<String, ToolError> {
        let outcome = self.run(params).await?;
        Ok(status::enhancement_summary(&outcome))
    }

    /// Run the full pipeline and return its structured outcome.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_and_correct_html`].
    pub async fn run(&self, params: &ToolParams) -> Result<CampaignOutcome, ToolError> {
        let campaign_path = params.campaign_path.trim();
        if campaign_path.is_empty() {
            return Err(ToolError::MissingCampaignPath);
        }
        let span = tracing::info_span!(
            "campaign",
            campaign_path,
            trace_id = params.trace_id.as_deref().unwrap_or("-"),
        );
        let paths = CampaignPaths::new(campaign_path);

        async {
            match self.pipeline(&paths, params).await {
                Ok(outcome) => Ok(outcome),
                Err(error) => {
                    write_error_report(&paths, params, &error).await;
                    Err(error)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn pipeline(
        &self,
        paths: &CampaignPaths,
        params: &ToolParams,
    ) -> Result<CampaignOutcome, ToolError> {
        let html = loaders::load_template(paths).await?;
        let requirements = self.requirements(paths).await;

        let initial = self.validate_cached(paths, &html, &requirements);
        info!(
            valid = initial.is_valid,
            errors = initial.errors.len(),
            warnings = initial.warnings.len(),
            "initial validation"
        );

        let enhancement = self.enhancer.enhance(&html, &requirements).await;
        let final_validation =
            self.validate_cached(paths, &enhancement.enhanced_html, &requirements);
        info!(
            preferred = %enhancement.versions.preferred,
            valid = final_validation.is_valid,
            errors = final_validation.errors.len(),
            "final validation"
        );

        let timestamp = file_timestamp(Utc::now());
        let written = persist_variants(paths, &enhancement, &timestamp).await?;
        let mjml_template_present = tokio::fs::try_exists(paths.mjml_template())
            .await
            .unwrap_or(false);

        let report = ValidationReport {
            campaign_path: paths.root().to_string_lossy().into_owned(),
            trace_id: params.trace_id.clone(),
            timestamp,
            model: self.enhancer.model().to_string(),
            quality_score: QualityScore {
                initial: initial.quality_score(),
                final_score: final_validation.quality_score(),
            },
            initial_validation: initial,
            final_validation,
            enhancement: EnhancementSummary::from(&enhancement),
            mjml_template_present,
            files_written: written
                .iter()
                .map(|path| paths.display_relative(path))
                .collect(),
        };
        let report_path = write_json(&paths.validation_report(), &report).await?;
        info!(report = %report_path.display(), files = written.len(), "campaign files written");

        Ok(CampaignOutcome {
            report,
            enhancement,
            report_path,
        })
    }

    async fn requirements(&self, paths: &CampaignPaths) -> RequirementsBundle {
        let key = paths.root().to_path_buf();
        if let Some(bundle) = self.context_cache.get(&key) {
            tracing::debug!("requirements served from cache");
            return bundle;
        }
        let bundle = loaders::load_requirements(paths).await;
        self.context_cache.insert(key, bundle.clone());
        bundle
    }

    fn validate_cached(
        &self,
        paths: &CampaignPaths,
        html: &str,
        requirements: &RequirementsBundle,
    ) -> ValidationResult {
        let key = validation_key(paths.root(), html);
        if let Some(result) = self.validation_cache.get(&key) {
            tracing::debug!("validation served from cache");
            return result;
        }
        let result = herald_check::validate(html, requirements);
        self.validation_cache.insert(key, result.clone());
        result
    }
}

/// Campaign path, HTML length, and the base64 SHA-256 of the whole document.
fn validation_key(root: &Path, html: &str) -> String {
    let digest = Sha256::digest(html.as_bytes());
    format!("{}:{}:{}", root.display(), html.len(), STANDARD.encode(digest))
}

/// Write the enhanced/latest HTML, both variants when they differ, and the
/// comparison report.
async fn persist_variants(
    paths: &CampaignPaths,
    result: &EnhancementResult,
    timestamp: &str,
) -> Result<Vec<PathBuf>, ToolError> {
    let mut written = vec![
        write_text(&paths.enhanced(timestamp), &result.enhanced_html).await?,
        write_text(&paths.enhanced_latest(), &result.enhanced_html).await?,
    ];
    if result.versions.original != result.versions.optimized {
        written.push(write_text(&paths.original_variant(timestamp), &result.versions.original).await?);
        written.push(
            write_text(&paths.optimized_variant(timestamp), &result.versions.optimized).await?,
        );
    }
    written.push(
        write_json(
            &paths.comparison_report(timestamp),
            &ComparisonReport::new(timestamp, result),
        )
        .await?,
    );
    Ok(written)
}

async fn write_error_report(paths: &CampaignPaths, params: &ToolParams, error: &ToolError) {
    let report = ErrorReport::new(
        error,
        &params.campaign_path,
        params.trace_id.as_deref(),
        file_timestamp(Utc::now()),
    );
    match write_json(&paths.error_report(), &report).await {
        Ok(path) => warn!(%error, report = %path.display(), "campaign run failed"),
        Err(write_error) => warn!(%error, %write_error, "campaign run failed, error report not written"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_key_distinguishes_campaigns_and_lengths() {
        let html = "<html><body>x</body></html>";
        let a = validation_key(Path::new("/c/a"), html);
        let b = validation_key(Path::new("/c/b"), html);
        let longer = validation_key(Path::new("/c/a"), &format!("{html} "));
        assert_ne!(a, b);
        assert_ne!(a, longer);
        assert_eq!(a, validation_key(Path::new("/c/a"), html));
    }

    #[test]
    fn validation_key_covers_the_whole_document() {
        let head = "a".repeat(500);
        let before = validation_key(Path::new("/c"), &format!("{head}#4bff7e"));
        let after = validation_key(Path::new("/c"), &format!("{head}#4BFF7E"));
        assert_ne!(before, after);
        assert!(before.len() < 200, "{before}");
    }

    #[test]
    fn params_deserialize_without_trace_id() {
        let params: ToolParams = serde_json::from_str(r#"{"campaign_path": "/c"}"#).unwrap();
        assert_eq!(params, ToolParams::new("/c"));
    }
}
