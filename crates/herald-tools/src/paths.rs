//! Fixed file layout under a campaign directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

pub const TEMPLATES_DIR: &str = "templates";

pub const HTML_TEMPLATE: &str = "templates/email-template.html";
pub const MJML_TEMPLATE: &str = "templates/email-template.mjml";
pub const DESIGN_BRIEF: &str = "content/design-brief-from-context.json";
pub const EMAIL_CONTENT: &str = "content/email-content.json";
pub const TECHNICAL_SPEC: &str = "docs/specifications/technical-specification.json";
pub const ASSET_MANIFEST: &str = "assets/manifests/asset-manifest.json";

pub const ENHANCED_LATEST: &str = "templates/email-template-enhanced-latest.html";
pub const VALIDATION_REPORT: &str = "docs/html-validation-report.json";
pub const ERROR_REPORT: &str = "docs/html-validation-error-report.json";

/// Paths of every file a tool operation reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignPaths {
    root: PathBuf,
}

impl CampaignPaths {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn html_template(&self) -> PathBuf {
        self.root.join(HTML_TEMPLATE)
    }

    #[must_use]
    pub fn mjml_template(&self) -> PathBuf {
        self.root.join(MJML_TEMPLATE)
    }

    #[must_use]
    pub fn design_brief(&self) -> PathBuf {
        self.root.join(DESIGN_BRIEF)
    }

    #[must_use]
    pub fn email_content(&self) -> PathBuf {
        self.root.join(EMAIL_CONTENT)
    }

    #[must_use]
    pub fn technical_spec(&self) -> PathBuf {
        self.root.join(TECHNICAL_SPEC)
    }

    #[must_use]
    pub fn asset_manifest(&self) -> PathBuf {
        self.root.join(ASSET_MANIFEST)
    }

    #[must_use]
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    #[must_use]
    pub fn enhanced(&self, timestamp: &str) -> PathBuf {
        self.templates_dir()
            .join(format!("email-template-enhanced-{timestamp}.html"))
    }

    #[must_use]
    pub fn enhanced_latest(&self) -> PathBuf {
        self.root.join(ENHANCED_LATEST)
    }

    #[must_use]
    pub fn original_variant(&self, timestamp: &str) -> PathBuf {
        self.templates_dir()
            .join(format!("email-template-original-{timestamp}.html"))
    }

    #[must_use]
    pub fn optimized_variant(&self, timestamp: &str) -> PathBuf {
        self.templates_dir()
            .join(format!("email-template-optimized-{timestamp}.html"))
    }

    #[must_use]
    pub fn comparison_report(&self, timestamp: &str) -> PathBuf {
        self.templates_dir()
            .join(format!("enhancement-comparison-{timestamp}.json"))
    }

    #[must_use]
    pub fn validation_report(&self) -> PathBuf {
        self.root.join(VALIDATION_REPORT)
    }

    #[must_use]
    pub fn error_report(&self) -> PathBuf {
        self.root.join(ERROR_REPORT)
    }

    /// `path` relative to the campaign root, for status messages.
    #[must_use]
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

/// ISO-8601 timestamp usable in file names (`:` and `.` become `-`).
#[must_use]
pub fn file_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}
