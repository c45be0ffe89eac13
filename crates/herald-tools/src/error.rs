//! Tool entry-point error types.

use std::path::PathBuf;

use herald_core::CoreError;
use thiserror::Error;

/// Prefix carried by every input error surfaced to the caller.
pub const ERROR_PREFIX: &str = "HTML validation failed";

/// Errors returned by the campaign tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The caller passed no campaign directory.
    #[error("HTML validation failed: campaign_path is required")]
    MissingCampaignPath,

    /// The campaign has no `templates/email-template.html`.
    #[error("HTML validation failed: template not found at {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// Reading or writing a campaign file failed.
    #[error("HTML validation failed: cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
