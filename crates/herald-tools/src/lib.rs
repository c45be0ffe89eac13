//! # herald-tools
//!
//! Campaign-level entry points: load a campaign directory, validate and
//! enhance its HTML template, write every variant plus JSON reports, and
//! return a human-readable status.
//!
//! Both operations take [`ToolParams`] (`campaign_path`, optional
//! `trace_id`). Requirement files are optional; the HTML template is not.
//! On failure an error report is written to
//! `docs/html-validation-error-report.json` before the error is returned.

pub mod cache;
mod error;
pub mod loaders;
pub mod paths;
pub mod report;
pub mod status;
mod tools;

pub use cache::TtlCache;
pub use error::{ERROR_PREFIX, ToolError};
pub use paths::CampaignPaths;
pub use report::{ComparisonReport, ErrorReport, ValidationReport};
pub use tools::{CampaignOutcome, CampaignTools, ToolParams};
