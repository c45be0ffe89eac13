//! Requirement bundle: the four JSON-derived inputs that parameterize
//! validation for one campaign.
//!
//! Every struct defaults field-by-field, so a partially filled or missing
//! file still produces a usable value.

mod assets;
mod content;
mod technical;
mod template;

pub use assets::{AssetEntry, AssetManifest};
pub use content::{CallToAction, ContentContext, NestedContext, Pricing, Scalar};
pub use technical::TechnicalRequirements;
pub use template::{BrandColors, ExpectedElement, TemplateRequirements};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Requirements for a single validation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsBundle {
    pub template: TemplateRequirements,
    pub technical: TechnicalRequirements,
    pub assets: AssetManifest,
    pub content: ContentContext,
}

/// Parse one requirement file, naming the file in the error.
///
/// # Errors
///
/// Returns [`CoreError::InvalidRequirements`] when the JSON is malformed or
/// does not fit the expected shape.
pub fn parse_requirement<T: DeserializeOwned>(file: &str, json: &str) -> Result<T, CoreError> {
    serde_json::from_str(json).map_err(|e| CoreError::InvalidRequirements {
        file: file.to_string(),
        reason: e.to_string(),
    })
}
