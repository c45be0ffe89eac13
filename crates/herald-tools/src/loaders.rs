//! Requirement loaders.
//!
//! The four files are read concurrently. Each loader fails on its own: a
//! missing or malformed file yields that requirement's defaults and never
//! affects the others.

use std::io::ErrorKind;
use std::path::Path;

use herald_core::RequirementsBundle;
use herald_core::requirements::{
    AssetManifest, ContentContext, TechnicalRequirements, TemplateRequirements, parse_requirement,
};
use serde::de::DeserializeOwned;

use crate::error::ToolError;
use crate::paths::CampaignPaths;

/// Load the campaign's requirement bundle.
pub async fn load_requirements(paths: &CampaignPaths) -> RequirementsBundle {
    let design_brief = paths.design_brief();
    let technical_spec = paths.technical_spec();
    let asset_manifest = paths.asset_manifest();
    let email_content = paths.email_content();
    let (template, technical, assets, content) = tokio::join!(
        load_or_default::<TemplateRequirements>(&design_brief),
        load_or_default::<TechnicalRequirements>(&technical_spec),
        load_or_default::<AssetManifest>(&asset_manifest),
        load_or_default::<ContentContext>(&email_content),
    );
    RequirementsBundle {
        template,
        technical,
        assets,
        content,
    }
}

/// Read the campaign HTML template.
///
/// # Errors
///
/// Returns [`ToolError::TemplateNotFound`] if the file does not exist and
/// [`ToolError::Io`] if it cannot be read.
pub async fn load_template(paths: &CampaignPaths) -> Result<String, ToolError> {
    let path = paths.html_template();
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => ToolError::TemplateNotFound { path: path.clone() },
            _ => ToolError::io(&path, source),
        })
}

async fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path).await {
        Ok(value) => value,
        Err(ToolError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "requirement file absent, using defaults");
            T::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), %e, "requirement file unusable, using defaults");
            T::default()
        }
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ToolError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ToolError::io(path, source))?;
    let file = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().into_owned());
    Ok(parse_requirement(&file, &text)?)
}
