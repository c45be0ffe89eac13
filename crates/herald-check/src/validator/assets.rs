use herald_core::requirements::AssetManifest;
use herald_core::{ErrorType, Severity, ValidationError};

use super::CheckOutput;
use crate::html;

/// Required assets must be referenced; local image sources must be known.
pub fn check(html: &str, manifest: &AssetManifest) -> CheckOutput {
    let mut out = CheckOutput::default();

    for asset in manifest.entries().filter(|a| a.is_required()) {
        let name = asset.file_name();
        let path = asset.path.as_deref().filter(|p| !p.is_empty());
        if name.is_none() && path.is_none() {
            continue;
        }
        let referenced =
            name.is_some_and(|n| html.contains(n)) || path.is_some_and(|p| html.contains(p));
        if !referenced {
            let label = name.or(path).unwrap_or_default();
            out.error(
                ValidationError::new(
                    ErrorType::Asset,
                    Severity::Major,
                    format!("Required asset not used in template: {label}"),
                )
                .with_suggestion("Reference the hero/required image from the asset manifest"),
            );
        }
    }

    for src in html::img_sources(html) {
        if src.is_empty() || html::is_external_src(src) || html::is_local_absolute_path(src) {
            continue;
        }
        if !manifest.entries().any(|a| a.matches_src(src)) {
            out.error(
                ValidationError::new(
                    ErrorType::Asset,
                    Severity::Minor,
                    format!("Image source not found in asset manifest: {src}"),
                )
                .with_location(src),
            );
        }
    }

    out
}
