use herald_core::requirements::TechnicalRequirements;
use herald_core::{ErrorType, Severity, ValidationError};

use super::CheckOutput;
use crate::html;

/// DOCTYPE, file size, width limit, and required meta tags.
pub fn check(html: &str, technical: &TechnicalRequirements) -> CheckOutput {
    let mut out = CheckOutput::default();

    if !technical.required_doctype.is_empty() && !html.contains(&technical.required_doctype) {
        out.error(
            ValidationError::new(
                ErrorType::Technical,
                Severity::Critical,
                format!("Missing required DOCTYPE: {}", technical.required_doctype),
            )
            .with_suggestion(format!(
                "Start the document with {}",
                technical.required_doctype
            )),
        );
    }

    if html.len() > technical.max_file_size {
        out.error(
            ValidationError::new(
                ErrorType::Technical,
                Severity::Major,
                format!(
                    "HTML size {} bytes exceeds maximum of {} bytes",
                    html.len(),
                    technical.max_file_size
                ),
            )
            .with_suggestion("Inline less CSS or move content to the landing page"),
        );
    }

    if let Some(widest) = html::width_values(html)
        .into_iter()
        .filter(|w| *w > technical.max_width)
        .max()
    {
        out.error(
            ValidationError::new(
                ErrorType::Technical,
                Severity::Major,
                format!(
                    "Width {widest}px exceeds maximum of {}px",
                    technical.max_width
                ),
            )
            .with_location(format!("width: {widest}"))
            .with_suggestion(format!(
                "Keep fixed widths at or below {}px",
                technical.max_width
            )),
        );
    }

    for tag in &technical.required_meta_tags {
        if !tag.is_empty() && !html.contains(tag.as_str()) {
            out.error(ValidationError::new(
                ErrorType::Technical,
                Severity::Major,
                format!("Missing required meta tag: {tag}"),
            ));
        }
    }

    out
}
