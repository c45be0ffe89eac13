use herald_core::requirements::ContentContext;
use herald_core::{ErrorType, Severity, ValidationError};

use super::CheckOutput;

/// Subject, preheader, and CTA copy must appear verbatim.
pub fn check(html: &str, content: &ContentContext) -> CheckOutput {
    let mut out = CheckOutput::default();

    let expectations = [
        ("Subject line", content.subject(), Severity::Major),
        ("Preheader text", content.preheader(), Severity::Minor),
        ("CTA text", content.cta_text(), Severity::Major),
    ];

    for (label, text, severity) in expectations {
        let Some(text) = text else { continue };
        if !html.contains(text) {
            out.error(
                ValidationError::new(
                    ErrorType::Template,
                    severity,
                    format!("{label} not found in template: \"{text}\""),
                )
                .with_suggestion(format!("Include the {} from email-content.json", label.to_lowercase())),
            );
        }
    }

    out
}
