use herald_core::requirements::TemplateRequirements;
use herald_core::{ErrorType, Severity, ValidationError};

use super::CheckOutput;

/// Expected elements and brand colours from the design brief.
pub fn check(html: &str, template: &TemplateRequirements) -> CheckOutput {
    let mut out = CheckOutput::default();

    for element in &template.expected_elements {
        let selector = element.selector.as_deref().filter(|s| !s.is_empty());
        let content = element.content.as_deref().filter(|c| !c.is_empty());
        if selector.is_none() && content.is_none() {
            continue;
        }
        let found = selector.is_some_and(|s| html.contains(s))
            || content.is_some_and(|c| html.contains(c));
        if !found {
            let mut error = ValidationError::new(
                ErrorType::Structure,
                Severity::Major,
                format!("Expected element missing: {}", element.label()),
            );
            if let Some(selector) = selector {
                error = error.with_location(selector);
            }
            out.error(error.with_suggestion(
                "Add the element described in the design brief to the template",
            ));
        }
    }

    for color in template.brand_colors.iter() {
        if !html.contains(color) {
            out.error(
                ValidationError::new(
                    ErrorType::Template,
                    Severity::Minor,
                    format!("Brand color missing: {color}"),
                )
                .with_suggestion(format!("Use {color} in headings, buttons, or accents")),
            );
        }
    }

    out
}
