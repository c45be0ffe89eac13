//! Structural validator.
//!
//! Six independent checks run against the same HTML string. No check reads
//! another's output; the aggregate is their concatenation in a fixed order.

mod accessibility;
mod assets;
mod compatibility;
mod content;
mod technical;
mod template;

use herald_core::{RequirementsBundle, ValidationError, ValidationResult, ValidationWarning};

/// Errors and warnings produced by a single check.
#[derive(Debug, Default)]
pub struct CheckOutput {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl CheckOutput {
    fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// Validate `html` against `requirements`.
///
/// Pure: the same inputs always produce the same result. Warnings never
/// affect [`ValidationResult::is_valid`].
#[must_use]
pub fn validate(html: &str, requirements: &RequirementsBundle) -> ValidationResult {
    let outputs = [
        template::check(html, &requirements.template),
        technical::check(html, &requirements.technical),
        assets::check(html, &requirements.assets),
        content::check(html, &requirements.content),
        compatibility::check(html),
        accessibility::check(html),
    ];

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for output in outputs {
        errors.extend(output.errors);
        warnings.extend(output.warnings);
    }

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "structural validation finished"
    );
    ValidationResult::from_parts(errors, warnings)
}
