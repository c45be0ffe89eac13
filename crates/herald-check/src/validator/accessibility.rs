use herald_core::{ValidationWarning, WarningType};

use super::CheckOutput;
use crate::html;

/// Alt text and heading structure. Warnings only.
pub fn check(html: &str) -> CheckOutput {
    let mut out = CheckOutput::default();

    for tag in html::img_tags(html) {
        if !html::tag_has_alt(tag) {
            let suggestion = html::tag_src(tag).map_or_else(
                || String::from("Add descriptive alt text"),
                |src| format!("Add descriptive alt text to {src}"),
            );
            out.warning(
                ValidationWarning::new(WarningType::Accessibility, "Image missing alt attribute")
                    .with_suggestion(suggestion),
            );
        }
    }

    if !html::has_h1(html) {
        out.warning(
            ValidationWarning::new(WarningType::Accessibility, "Missing <h1> heading")
                .with_suggestion("Mark the main headline up as <h1>"),
        );
    }

    out
}
