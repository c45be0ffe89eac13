use std::sync::LazyLock;

use herald_core::{ValidationWarning, WarningType};
use regex::Regex;

use super::CheckOutput;
use crate::html;

static FLEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)flexbox|display\s*:\s*(?:inline-)?flex\b").expect("static pattern should compile")
});
static GRID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display\s*:\s*(?:inline-)?grid\b|grid-template").expect("static pattern should compile")
});
static EXTERNAL_STYLESHEET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link\b[^>]*\brel\s*=\s*["']?stylesheet"#).expect("static pattern should compile")
});

/// Email-client compatibility risks. Warnings only.
pub fn check(html: &str) -> CheckOutput {
    let mut out = CheckOutput::default();

    if FLEX.is_match(html) {
        out.warning(
            ValidationWarning::new(
                WarningType::Compatibility,
                "Flexbox layout is not supported by many email clients",
            )
            .with_suggestion("Use table-based layout instead of display: flex"),
        );
    }
    if GRID.is_match(html) {
        out.warning(
            ValidationWarning::new(
                WarningType::Compatibility,
                "CSS Grid layout is not supported by many email clients",
            )
            .with_suggestion("Use nested tables instead of display: grid"),
        );
    }
    if EXTERNAL_STYLESHEET.is_match(html) {
        out.warning(
            ValidationWarning::new(
                WarningType::Compatibility,
                "External stylesheets are stripped by most email clients",
            )
            .with_suggestion("Inline the CSS or move it into a <style> block"),
        );
    }
    if !html::has_media_query(html) {
        out.warning(
            ValidationWarning::new(WarningType::Responsive, "No responsive media queries found")
                .with_suggestion("Add an @media (max-width: 600px) block for mobile clients"),
        );
    }

    out
}
