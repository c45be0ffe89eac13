//! Prompt construction for the enhancement call.

use herald_core::requirements::BrandColors;
use herald_llm::CompletionRequest;

use crate::diagnostics::CampaignDiagnostics;

const SYSTEM: &str = "You are a senior email developer. You repair CSS in production \
email templates without changing their content. You answer with a complete HTML \
document and nothing else.";

/// CSS problems the model is asked to fix.
pub const CSS_DEFECTS: [&str; 6] = [
    "declarations missing a trailing semicolon or a unit (`width: 600` instead of `width: 600px`)",
    "`display: flex` or `display: grid` layouts that email clients drop; rebuild them with tables",
    "`position: absolute` or `position: fixed`, which most clients ignore",
    "fixed widths wider than 600px",
    "duplicate `style` attributes on the same element",
    "`<link rel=\"stylesheet\">` references; inline or embed those rules instead",
];

/// The only additions the model may make.
pub const ALLOWED_DECORATIONS: [&str; 5] = [
    "a `@media (prefers-color-scheme: dark)` block",
    "a `@media (max-width: 600px)` block for mobile clients",
    "`border-radius` on buttons and cards",
    "`alt` attributes on images that lack them",
    "a few fitting emoji in headings",
];

/// Build the enhancement request for `html`.
#[must_use]
pub fn build_request(
    html: &str,
    diagnostics: &CampaignDiagnostics,
    brand_colors: &BrandColors,
) -> CompletionRequest {
    let colors = if brand_colors.is_empty() {
        String::from("(none specified)")
    } else {
        brand_colors.iter().collect::<Vec<_>>().join(", ")
    };

    let mut prompt = String::with_capacity(html.len() + 2048);
    prompt.push_str("Improve the email template below.\n\n");
    prompt.push_str("Campaign:\n");
    prompt.push_str(&format!("- Subject: {}\n", diagnostics.subject));
    prompt.push_str(&format!("- Destination: {}\n", diagnostics.destination));
    prompt.push_str(&format!(
        "- Price: {} {}\n",
        diagnostics.price, diagnostics.currency
    ));
    prompt.push_str(&format!("- Brand colors: {colors}\n\n"));

    prompt.push_str("Preserve exactly:\n");
    prompt.push_str("- every piece of visible text, word for word\n");
    prompt.push_str("- every link and its href\n");
    prompt.push_str("- every image and its src\n");
    prompt.push_str("- the <html>, <head>, <title>, and <body> structure and all meta tags\n\n");

    prompt.push_str("Fix these CSS defects wherever they occur:\n");
    for defect in CSS_DEFECTS {
        prompt.push_str(&format!("- {defect}\n"));
    }
    prompt.push_str("\nYou may add only:\n");
    for decoration in ALLOWED_DECORATIONS {
        prompt.push_str(&format!("- {decoration}\n"));
    }

    prompt.push_str(
        "\nReturn the full HTML document only, without Markdown fences or commentary.\n\n",
    );
    prompt.push_str("Template:\n");
    prompt.push_str(html);
    prompt.push('\n');

    CompletionRequest::new(prompt).with_system(SYSTEM)
}
