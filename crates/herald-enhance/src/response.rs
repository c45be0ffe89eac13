//! Post-processing of raw model output.

/// Unwrap a Markdown code fence (```` ```html ... ``` ````) if the whole
/// response is one; otherwise return the response unchanged.
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    let Some(rest) = raw.trim().strip_prefix("```") else {
        return raw.to_string();
    };
    // Drop the info string (`html`, `xml`, ...) on the opening line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
        .to_string()
}
