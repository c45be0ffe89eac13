use serde::{Deserialize, Serialize};

fn default_doctype() -> String {
    String::from("<!DOCTYPE html>")
}

/// Default maximum email width in pixels.
const fn default_max_width() -> u32 {
    600
}

/// Gmail clips messages above roughly 102 KB.
const fn default_max_file_size() -> usize {
    102_400
}

fn default_meta_tags() -> Vec<String> {
    vec![
        String::from("<meta charset"),
        String::from("name=\"viewport\""),
    ]
}

/// Hard limits from `docs/specifications/technical-specification.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalRequirements {
    #[serde(default = "default_doctype", alias = "required_doctype")]
    pub required_doctype: String,

    #[serde(default = "default_max_width", alias = "max_width")]
    pub max_width: u32,

    /// Upper bound on `html.len()`.
    #[serde(default = "default_max_file_size", alias = "max_file_size")]
    pub max_file_size: usize,

    /// Substrings that must each appear somewhere in the document.
    #[serde(default = "default_meta_tags", alias = "required_meta_tags")]
    pub required_meta_tags: Vec<String>,
}

impl Default for TechnicalRequirements {
    fn default() -> Self {
        Self {
            required_doctype: default_doctype(),
            max_width: default_max_width(),
            max_file_size: default_max_file_size(),
            required_meta_tags: default_meta_tags(),
        }
    }
}
