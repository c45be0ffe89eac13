use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An element the design brief expects to find in the template.
///
/// Matched by substring: either the selector or the content must appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedElement {
    pub selector: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
}

impl ExpectedElement {
    /// Human label for error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        self.description
            .as_deref()
            .or(self.selector.as_deref())
            .or(self.content.as_deref())
            .unwrap_or("unnamed element")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BrandColorsRaw {
    List(Vec<String>),
    Named(BTreeMap<String, serde_json::Value>),
}

/// Required brand colours as hex literals (`#4BFF7E`).
///
/// Accepts either a list of strings or an object of named colours; values
/// that are not hex strings are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BrandColorsRaw", into = "Vec<String>")]
pub struct BrandColors(pub Vec<String>);

impl From<BrandColorsRaw> for BrandColors {
    fn from(raw: BrandColorsRaw) -> Self {
        let values: Vec<String> = match raw {
            BrandColorsRaw::List(list) => list,
            BrandColorsRaw::Named(map) => map
                .into_values()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        };
        Self(
            values
                .into_iter()
                .map(|v| v.trim().to_string())
                .filter(|v| v.starts_with('#') && v.len() > 1)
                .collect(),
        )
    }
}

impl From<BrandColors> for Vec<String> {
    fn from(colors: BrandColors) -> Self {
        colors.0
    }
}

impl BrandColors {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Layout expectations from `content/design-brief-from-context.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateRequirements {
    #[serde(alias = "expected_elements")]
    pub expected_elements: Vec<ExpectedElement>,
    #[serde(alias = "brand_colors", alias = "colors")]
    pub brand_colors: BrandColors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn brand_colors_from_named_object() {
        let parsed: TemplateRequirements = serde_json::from_str(
            r##"{"brand_colors": {"primary": "#4BFF7E", "secondary": "#1DA857", "font": 12}}"##,
        )
        .unwrap();
        assert_eq!(parsed.brand_colors.0, vec!["#4BFF7E", "#1DA857"]);
    }

    #[test]
    fn brand_colors_from_list_drops_non_hex() {
        let parsed: TemplateRequirements =
            serde_json::from_str(r##"{"brandColors": ["#fff", "red", " #000000 "]}"##).unwrap();
        assert_eq!(parsed.brand_colors.0, vec!["#fff", "#000000"]);
    }

    #[test]
    fn expected_element_label_prefers_description() {
        let element = ExpectedElement {
            selector: Some(".hero".into()),
            content: None,
            description: Some("Hero block".into()),
        };
        assert_eq!(element.label(), "Hero block");
        assert_eq!(ExpectedElement::default().label(), "unnamed element");
    }
}
