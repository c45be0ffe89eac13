use std::fmt;

use serde::{Deserialize, Serialize};

/// A JSON value that may arrive as either a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Call to action, either a bare label or a detailed object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallToAction {
    Text(String),
    Detailed {
        #[serde(default, alias = "primary", alias = "label")]
        text: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl CallToAction {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Detailed { text, .. } => text.as_deref(),
        }
        .map(str::trim)
        .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    #[serde(alias = "best_price")]
    pub best_price: Option<Scalar>,
    pub price: Option<Scalar>,
    pub currency: Option<String>,
}

/// Older content files nest campaign facts under `context`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedContext {
    pub destination: Option<String>,
}

/// Generated copy from `content/email-content.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentContext {
    #[serde(alias = "subject_line", alias = "subjectLine")]
    pub subject: Option<String>,
    #[serde(alias = "pre_header", alias = "preHeader")]
    pub preheader: Option<String>,
    pub cta: Option<CallToAction>,
    pub body: Option<String>,
    pub destination: Option<String>,
    pub pricing: Option<Pricing>,
    pub context: Option<NestedContext>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl ContentContext {
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        non_empty(self.subject.as_ref())
    }

    #[must_use]
    pub fn preheader(&self) -> Option<&str> {
        non_empty(self.preheader.as_ref())
    }

    #[must_use]
    pub fn cta_text(&self) -> Option<&str> {
        self.cta.as_ref().and_then(CallToAction::text)
    }

    /// Top-level destination, then the nested `context.destination`.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        non_empty(self.destination.as_ref()).or_else(|| {
            self.context
                .as_ref()
                .and_then(|c| non_empty(c.destination.as_ref()))
        })
    }

    /// Best price, then plain price.
    #[must_use]
    pub fn price(&self) -> Option<&Scalar> {
        self.pricing
            .as_ref()
            .and_then(|p| p.best_price.as_ref().or(p.price.as_ref()))
    }

    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.pricing
            .as_ref()
            .and_then(|p| non_empty(p.currency.as_ref()))
    }
}
