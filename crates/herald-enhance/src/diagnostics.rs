//! Campaign facts quoted in the prompt and in logs.

use herald_core::requirements::ContentContext;

pub const UNKNOWN_SUBJECT: &str = "Без темы";
pub const UNKNOWN_DESTINATION: &str = "Не указано";
pub const UNKNOWN_PRICE: &str = "Не указана";
pub const DEFAULT_CURRENCY: &str = "RUB";

/// Subject, destination, and price with placeholders for anything absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDiagnostics {
    pub subject: String,
    pub destination: String,
    pub price: String,
    pub currency: String,
}

impl CampaignDiagnostics {
    /// Never fails; missing fields become placeholder strings.
    #[must_use]
    pub fn from_content(content: &ContentContext) -> Self {
        Self {
            subject: content.subject().unwrap_or(UNKNOWN_SUBJECT).to_string(),
            destination: content
                .destination()
                .unwrap_or(UNKNOWN_DESTINATION)
                .to_string(),
            price: content
                .price()
                .map_or_else(|| UNKNOWN_PRICE.to_string(), ToString::to_string),
            currency: content.currency().unwrap_or(DEFAULT_CURRENCY).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::requirements::{NestedContext, Pricing, Scalar};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_content_uses_placeholders() {
        let diagnostics = CampaignDiagnostics::from_content(&ContentContext::default());
        assert_eq!(
            diagnostics,
            CampaignDiagnostics {
                subject: UNKNOWN_SUBJECT.into(),
                destination: UNKNOWN_DESTINATION.into(),
                price: UNKNOWN_PRICE.into(),
                currency: DEFAULT_CURRENCY.into(),
            }
        );
    }

    #[test]
    fn layered_fields_are_used() {
        let content = ContentContext {
            subject: Some("Сочи зовёт".into()),
            context: Some(NestedContext {
                destination: Some("Сочи".into()),
            }),
            pricing: Some(Pricing {
                best_price: None,
                price: Some(Scalar::Number(9900.0)),
                currency: Some("EUR".into()),
            }),
            ..ContentContext::default()
        };
        let diagnostics = CampaignDiagnostics::from_content(&content);
        assert_eq!(diagnostics.subject, "Сочи зовёт");
        assert_eq!(diagnostics.destination, "Сочи");
        assert_eq!(diagnostics.price, "9900");
        assert_eq!(diagnostics.currency, "EUR");
    }
}
