//! LLM endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_model() -> String {
    String::from("gpt-4o-mini")
}

const fn default_temperature() -> f32 {
    0.3
}

const fn default_max_tokens() -> u32 {
    16_000
}

/// Enhancement rewrites whole documents; allow slow responses.
const fn default_timeout_secs() -> u64 {
    180
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// API key. Also read from `OPENAI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of an OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Check the values an endpoint call depends on. A missing API key is
    /// not an error here: the client reports it per call.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a blank `base_url` or
    /// `model`, a `temperature` outside `0.0..=2.0`, or a zero `max_tokens`
    /// or `timeout_secs`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(invalid("llm.base_url", "must not be blank".into()));
        }
        if self.model.trim().is_empty() {
            return Err(invalid("llm.model", "must not be blank".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid(
                "llm.temperature",
                format!("{} is outside 0.0..=2.0", self.temperature),
            ));
        }
        if self.max_tokens == 0 {
            return Err(invalid("llm.max_tokens", "must be positive".into()));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("llm.timeout_secs", "must be positive".into()));
        }
        Ok(())
    }
}

const fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_but_not_configured() {
        let config = LlmConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = LlmConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "llm.temperature",
                ..
            })
        ));
    }

    #[test]
    fn rejects_blank_endpoint_and_zero_limits() {
        for (config, field) in [
            (
                LlmConfig {
                    base_url: "  ".into(),
                    ..Default::default()
                },
                "llm.base_url",
            ),
            (
                LlmConfig {
                    max_tokens: 0,
                    ..Default::default()
                },
                "llm.max_tokens",
            ),
            (
                LlmConfig {
                    timeout_secs: 0,
                    ..Default::default()
                },
                "llm.timeout_secs",
            ),
        ] {
            match config.validate() {
                Err(ConfigError::InvalidValue { field: got, .. }) => assert_eq!(got, field),
                other => panic!("expected InvalidValue for {field}, got {other:?}"),
            }
        }
    }
}
