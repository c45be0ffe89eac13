//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use herald_config::LlmConfig;
use serde::{Deserialize, Serialize};

use crate::{CompletionClient, CompletionRequest, error::LlmError, http::check_response};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    /// Build a client from configuration.
    ///
    /// A missing API key does not fail here; every [`CompletionClient::complete`]
    /// call then returns [`LlmError::NotConfigured`].
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        if !config.is_configured() {
            tracing::warn!("no LLM API key configured, enhancement will keep originals");
        }
        let http = reqwest::Client::builder()
            .user_agent("herald/0.1")
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.is_configured().then(|| config.api_key.clone()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });
        ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// First choice's text; blank or missing content is an error.
fn first_choice_text(response: ChatResponse, model: &str) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| LlmError::EmptyResponse {
            model: model.to_string(),
        })
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        tracing::debug!(model = %self.model, prompt_len = request.prompt.len(), "requesting completion");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&self.body(request))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let text = resp.text().await?;
        let data: ChatResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::Parse(e.to_string()))?;
        let content = first_choice_text(data, &self.model)?;
        tracing::debug!(model = %self.model, response_len = content.len(), "completion received");
        Ok(content)
    }
}
