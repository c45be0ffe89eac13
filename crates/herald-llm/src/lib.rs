//! # herald-llm
//!
//! LLM completion clients for Herald.
//!
//! The orchestrator talks to models through the [`CompletionClient`] trait so
//! tests can substitute scripted responses. [`OpenAiClient`] implements it
//! against any OpenAI-compatible `chat/completions` endpoint.

mod error;
mod http;
pub mod openai;

pub use error::LlmError;
pub use openai::OpenAiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Optional system instructions.
    pub system: Option<String>,
    /// User prompt.
    pub prompt: String,
}

impl CompletionRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Anything that can turn a prompt into text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Model identifier, for logging and reports.
    fn model(&self) -> &str;

    /// Request a completion.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] on transport failure, non-success status, or an
    /// empty/unparseable response.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
