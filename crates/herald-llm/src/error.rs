//! LLM client error types.

use thiserror::Error;

/// Errors that can occur when requesting a completion.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response carried no usable text.
    #[error("empty response from model {model}")]
    EmptyResponse { model: String },

    /// Failed to parse the API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key is configured.
    #[error("LLM is not configured: set OPENAI_API_KEY or HERALD_LLM__API_KEY")]
    NotConfigured,
}
