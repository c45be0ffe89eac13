//! Errors raised while interpreting campaign inputs.
//!
//! Domain-specific errors (e.g., `LlmError`, `ToolError`) are defined in
//! their respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A requirement file could not be interpreted.
    #[error("Invalid requirements in {file}: {reason}")]
    InvalidRequirements { file: String, reason: String },
}
