//! Generation types shared by the coach and the Gemini client.
//!
//! The coach sends one self-contained prompt per turn and reads back plain
//! text, so a request is just the prompt and an output cap.

use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The API key variable is unset or blank.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Transport failure before a status was received.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    #[error("API response parse failed: {0}")]
    ApiParse(String),
}

impl ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
        }
    }
}

/// A coaching prompt, already wrapped in the topic template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub max_output_tokens: u32,
}

/// Generated answer plus the usage numbers worth logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Completion {
    /// Joined text parts of the first candidate. Empty when the model
    /// returned nothing usable, for example a blocked prompt.
    pub text: String,
    pub model: String,
    pub finish_reason: Option<String>,
    pub prompt_tokens: u64,
    pub output_tokens: u64,
}

/// Text generation seam. The chat service holds a trait object so tests can
/// substitute a scripted model.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Generate an answer for one prompt.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] when the request fails or the body is malformed.
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
