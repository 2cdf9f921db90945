//! Gemini settings parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Read the Gemini settings.
    ///
    /// - `LLM_API_KEY_ENV`: names the variable holding the key, default `GEMINI_API_KEY`
    /// - `LLM_MODEL`: default `gemini-1.5-flash`
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 120
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// [`LlmError::MissingApiKey`] when the key variable is unset or blank.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LlmConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// [`LlmError::MissingApiKey`] when the key variable is unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let key_var = lookup("LLM_API_KEY_ENV").unwrap_or_else(|| DEFAULT_API_KEY_VAR.to_string());
        let api_key = lookup(&key_var)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(LlmError::MissingApiKey { var: key_var })?;

        let model = lookup("LLM_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeouts = LlmTimeouts {
            request_secs: parse_u64(lookup("LLM_REQUEST_TIMEOUT_SECS"), DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("LLM_CONNECT_TIMEOUT_SECS"), DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_key, model, timeouts })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
