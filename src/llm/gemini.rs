//! Gemini `generateContent` client.
//!
//! One user-role content per request, no system instruction, no history.
//! Wire shaping (`build_request`) and parsing (`parse_response`) are pure so
//! they are tested without a network.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::types::{Completion, LlmChat, LlmError, Prompt};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from `GEMINI_API_KEY` and the optional `LLM_*` settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, model: config.model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for GeminiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(prompt))
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body });
        }

        parse_response(&body, &self.model)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [UserContent<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct UserContent<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: UsageMetadata,
    model_version: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

fn build_request(prompt: &Prompt) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: [UserContent { role: "user", parts: [TextPart { text: &prompt.text }] }],
        generation_config: GenerationConfig { max_output_tokens: prompt.max_output_tokens },
    }
}

/// Join the text parts of the first candidate. No candidate at all (a
/// blocked prompt) is not an error here; the caller sees empty text.
fn parse_response(json: &str, requested_model: &str) -> Result<Completion, LlmError> {
    let api: GenerateResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let (text, finish_reason) = match api.candidates.into_iter().next() {
        Some(candidate) => {
            let text = candidate
                .content
                .map(|c| c.parts)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>();
            (text, candidate.finish_reason)
        }
        None => (String::new(), None),
    };

    Ok(Completion {
        text,
        model: api
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
        finish_reason,
        prompt_tokens: api.usage_metadata.prompt_token_count,
        output_tokens: api.usage_metadata.candidates_token_count,
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
