/// LLM Client — the single point of entry for all generative-AI calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All completion requests MUST go through this module.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Default model when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
/// Hard bound on the completion call so a hung provider cannot hang the
/// requesting caller indefinitely.
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no extractable text")]
    EmptyResponse,
}

/// Completion client configuration, constructed once at startup and passed in
/// explicitly. No ambient global state.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// The provider answers in one of two known shapes: a direct text field, or
/// the nested candidates/content/parts structure. Both are modeled explicitly
/// and both are attempted before declaring the response empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CompletionPayload {
    Direct { text: String },
    Structured { candidates: Vec<Candidate> },
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl CompletionPayload {
    /// Extracts the completion text, trying the direct accessor first and the
    /// candidate/part structure second. Returns `None` when neither shape
    /// carries non-blank text.
    pub fn text(&self) -> Option<&str> {
        match self {
            CompletionPayload::Direct { text } => {
                let text = text.trim();
                (!text.is_empty()).then_some(text)
            }
            CompletionPayload::Structured { candidates } => candidates
                .iter()
                .flat_map(|c| c.content.parts.iter())
                .filter_map(|p| p.text.as_deref())
                .map(str::trim)
                .find(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// A text completion provider: prompt in, raw text out.
///
/// The orchestrator depends on this trait rather than on the concrete Gemini
/// client, so failure-path behavior is testable without the network.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Gemini-backed completion client.
///
/// No retries at this layer — the pipeline does not auto-retry; the caller
/// resubmits the action on failure.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            config,
        }
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!(
            "{GEMINI_API_BASE}/{}:generateContent",
            self.config.model
        );

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: CompletionPayload = response.json().await?;

        let text = payload.text().ok_or(LlmError::EmptyResponse)?;
        debug!(
            "Completion call succeeded: model={}, text_len={}",
            self.config.model,
            text.len()
        );

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_from_direct_shape() {
        let json = r#"{"text": "hello from the model"}"#;
        let payload: CompletionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text(), Some("hello from the model"));
    }

    #[test]
    fn test_extracts_text_from_candidate_shape() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "nested answer"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12}
        }"#;
        let payload: CompletionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text(), Some("nested answer"));
    }

    #[test]
    fn test_skips_blank_parts_in_candidate_shape() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "   "}, {"text": "real text"}]}}
            ]
        }"#;
        let payload: CompletionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text(), Some("real text"));
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let json = r#"{"candidates": []}"#;
        let payload: CompletionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text(), None);
    }

    #[test]
    fn test_blank_direct_text_yields_no_text() {
        let json = r#"{"text": "  "}"#;
        let payload: CompletionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text(), None);
    }

    #[test]
    fn test_candidate_with_missing_part_text_yields_no_text() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": null}]}}]}"#;
        let payload: CompletionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text(), None);
    }
}
