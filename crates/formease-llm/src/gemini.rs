//! Gemini Provider Implementation
//!
//! Integration with Google's Generative Language API, the backend the
//! extraction contract was written against. The document travels as an
//! inline-data part (MIME type + base64 body) alongside the instruction
//! text, and the response is requested in JSON mode.
//!
//! # Examples
//!
//! ```no_run
//! use formease_llm::GeminiProvider;
//!
//! // Create a provider with the credential from GEMINI_API_KEY
//! let provider = GeminiProvider::from_env("gemini-2.0-flash").unwrap();
//!
//! // Note: the generate method is async; the ExtractionBackend impl wraps
//! // it for callers on the sync trait seam
//! ```

use crate::LlmError;
use formease_domain::traits::ExtractionBackend;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default timeout for backend requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API provider
///
/// One HTTP round trip per submission; no internal retries. Retry policy
/// belongs to the caller.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
enum Part {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "inlineData")]
    InlineData(InlineData),
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API endpoint (e.g., "https://generativelanguage.googleapis.com")
    /// - `model`: Model to use (e.g., "gemini-2.0-flash")
    /// - `api_key`: API credential
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a provider with the credential from the process environment
    ///
    /// Reads `GEMINI_API_KEY`. An absent or empty variable is a
    /// construction-time error; nothing is retried or prompted for.
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingCredentials(API_KEY_ENV))?;

        Ok(Self::new(DEFAULT_ENDPOINT, model, api_key))
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submit an instruction and an encoded document, returning the raw
    /// model text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the service is unreachable or times out
    /// - the credential is rejected (HTTP 401/403)
    /// - the model does not exist (HTTP 404)
    /// - the rate limit is exceeded (HTTP 429)
    /// - the response shape is not recognisable
    pub async fn generate(
        &self,
        instruction: &str,
        media_type: &str,
        document_b64: &str,
    ) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text(instruction.to_string()),
                    Part::InlineData(InlineData {
                        mime_type: media_type.to_string(),
                        data: document_b64.to_string(),
                    }),
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let body: GenerateContentResponse = response.json().await.map_err(|e| {
                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;

            let text = body
                .candidates
                .first()
                .map(|c| {
                    c.content
                        .parts
                        .iter()
                        .map(|p| p.text.as_str())
                        .collect::<String>()
                })
                .unwrap_or_default();

            if text.is_empty() {
                return Err(LlmError::InvalidResponse(
                    "Response contained no candidate text".to_string(),
                ));
            }
            Ok(text)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    Err(LlmError::Unauthorized(error_text))
                }
                reqwest::StatusCode::NOT_FOUND => {
                    Err(LlmError::ModelNotAvailable(self.model.clone()))
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimitExceeded),
                _ => Err(LlmError::Communication(format!(
                    "HTTP {}: {}",
                    status, error_text
                ))),
            }
        }
    }
}

impl ExtractionBackend for GeminiProvider {
    type Error = LlmError;

    fn submit(
        &self,
        instruction: &str,
        media_type: &str,
        document_b64: &str,
    ) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate(instruction, media_type, document_b64).await })
    }
}
