//! Gemini API client
//!
//! Sends prompts to the generateContent endpoint and unwraps the response
//! envelope down to the generated answer text.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::config::GeminiConfig;

/// Failures from one generation call
///
/// All variants are terminal for the invocation: nothing is retried here,
/// and the caller decides whether to fall back or surface the failure.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The envelope carried no candidates
    #[error("Gemini returned no candidates")]
    EmptyResponse,

    /// HTTP 4xx from the endpoint (malformed request, bad key, quota)
    #[error("Gemini client error: HTTP {status}")]
    Client { status: u16 },

    /// HTTP 5xx from the endpoint
    #[error("Gemini server error: HTTP {status}")]
    Server { status: u16 },

    /// Body was not parseable JSON, or the answer text path was absent
    #[error("Malformed Gemini response envelope: {0}")]
    MalformedEnvelope(String),

    /// Network-level failure (timeout, connection refused, DNS)
    #[error("Gemini transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for generation calls
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Text-generation seam
///
/// The pipeline depends on this trait rather than the concrete client, so
/// tests can substitute a canned generator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate the answer text for a prompt
    async fn generate(&self, prompt: &str) -> GeminiResult<String>;
}

// ============================================================================
// API Request/Response Types
// ============================================================================

/// generateContent request body: {"contents":[{"parts":[{"text": ...}]}]}
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
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

impl<'a> GenerateRequest<'a> {
    fn for_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

/// generateContent response envelope; the answer text lives at
/// candidates[0].content.parts[0].text
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Client for the Gemini generateContent endpoint
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a client with the configured bounded timeout
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Full request URL with the API key as a query parameter
    fn request_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.config.api_base, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        let request = GenerateRequest::for_prompt(prompt);

        debug!(model = %self.config.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if let Some(err) = status_to_error(status) {
            error!(status = %status, "Gemini API returned an error status");
            return Err(err);
        }

        let body = response.text().await?;
        unwrap_envelope(&body)
    }
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("api_base", &self.config.api_base)
            .field("model", &self.config.model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Envelope Handling
// ============================================================================

/// Map a non-success HTTP status to its error kind
fn status_to_error(status: StatusCode) -> Option<GeminiError> {
    if status.is_client_error() {
        Some(GeminiError::Client {
            status: status.as_u16(),
        })
    } else if status.is_server_error() {
        Some(GeminiError::Server {
            status: status.as_u16(),
        })
    } else {
        None
    }
}

/// Unwrap the answer text at candidates[0].content.parts[0].text
fn unwrap_envelope(body: &str) -> GeminiResult<String> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GeminiError::MalformedEnvelope(e.to_string()))?;

    let candidates = match response.candidates {
        Some(candidates) if !candidates.is_empty() => candidates,
        _ => return Err(GeminiError::EmptyResponse),
    };

    candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            GeminiError::MalformedEnvelope(
                "candidates[0].content.parts[0].text is missing".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_envelope_answer_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Energy value: 250 kcal"}]}}]}"#;
        let text = unwrap_envelope(body).unwrap();
        assert_eq!(text, "Energy value: 250 kcal");
    }

    #[test]
    fn test_empty_candidates_array() {
        let result = unwrap_envelope(r#"{"candidates":[]}"#);
        assert!(matches!(result, Err(GeminiError::EmptyResponse)));
    }

    #[test]
    fn test_missing_candidates_field() {
        let result = unwrap_envelope(r#"{"promptFeedback":{}}"#);
        assert!(matches!(result, Err(GeminiError::EmptyResponse)));
    }

    #[test]
    fn test_body_not_json() {
        let result = unwrap_envelope("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(GeminiError::MalformedEnvelope(_))));
    }

    #[test]
    fn test_candidate_without_text_path() {
        let result = unwrap_envelope(r#"{"candidates":[{"content":{"parts":[]}}]}"#);
        assert!(matches!(result, Err(GeminiError::MalformedEnvelope(_))));

        let result = unwrap_envelope(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert!(matches!(result, Err(GeminiError::MalformedEnvelope(_))));
    }

    #[test]
    fn test_client_error_statuses() {
        let err = status_to_error(StatusCode::BAD_REQUEST);
        assert!(matches!(err, Some(GeminiError::Client { status: 400 })));

        let err = status_to_error(StatusCode::TOO_MANY_REQUESTS);
        assert!(matches!(err, Some(GeminiError::Client { status: 429 })));
    }

    #[test]
    fn test_server_error_statuses() {
        // A simulated 500 surfaces as a server error, never a defaulted profile
        let err = status_to_error(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, Some(GeminiError::Server { status: 500 })));

        let err = status_to_error(StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(err, Some(GeminiError::Server { status: 503 })));
    }

    #[test]
    fn test_success_status_maps_to_none() {
        assert!(status_to_error(StatusCode::OK).is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest::for_prompt("describe granola");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents":[{"parts":[{"text":"describe granola"}]}]})
        );
    }
}
