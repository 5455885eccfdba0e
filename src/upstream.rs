//! Gemini `generateContent` client.
//!
//! One POST per relay request. The HTTP client is built once with the
//! configured timeout; expiry surfaces as `UpstreamError::Timeout` rather
//! than an indefinite stall or a generic transport error.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::ServiceConfig;

/// Failures of the outbound model call.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("model request timed out after {0}s")]
    Timeout(u64),
    #[error("error querying model: {0}")]
    Http(#[from] reqwest::Error),
    /// The reply parsed as JSON but had no top-level `candidates` list.
    /// Carries the raw body so the caller can surface it for diagnosis.
    #[error("invalid response from model: {body}")]
    MissingCandidates { body: String },
    /// `candidates` was present but held no text part.
    #[error("model reply contained no text parts")]
    EmptyReply,
}

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Shared client for the generateContent endpoint.
pub struct ModelClient {
    http: reqwest::Client,
    url: String,
    timeout_secs: u64,
}

impl ModelClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.generate_url(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Send one prompt and return the model's raw reply text.
    ///
    /// A non-2xx status is not rejected outright: error bodies are JSON
    /// without a `candidates` list and fall out as `MissingCandidates`,
    /// which keeps the upstream's own diagnostic in the detail message.
    pub async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(prompt_len = prompt.len(), "calling generateContent");
        let resp = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let body: Value = resp.json().await.map_err(|e| self.classify(e))?;
        if body.get("candidates").is_none() {
            return Err(UpstreamError::MissingCandidates {
                body: body.to_string(),
            });
        }

        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(UpstreamError::EmptyReply)
    }

    fn classify(&self, e: reqwest::Error) -> UpstreamError {
        if e.is_timeout() {
            UpstreamError::Timeout(self.timeout_secs)
        } else {
            UpstreamError::Http(e)
        }
    }
}
