//! Gemini `generateContent` client and wire types.
//!
//! One call per analysis: the full prompt goes out, the full report comes
//! back. No retries and no streaming; a failed call is reported to the
//! caller as an [`ApiError`] and the session decides what to do with it.

use std::time::Instant;

use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::constants::urls;

/// Failure classes surfaced by a Gemini call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("quota or rate limit exhausted: {0}")]
    Quota(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("service error: {0}")]
    Service(String),
}

/// Minimal client for the Gemini REST API.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    model: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, urls::GEMINI_API_BASE.to_string())
    }

    /// Point the client at a different API base, e.g. a local stub.
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> Result<Url, ApiError> {
        let model = if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        };
        let url = format!("{}/{}:generateContent", self.base_url, model);
        Url::parse(&url).map_err(|err| ApiError::InvalidRequest(format!("bad endpoint URL: {err}")))
    }

    /// Issue one `generateContent` call.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError> {
        let url = self.endpoint()?;
        let started = Instant::now();

        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|err| ApiError::Network(format!("request to Gemini API failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| ApiError::Service(format!("invalid Gemini response JSON: {err}")))?;

        tracing::debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generateContent completed"
        );

        Ok(parsed)
    }

    /// One analysis round trip: prompt in, report markdown out.
    pub async fn generate_analysis(&self, prompt: &str) -> Result<String, ApiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: None,
        };
        let response = self.generate_content(&request).await?;
        response
            .first_text()
            .ok_or_else(|| ApiError::Service("no candidates in Gemini response".to_string()))
    }
}

fn classify_failure(status: StatusCode, body: &str) -> ApiError {
    let detail = format!("Gemini API error: {status} - {body}");
    match status.as_u16() {
        401 | 403 => ApiError::Authentication(detail),
        400 => ApiError::InvalidRequest(detail),
        429 => ApiError::Quota(detail),
        _ if body.contains("insufficient_quota")
            || body.contains("quota")
            || body.contains("rate limit") =>
        {
            ApiError::Quota(detail)
        }
        _ => ApiError::Service(detail),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback", default)]
    pub prompt_feedback: Option<Value>,
    #[serde(rename = "usageMetadata", default)]
    pub usage_metadata: Option<Value>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let mut out = String::new();
        for part in &candidate.content.parts {
            out.push_str(&part.text);
        }
        Some(out)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub content: Content,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}
