//! Thin wrapper around the Gemini `generateContent` REST endpoint.
//!
//! Generation parameters are fixed: the response format is pinned to JSON so
//! the output can be parsed against the slide-content schema, and the call is
//! bounded by a 60-second timeout. No validation of the returned text happens
//! here — parsing and handling malformed output is the caller's job.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppError;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

/// Fixed sampling parameters for every deck-content call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "application/json".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the Gemini generative-model API. Cheap to clone; built once at
/// startup so a bad TLS stack or config fails fast.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(GeminiClient {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        })
    }

    /// Send a prompt and return the model's response text.
    ///
    /// The response is expected — but not guaranteed — to be valid JSON
    /// matching the advertised schema. Network failures, timeouts, non-2xx
    /// statuses and empty candidate lists all surface as
    /// [`AppError::Generation`].
    pub async fn generate_json(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "model API returned {status}: {detail}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::Generation("model returned no candidates".to_string()))
    }
}
