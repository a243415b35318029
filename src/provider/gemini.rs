//! Gemini generateContent client.
//!
//! Calls: POST {api_base}/v1beta/models/{model}:generateContent

use std::time::Duration;

use serde_json::{json, Value};

use super::ProviderError;
use crate::config::Config;
use crate::postprocess::ResponseValue;

/// Thin wrapper around a shared HTTP client for the generation endpoint.
pub struct GenerationClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    timeout: Duration,
    temperature: f64,
}

impl GenerationClient {
    /// Create a new client from the service configuration.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("docsmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: config.request_timeout,
            temperature: config.temperature,
        }
    }

    /// Send one prompt-completion request and return the candidate content.
    pub async fn generate(&self, prompt: &str) -> Result<ResponseValue, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": self.temperature },
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let payload: Value = response.json().await.map_err(classify_transport_error)?;

        if !status.is_success() {
            let message = payload
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("unknown provider error")
                .to_string();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        candidate_content(&payload).ok_or(ProviderError::NoContent)
    }
}

fn classify_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(error)
    }
}

/// Pull the generated content out of a generateContent response body.
///
/// The current REST shape nests text parts under `candidates[0].content.parts`;
/// older surfaces returned the `content` value directly. Either is handed to
/// the extraction union as-is.
fn candidate_content(body: &Value) -> Option<ResponseValue> {
    if let Some(parts) = body.pointer("/candidates/0/content/parts") {
        return Some(ResponseValue::from(parts.clone()));
    }
    match body.pointer("/candidates/0/content") {
        Some(content) if !content.is_null() => Some(ResponseValue::from(content.clone())),
        _ => None,
    }
}
