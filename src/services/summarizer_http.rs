//! Ollama HTTP API summarizer using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, HttpBackendConfig};
use crate::ports::{Summarizer, SummaryRequest};

const BACKEND: &str = "http";

/// HTTP client for an Ollama-compatible `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct HttpSummarizer {
    api_url: Url,
    client: Client,
}

impl HttpSummarizer {
    /// Create a new HTTP summarizer from configuration.
    pub fn new(config: &HttpBackendConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl Summarizer for HttpSummarizer {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    fn summarize(&self, request: &SummaryRequest) -> Result<String, AppError> {
        let body = GenerateRequest {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
            options: GenerateOptions { temperature: request.temperature },
        };

        tracing::debug!(url = %self.api_url, model = %request.model, "posting generate request");

        let response = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| AppError::summarizer(BACKEND, format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::summarizer(
                BACKEND,
                format!("API error ({}): {}", status.as_u16(), error_text.trim()),
            ));
        }

        let generated: GenerateResponse = response.json().map_err(|e| {
            AppError::summarizer(BACKEND, format!("Failed to parse response: {}", e))
        })?;

        if let Some(error) = generated.error {
            return Err(AppError::summarizer(BACKEND, error));
        }

        generated
            .response
            .map(|text| text.trim().to_string())
            .ok_or_else(|| AppError::summarizer(BACKEND, "No response text in reply"))
    }
}
