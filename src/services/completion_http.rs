//! Remote completion backend using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CompletionApiConfig, DiagnosticRequest, GenerationError, prompt};
use crate::ports::{Report, ReportBackend};

/// Chat-completion backend over HTTP.
///
/// One blocking request per generation. No retries, no backoff; a failed
/// call surfaces as a typed [`GenerationError`] for the caller to render.
#[derive(Clone)]
pub struct HttpCompletionBackend {
    api_key: String,
    api_url: Url,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionBackend")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionBackend {
    /// Create a new backend with an explicit credential and configuration.
    pub fn new(api_key: String, config: &CompletionApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env_with_config(config: &CompletionApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| AppError::MissingApiKey)?;
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ReportBackend for HttpCompletionBackend {
    fn generate(&self, request: &DiagnosticRequest) -> Result<Report, GenerationError> {
        let user_prompt = prompt::build(request);
        let api_request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage { role: "system", content: prompt::SYSTEM_MESSAGE },
                ApiMessage { role: "user", content: &user_prompt },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Api { status: status.as_u16(), detail: error_detail(body) });
        }

        let api_response: ApiResponse =
            response.json().map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let body = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyCompletion)?;

        Ok(Report { body })
    }
}

/// Pull the human-readable message out of an OpenAI-style error body,
/// falling back to the raw body when it is not JSON.
fn error_detail(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.pointer("/error/message")?.as_str().map(str::to_string))
        .unwrap_or(body)
}
