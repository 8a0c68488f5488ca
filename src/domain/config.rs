//! Report configuration loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Settings for the remote chat-completion endpoint.
///
/// Every field has a hardcoded default; a TOML config file may override any
/// of them.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionApiConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("default endpoint URL")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    30
}

/// Top-level diagville configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Smallest accepted population value.
    #[serde(default = "default_min_population")]
    pub min_population: u64,
    /// Remote endpoint settings.
    #[serde(default)]
    pub api: CompletionApiConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { min_population: default_min_population(), api: CompletionApiConfig::default() }
    }
}

fn default_min_population() -> u64 {
    1000
}

impl ReportConfig {
    /// Load from a TOML file. A named-but-missing file is an error;
    /// callers that have no file use `ReportConfig::default()`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            AppError::config_error(format!("Malformed config {}: {}", path.display(), e))
        })
    }
}
