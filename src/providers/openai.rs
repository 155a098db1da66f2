//! OpenAI-compatible provider implementation
//!
//! This module implements the Provider trait against the OpenAI chat
//! completions API (or any server speaking the same protocol, which is
//! what the integration tests point it at).

use crate::config::OpenAiConfig;
use crate::error::{Result, WayfarerError};
use crate::providers::{CompletionRequest, CompletionResponse, Message, Provider, TokenUsage};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API base when none is configured
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI chat completions provider
///
/// Sends a single non-streaming chat completion request per call. The
/// API key is resolved at construction time, either from the config or
/// from the environment variable the config names.
///
/// # Examples
///
/// ```no_run
/// use wayfarer::config::OpenAiConfig;
/// use wayfarer::providers::{OpenAiProvider, Provider};
///
/// let config = OpenAiConfig {
///     api_key: Some("sk-test".to_string()),
///     ..Default::default()
/// };
/// let provider = OpenAiProvider::new(config);
/// assert!(provider.is_ok());
/// ```
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
    api_key: String,
}

/// Request structure for the chat completions API
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
}

/// Message structure for the chat completions API
#[derive(Debug, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    #[serde(default)]
    content: String,
}

/// Response structure from the chat completions API
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
}

/// Choice in a chat completions response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

/// Token usage block in a chat completions response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(default)]
    prompt_tokens: usize,
    #[serde(default)]
    completion_tokens: usize,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider instance
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::MissingCredentials` if no API key is set in
    /// the config or the configured environment variable, or
    /// `WayfarerError::Provider` if HTTP client initialization fails.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = match &config.api_key {
            Some(key) => key.clone(),
            None => std::env::var(&config.api_key_env)
                .map_err(|_| WayfarerError::MissingCredentials("openai".to_string()))?,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("wayfarer/0.2.0")
            .build()
            .map_err(|e| WayfarerError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized OpenAI provider: base={}, model={}",
            config.api_base.as_deref().unwrap_or(DEFAULT_API_BASE),
            config.model
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Endpoint URL for chat completions
    fn completions_url(&self) -> String {
        let base = self
            .config
            .api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/');
        format!("{}/chat/completions", base)
    }

    /// Convert planner messages to wire format
    fn convert_messages(&self, messages: &[Message]) -> Vec<OpenAiMessage> {
        messages
            .iter()
            .map(|m| OpenAiMessage {
                role: m.role.clone(),
                content: m.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let wire_request = OpenAiRequest {
            model: self.config.model.clone(),
            messages: self.convert_messages(&request.messages),
            temperature: request.temperature,
        };

        tracing::debug!(
            "Sending OpenAI request: {} messages, temperature={}",
            wire_request.messages.len(),
            wire_request.temperature
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI request failed: {}", e);
                WayfarerError::Transport(format!("OpenAI request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI returned error {}: {}", status, error_text);
            return Err(WayfarerError::Provider(format!(
                "OpenAI returned error {}: {}",
                status, error_text
            ))
            .into());
        }

        let wire_response: OpenAiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            WayfarerError::Provider(format!("Failed to parse OpenAI response: {}", e))
        })?;

        let choice = wire_response.choices.into_iter().next().ok_or_else(|| {
            WayfarerError::Provider("OpenAI response contained no choices".to_string())
        })?;

        let usage = wire_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens));

        Ok(CompletionResponse {
            content: choice.message.content,
            usage,
        })
    }
}
