//! Ollama provider implementation
//!
//! This module implements the Provider trait for Ollama, connecting to a
//! local or remote Ollama server to generate completions. Useful for
//! running the planner entirely offline against a local model.

use crate::config::OllamaConfig;
use crate::error::{Result, WayfarerError};
use crate::providers::{CompletionRequest, CompletionResponse, Message, Provider, TokenUsage};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ollama API provider
///
/// Connects to an Ollama server (local or remote) and issues a single
/// non-streaming `/api/chat` request per completion.
///
/// # Examples
///
/// ```no_run
/// use wayfarer::config::OllamaConfig;
/// use wayfarer::providers::OllamaProvider;
///
/// let config = OllamaConfig {
///     host: "http://localhost:11434".to_string(),
///     model: "llama3.2:latest".to_string(),
/// };
/// let provider = OllamaProvider::new(config);
/// assert!(provider.is_ok());
/// ```
pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

/// Request structure for Ollama's /api/chat endpoint
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    options: OllamaOptions,
}

/// Sampling options for Ollama
#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

/// Message structure for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    #[serde(default)]
    content: String,
}

/// Response structure from Ollama's /api/chat endpoint
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
    #[serde(default)]
    prompt_eval_count: usize,
    #[serde(default)]
    eval_count: usize,
}

impl OllamaProvider {
    /// Create a new Ollama provider instance
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::Provider` if HTTP client initialization
    /// fails.
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("wayfarer/0.2.0")
            .build()
            .map_err(|e| WayfarerError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized Ollama provider: host={}, model={}",
            config.host,
            config.model
        );

        Ok(Self { client, config })
    }

    /// Convert planner messages to Ollama format
    fn convert_messages(&self, messages: &[Message]) -> Vec<OllamaMessage> {
        messages
            .iter()
            .map(|m| OllamaMessage {
                role: m.role.clone(),
                content: m.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let wire_request = OllamaRequest {
            model: self.config.model.clone(),
            messages: self.convert_messages(&request.messages),
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
            },
        };

        let url = format!("{}/api/chat", self.config.host);
        tracing::debug!(
            "Sending Ollama request to {}: {} messages",
            url,
            wire_request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Ollama request failed: {}", e);
                WayfarerError::Transport(format!("Failed to connect to Ollama server: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Ollama returned error {}: {}", status, error_text);
            return Err(WayfarerError::Provider(format!(
                "Ollama returned error {}: {}",
                status, error_text
            ))
            .into());
        }

        let wire_response: OllamaResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Ollama response: {}", e);
            WayfarerError::Provider(format!("Failed to parse Ollama response: {}", e))
        })?;

        let usage = TokenUsage::new(wire_response.prompt_eval_count, wire_response.eval_count);

        Ok(CompletionResponse::with_usage(
            wire_response.message.content,
            usage,
        ))
    }
}
