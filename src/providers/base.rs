//! Base provider trait and common types
//!
//! This module defines the Provider trait that all language-model
//! providers must implement, along with the message, request, and
//! response structures shared across implementations.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message structure for a completion request
///
/// A message carries a role (system, user, assistant) and its text
/// content. Itinerary generation sends exactly one system message and one
/// user message per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::providers::Message;
    ///
    /// let msg = Message::system("You are a travel planning assistant");
    /// assert_eq!(msg.role, "system");
    /// ```
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::providers::Message;
    ///
    /// let msg = Message::user("Plan three days in Lisbon");
    /// assert_eq!(msg.role, "user");
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A single completion request
///
/// One synchronous exchange: the messages to send and the sampling
/// temperature to use. The planner issues exactly one request per
/// generation, with no retry on transient failure.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Conversation messages, typically [system, user]
    pub messages: Vec<Message>,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    /// Creates a request from messages and a temperature
    pub fn new(messages: Vec<Message>, temperature: f32) -> Self {
        Self {
            messages,
            temperature,
        }
    }
}

/// Token usage information from a completion
///
/// Tracks the number of tokens used in prompts and completions,
/// as reported by the provider.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: usize,
    /// Number of tokens in the completion
    pub completion_tokens: usize,
    /// Total tokens used (prompt + completion)
    pub total_tokens: usize,
}

impl TokenUsage {
    /// Create a new TokenUsage instance
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::providers::TokenUsage;
    ///
    /// let usage = TokenUsage::new(100, 50);
    /// assert_eq!(usage.total_tokens, 150);
    /// ```
    pub fn new(prompt_tokens: usize, completion_tokens: usize) -> Self {
        let total_tokens = prompt_tokens + completion_tokens;
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }
}

/// Completion response with the model's text and optional token usage
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The text content returned by the model
    pub content: String,
    /// Optional token usage information
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// Create a new CompletionResponse without usage data
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
        }
    }

    /// Create a new CompletionResponse with token usage
    pub fn with_usage(content: impl Into<String>, usage: TokenUsage) -> Self {
        Self {
            content: content.into(),
            usage: Some(usage),
        }
    }
}

/// Provider trait for language-model backends
///
/// All providers (OpenAI-compatible APIs, Ollama, test stubs) implement
/// this trait. The planner holds a `dyn Provider` so the backend is
/// swappable via configuration.
///
/// # Examples
///
/// ```no_run
/// use wayfarer::providers::{CompletionRequest, CompletionResponse, Provider};
/// use wayfarer::error::Result;
/// use async_trait::async_trait;
///
/// struct CannedProvider;
///
/// #[async_trait]
/// impl Provider for CannedProvider {
///     async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse> {
///         Ok(CompletionResponse::new("{\"destination\":\"Oslo\",\"days\":[]}"))
///     }
/// }
/// ```
#[async_trait]
pub trait Provider: Send + Sync {
    /// Completes a single request
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or the response envelope is
    /// invalid. Providers do not retry; the caller decides what a failure
    /// means.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}
