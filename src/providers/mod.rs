//! Language-model provider abstraction
//!
//! This module contains the provider trait and implementations for
//! OpenAI-compatible APIs and Ollama.

pub mod base;
pub mod ollama;
pub mod openai;

pub use base::{CompletionRequest, CompletionResponse, Message, Provider, TokenUsage};
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use crate::config::ProviderConfig;
use crate::error::Result;

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `config` - Provider configuration including the selected type
///
/// # Returns
///
/// Returns a boxed provider instance
///
/// # Errors
///
/// Returns error if the provider type is unknown or initialization fails
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn Provider>> {
    match config.provider_type.as_str() {
        "openai" => Ok(Box::new(OpenAiProvider::new(config.openai.clone())?)),
        "ollama" => Ok(Box::new(OllamaProvider::new(config.ollama.clone())?)),
        other => Err(crate::error::WayfarerError::Provider(format!(
            "Unknown provider type: {}",
            other
        ))
        .into()),
    }
}
