//! Configuration management for Wayfarer
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files and environment variables.

use crate::error::{Result, WayfarerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Wayfarer
///
/// This structure holds all configuration needed for the service,
/// including the HTTP server, the language-model provider, planner
/// behavior, and the mock hotel catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configuration (OpenAI, Ollama)
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Itinerary planner configuration
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Mock hotel catalog configuration
    #[serde(default)]
    pub hotels: HotelsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            provider: ProviderConfig::default(),
            planner: PlannerConfig::default(),
            hotels: HotelsConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Provider configuration
///
/// Specifies which language-model provider to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use ("openai" or "ollama")
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: String,

    /// OpenAI-compatible provider configuration
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Ollama configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_provider_type() -> String {
    "openai".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            openai: OpenAiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

/// OpenAI-compatible provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Model to use
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Optional API base URL (useful for tests and local mocks)
    ///
    /// When set, this base is used to build the chat completions endpoint,
    /// which allows tests to point the provider at a mock server.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Explicit API key; takes precedence over the environment variable
    #[serde(default)]
    pub api_key: Option<String>,

    /// Environment variable to read the API key from when no explicit key
    /// is configured
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            api_base: None,
            api_key: None,
            api_key_env: default_api_key_env(),
        }
    }
}

/// Ollama provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Ollama server host
    #[serde(default = "default_ollama_host")]
    pub host: String,

    /// Model to use for Ollama
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            model: default_ollama_model(),
        }
    }
}

/// Itinerary planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Fixed sampling temperature for itinerary generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
        }
    }
}

/// Mock hotel catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelsConfig {
    /// Artificial response delay in milliseconds, emulating a real
    /// upstream; disabled by default
    #[serde(default)]
    pub delay_ms: u64,

    /// Affiliate id appended to booking URLs
    #[serde(default = "default_affiliate_id")]
    pub affiliate_id: String,
}

fn default_affiliate_id() -> String {
    "demo".to_string()
}

impl Default for HotelsConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            affiliate_id: default_affiliate_id(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist
    ///
    /// Environment overrides are applied after the file is read.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::Config` if the file exists but cannot be
    /// read or parsed.
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WayfarerError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| WayfarerError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(provider_type) = std::env::var("WAYFARER_PROVIDER") {
            self.provider.provider_type = provider_type;
        }
        if let Ok(model) = std::env::var("WAYFARER_OPENAI_MODEL") {
            self.provider.openai.model = model;
        }
        if let Ok(host) = std::env::var("WAYFARER_OLLAMA_HOST") {
            self.provider.ollama.host = host;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::Config` when the provider type is unknown,
    /// a model name is empty, or the temperature is outside 0.0..=2.0.
    pub fn validate(&self) -> Result<()> {
        match self.provider.provider_type.as_str() {
            "openai" | "ollama" => {}
            other => {
                return Err(WayfarerError::Config(format!(
                    "Unknown provider type: {}",
                    other
                ))
                .into());
            }
        }

        if self.provider.openai.model.trim().is_empty() {
            return Err(WayfarerError::Config("OpenAI model must not be empty".to_string()).into());
        }
        if self.provider.ollama.model.trim().is_empty() {
            return Err(WayfarerError::Config("Ollama model must not be empty".to_string()).into());
        }

        if !(0.0..=2.0).contains(&self.planner.temperature) {
            return Err(WayfarerError::Config(format!(
                "Temperature must be within 0.0..=2.0, got {}",
                self.planner.temperature
            ))
            .into());
        }

        Ok(())
    }
}
