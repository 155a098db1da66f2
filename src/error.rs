//! Error types for Wayfarer
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Wayfarer operations
///
/// This enum encompasses all possible errors that can occur during
/// itinerary generation, hotel lookup, configuration loading, and
/// provider interactions.
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or malformed required input (user-correctable)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Provider-related errors (API calls, authentication, etc.)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Model response was not parseable as itinerary JSON
    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),

    /// Network failure reaching an upstream collaborator
    #[error("Transport error: {0}")]
    Transport(String),

    /// Missing credentials for provider
    #[error("Missing credentials for provider: {0}")]
    MissingCredentials(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Wayfarer operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = WayfarerError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_validation_error_display() {
        let error = WayfarerError::Validation("Missing required parameters".to_string());
        assert_eq!(
            error.to_string(),
            "Validation error: Missing required parameters"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let error = WayfarerError::Provider("API timeout".to_string());
        assert_eq!(error.to_string(), "Provider error: API timeout");
    }

    #[test]
    fn test_upstream_format_error_display() {
        let error = WayfarerError::UpstreamFormat("expected JSON object".to_string());
        assert_eq!(
            error.to_string(),
            "Upstream format error: expected JSON object"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let error = WayfarerError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_missing_credentials_error_display() {
        let error = WayfarerError::MissingCredentials("openai".to_string());
        assert_eq!(
            error.to_string(),
            "Missing credentials for provider: openai"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: WayfarerError = io_error.into();
        assert!(matches!(error, WayfarerError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: WayfarerError = json_error.into();
        assert!(matches!(error, WayfarerError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: WayfarerError = yaml_error.into();
        assert!(matches!(error, WayfarerError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WayfarerError>();
    }
}
