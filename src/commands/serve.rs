//! `serve` command: run the HTTP API server

use crate::config::Config;
use crate::error::Result;
use crate::server::{self, AppState};

/// Runs the HTTP server until shutdown
///
/// CLI host/port overrides take precedence over the configuration file.
///
/// # Errors
///
/// Returns an error when the provider cannot be constructed or the
/// server fails to bind.
pub async fn run(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let state = AppState::from_config(&config)?;
    server::serve(&config.server, state).await
}
