//! Error reporting collaborator
//!
//! Surfaced errors are forwarded to a [`Reporter`] together with request
//! context before they propagate. Reporting is fire-and-forget: an
//! implementation must never panic or block the operation that failed.

use std::sync::Arc;

/// Observability collaborator receiving surfaced errors
///
/// The default implementation logs through `tracing`; deployments wire in
/// their own sink. Implementations must be infallible from the caller's
/// point of view.
pub trait Reporter: Send + Sync {
    /// Report an error with request context
    ///
    /// `context` is a JSON mapping describing the operation (endpoint
    /// name, request parameters). Must not panic.
    fn report(&self, error: &anyhow::Error, context: serde_json::Value);
}

/// Reporter that logs errors via `tracing`
#[derive(Debug, Default, Clone)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, error: &anyhow::Error, context: serde_json::Value) {
        tracing::error!(%context, "API error: {:#}", error);
    }
}

/// Convenience constructor for the default reporter
pub fn tracing_reporter() -> Arc<dyn Reporter> {
    Arc::new(TracingReporter)
}
