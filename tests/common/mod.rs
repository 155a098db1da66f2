//! Shared helpers for integration tests

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wayfarer::config::{HotelsConfig, PlannerConfig};
use wayfarer::error::Result;
use wayfarer::hotels::HotelCatalog;
use wayfarer::planner::ItineraryPlanner;
use wayfarer::providers::{CompletionRequest, CompletionResponse, Provider};
use wayfarer::report::tracing_reporter;
use wayfarer::server::AppState;

/// Provider stub returning one canned reply, counting calls
pub struct StubProvider {
    reply: std::result::Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl StubProvider {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl Provider for StubProvider {
    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(reply) => Ok(CompletionResponse::new(reply.clone())),
            Err(message) => {
                Err(wayfarer::WayfarerError::Provider(message.clone()).into())
            }
        }
    }
}

/// Well-formed model reply with the given destination and day count
pub fn sample_reply(destination: &str, days: u32) -> String {
    let days: Vec<serde_json::Value> = (1..=days)
        .map(|d| {
            serde_json::json!({
                "day": d,
                "date": format!("2026-06-{:02}", d),
                "activities": [
                    {
                        "name": format!("Attraction {}", d),
                        "description": "Worth a visit.",
                        "location": "City Center",
                        "type": "attraction"
                    }
                ],
                "meals": [
                    {"type": "lunch", "suggestion": "Local bistro", "location": "City Center"},
                    {"type": "dinner", "suggestion": "Riverside grill", "location": "Old Town"}
                ]
            })
        })
        .collect();
    serde_json::json!({"destination": destination, "days": days}).to_string()
}

/// App state wired to a stubbed provider and the real mock catalog
pub fn app_state_with(provider: StubProvider) -> AppState {
    let planner = Arc::new(ItineraryPlanner::new(
        Arc::new(provider),
        tracing_reporter(),
        &PlannerConfig::default(),
    ));
    let catalog = Arc::new(HotelCatalog::new(&HotelsConfig::default()));
    AppState { planner, catalog }
}
