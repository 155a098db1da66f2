//! Shared test doubles and fixtures for unit tests

use crate::error::{Result, WayfarerError};
use crate::hotels::{HotelQuery, HotelRecord, HotelSource};
use crate::providers::{CompletionRequest, CompletionResponse, Provider};
use crate::report::Reporter;
use crate::trip::{BudgetTier, TripParameters};

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Valid trip parameters used across tests: Paris, five days, two
/// travelers
pub fn sample_params() -> TripParameters {
    TripParameters {
        destination: "Paris".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
        budget: BudgetTier::MidRange,
        interests: vec!["art".to_string(), "food".to_string()],
        travelers: 2,
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

/// Provider stub returning canned replies
///
/// Counts calls and captures the last request so tests can assert what
/// the planner actually sent.
pub struct StubProvider {
    replies: Mutex<Vec<String>>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<CompletionRequest>>>,
}

impl StubProvider {
    /// Stub that always returns the same reply
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::replying_sequence(vec![reply.into()])
    }

    /// Stub that returns each reply in turn, repeating the last one
    pub fn replying_sequence(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies),
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Stub whose every call fails with a provider error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            failure: Some(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Shared call counter
    pub fn call_count(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    /// Shared handle to the most recent request
    pub fn last_request(&self) -> Arc<Mutex<Option<CompletionRequest>>> {
        self.last_request.clone()
    }
}

#[async_trait]
impl Provider for StubProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(message) = &self.failure {
            return Err(WayfarerError::Provider(message.clone()).into());
        }

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies.first().cloned().unwrap_or_default()
        };
        Ok(CompletionResponse::new(reply))
    }
}

/// Provider stub that sleeps before replying, for in-flight assertions
pub struct SlowStubProvider {
    reply: String,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl SlowStubProvider {
    pub fn new(reply: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            reply: reply.into(),
            delay: Duration::from_millis(delay_ms),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl Provider for SlowStubProvider {
    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(CompletionResponse::new(self.reply.clone()))
    }
}

/// Hotel source returning one canned record
#[derive(Default)]
pub struct StubHotelSource;

#[async_trait]
impl HotelSource for StubHotelSource {
    async fn lookup(&self, query: &HotelQuery) -> Result<Vec<HotelRecord>> {
        Ok(vec![HotelRecord {
            id: "stub0001".to_string(),
            name: "Stub Hotel".to_string(),
            rating: 4.5,
            stars: 4,
            location: "Test District".to_string(),
            price: 160,
            currency: "USD".to_string(),
            image: "https://example.com/hotel.jpg".to_string(),
            booking_url: format!("https://example.com/book?ss={}", query.destination),
        }])
    }
}

/// Hotel source whose every lookup fails
pub struct FailingHotelSource;

#[async_trait]
impl HotelSource for FailingHotelSource {
    async fn lookup(&self, _query: &HotelQuery) -> Result<Vec<HotelRecord>> {
        Err(WayfarerError::Transport("hotel backend unreachable".to_string()).into())
    }
}

/// Reporter that counts reports
#[derive(Default)]
pub struct RecordingReporter {
    calls: AtomicUsize,
}

impl RecordingReporter {
    pub fn reports(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, _error: &anyhow::Error, _context: serde_json::Value) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
