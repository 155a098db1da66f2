//! Session store and orchestration state machine
//!
//! The [`TripStore`] owns all session state for one planning session:
//! the trip draft, the generated itinerary, the hotel results, and the
//! per-fetch status flags. Consumers read snapshots and route every
//! mutation through the store's operations; nothing else writes the
//! state.
//!
//! Orchestration is explicit and sequential: a successful `generate`
//! awaits the itinerary write, then invokes the hotel fetch, so the
//! ordering between the two is auditable in one function body. Hotel
//! failures are isolated to the hotels flag and never touch the
//! itinerary error slot.

use crate::error::WayfarerError;
use crate::hotels::{HotelQuery, HotelRecord, HotelSource};
use crate::planner::ItineraryPlanner;
use crate::report::Reporter;
use crate::trip::{Itinerary, TripDraft, TripUpdate};

use serde::Serialize;
use serde_json::json;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Status of one independent fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// All state for one planning session
///
/// Owned exclusively by the [`TripStore`]; consumers receive clones via
/// [`TripStore::snapshot`] and never mutate directly.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    /// Trip parameters as currently entered
    pub params: TripDraft,
    /// Last successfully generated itinerary, if any
    pub itinerary: Option<Itinerary>,
    /// Last successfully fetched hotel records
    pub hotels: Vec<HotelRecord>,
    /// Status of the itinerary fetch
    pub itinerary_state: FetchState,
    /// Status of the hotel fetch
    pub hotels_state: FetchState,
    /// User-facing error for the itinerary flow; hotel failures never
    /// land here
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            params: TripDraft::default(),
            itinerary: None,
            hotels: Vec::new(),
            itinerary_state: FetchState::Idle,
            hotels_state: FetchState::Idle,
            error: None,
        }
    }
}

/// Session-scoped orchestrator for itinerary and hotel fetches
///
/// Construct one store per session or page load; there is no ambient
/// singleton. The store tolerates late resolutions: an operation that
/// completes after every consumer is gone simply writes its result into
/// the state and returns.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use wayfarer::config::Config;
/// use wayfarer::hotels::HotelCatalog;
/// use wayfarer::planner::ItineraryPlanner;
/// use wayfarer::providers::OpenAiProvider;
/// use wayfarer::report::tracing_reporter;
/// use wayfarer::trip::TripStore;
///
/// # fn example() -> wayfarer::error::Result<()> {
/// let config = Config::default();
/// let provider = Arc::new(OpenAiProvider::new(config.provider.openai.clone())?);
/// let reporter = tracing_reporter();
/// let planner = Arc::new(ItineraryPlanner::new(provider, reporter.clone(), &config.planner));
/// let catalog = Arc::new(HotelCatalog::new(&config.hotels));
/// let store = TripStore::new(planner, catalog, reporter);
/// # Ok(())
/// # }
/// ```
pub struct TripStore {
    state: Mutex<SessionState>,
    planner: Arc<ItineraryPlanner>,
    hotels: Arc<dyn HotelSource>,
    reporter: Arc<dyn Reporter>,
}

impl TripStore {
    /// Creates a store with an empty session
    pub fn new(
        planner: Arc<ItineraryPlanner>,
        hotels: Arc<dyn HotelSource>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            planner,
            hotels,
            reporter,
        }
    }

    /// Read-only snapshot of the session state
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    /// Applies a partial parameter update
    ///
    /// Edits are rejected while an itinerary generation is in flight.
    /// Any accepted edit marks the itinerary flag stale (`Idle`); the
    /// previously fetched itinerary object is kept until the next
    /// explicit `generate` replaces it. The error slot is cleared only
    /// when the destination or a date actually changes.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::Validation` when a generation is in flight.
    pub fn set_parameters(&self, update: TripUpdate) -> Result<(), WayfarerError> {
        let mut state = self.lock();
        if state.itinerary_state == FetchState::Loading {
            return Err(WayfarerError::Validation(
                "Cannot edit trip parameters while an itinerary is being generated".to_string(),
            ));
        }

        let geography_changed = state.params.apply(update);
        if geography_changed {
            state.error = None;
        }
        state.itinerary_state = FetchState::Idle;
        Ok(())
    }

    /// Generates an itinerary for the current parameters, then fetches
    /// hotels
    ///
    /// Missing prerequisites (destination, dates, at least one interest)
    /// set a user-facing error and leave the state machine where it was;
    /// no upstream request is issued. A call while a generation is
    /// already in flight is a no-op, keeping at most one outstanding
    /// request per session.
    ///
    /// On success the stored itinerary is replaced wholesale and the
    /// hotel fetch runs to completion before this call returns. On
    /// failure the flag moves to `Failed` with the error text stored;
    /// hotels are untouched.
    pub async fn generate(&self) {
        let params = {
            let mut state = self.lock();
            if state.itinerary_state == FetchState::Loading {
                debug!("Itinerary generation already in flight, ignoring duplicate call");
                return;
            }
            match state.params.complete() {
                Ok(params) => {
                    state.error = None;
                    state.itinerary_state = FetchState::Loading;
                    params
                }
                Err(message) => {
                    state.error = Some(message);
                    return;
                }
            }
        };

        match self.planner.generate(&params).await {
            Ok(itinerary) => {
                {
                    let mut state = self.lock();
                    state.itinerary = Some(itinerary);
                    state.itinerary_state = FetchState::Ready;
                }
                // Chained fetch starts only after the itinerary write
                // completes.
                self.fetch_hotels().await;
            }
            Err(err) => {
                warn!("Itinerary generation failed: {:#}", err);
                let mut state = self.lock();
                state.itinerary_state = FetchState::Failed;
                state.error = Some(user_message(&err));
            }
        }
    }

    /// Fetches hotels for the current parameters
    ///
    /// Silently returns when the destination or dates are not yet filled
    /// in, or when a hotel fetch is already in flight. A failure moves
    /// the hotels flag to `Failed` and clears the record list but never
    /// writes the itinerary error slot; the failure is still forwarded
    /// to the reporter.
    pub async fn fetch_hotels(&self) {
        let query = {
            let mut state = self.lock();
            if state.hotels_state == FetchState::Loading {
                debug!("Hotel fetch already in flight, ignoring duplicate call");
                return;
            }
            let draft = &state.params;
            let (Some(check_in), Some(check_out)) = (draft.start_date, draft.end_date) else {
                return;
            };
            if draft.destination.trim().is_empty() {
                return;
            }
            let query = HotelQuery {
                destination: draft.destination.clone(),
                check_in: check_in.to_string(),
                check_out: check_out.to_string(),
                budget: draft.budget.clone(),
            };
            state.hotels_state = FetchState::Loading;
            query
        };

        match self.hotels.lookup(&query).await {
            Ok(records) => {
                let mut state = self.lock();
                state.hotels = records;
                state.hotels_state = FetchState::Ready;
            }
            Err(err) => {
                // Isolated failure: surfaced via the flag and empty list
                // only, never the itinerary error slot.
                self.reporter.report(
                    &err,
                    json!({
                        "api": "getHotels",
                        "destination": query.destination,
                    }),
                );
                let mut state = self.lock();
                state.hotels.clear();
                state.hotels_state = FetchState::Failed;
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// User-facing message for a failed generation
fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<WayfarerError>() {
        Some(WayfarerError::UpstreamFormat(_)) => "Failed to generate itinerary".to_string(),
        Some(inner) => inner.to_string(),
        None => err.to_string(),
    }
}
