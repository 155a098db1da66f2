//! HTTP API for itinerary generation and hotel lookup
//!
//! Exposes the two POST endpoints consumed by the planning front end,
//! plus a liveness probe. Request bodies are decoded with every field
//! optional so that missing parameters surface as a 400 with the
//! documented `{error}` body rather than a decoder rejection; wrong-verb
//! requests to known routes produce a 405 with the same shape.

use crate::config::{Config, ServerConfig};
use crate::error::{Result, WayfarerError};
use crate::hotels::{HotelCatalog, HotelQuery, HotelRecord, HotelSource};
use crate::planner::ItineraryPlanner;
use crate::providers;
use crate::report::tracing_reporter;
use crate::trip::{BudgetTier, TripParameters};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<ItineraryPlanner>,
    pub catalog: Arc<dyn HotelSource>,
}

impl AppState {
    /// Builds the production state from configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the configured provider cannot be
    /// constructed (unknown type, missing credentials).
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider: Arc<dyn providers::Provider> =
            Arc::from(providers::create_provider(&config.provider)?);
        let reporter = tracing_reporter();
        let planner = Arc::new(ItineraryPlanner::new(
            provider,
            reporter,
            &config.planner,
        ));
        let catalog = Arc::new(HotelCatalog::new(&config.hotels));
        Ok(Self { planner, catalog })
    }
}

/// Builds the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/generateItinerary",
            post(generate_itinerary).fallback(method_not_allowed),
        )
        .route(
            "/api/getHotels",
            post(get_hotels).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Binds the configured address and serves requests until shutdown
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server loop
/// fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = router(state);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Wire shape of POST /api/generateItinerary
///
/// Every field optional: presence is validated by hand so the error body
/// matches the documented contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    destination: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    budget: Option<BudgetTier>,
    interests: Option<Vec<String>>,
    travelers: Option<u32>,
}

impl GenerateRequest {
    /// Validates presence and parses dates
    fn into_params(self) -> std::result::Result<TripParameters, WayfarerError> {
        let (Some(destination), Some(start_date), Some(end_date), Some(budget), Some(interests)) = (
            self.destination,
            self.start_date,
            self.end_date,
            self.budget,
            self.interests,
        ) else {
            return Err(WayfarerError::Validation(
                "Missing required parameters".to_string(),
            ));
        };

        Ok(TripParameters {
            destination,
            start_date: parse_date(&start_date, "startDate")?,
            end_date: parse_date(&end_date, "endDate")?,
            budget,
            interests,
            travelers: self.travelers.unwrap_or(1),
        })
    }
}

fn parse_date(raw: &str, field: &str) -> std::result::Result<NaiveDate, WayfarerError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| WayfarerError::Validation(format!("Invalid {}: {}", field, raw)))
}

/// Wire shape of POST /api/getHotels
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotelsRequest {
    destination: Option<String>,
    check_in: Option<String>,
    check_out: Option<String>,
    budget: Option<BudgetTier>,
}

impl HotelsRequest {
    fn into_query(self) -> std::result::Result<HotelQuery, WayfarerError> {
        let (Some(destination), Some(check_in), Some(check_out)) =
            (self.destination, self.check_in, self.check_out)
        else {
            return Err(WayfarerError::Validation(
                "Missing required parameters".to_string(),
            ));
        };

        Ok(HotelQuery {
            destination,
            check_in,
            check_out,
            budget: self.budget.unwrap_or_default(),
        })
    }
}

/// Wire shape of the hotels response
#[derive(Debug, Serialize)]
struct HotelsResponse {
    hotels: Vec<HotelRecord>,
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn generate_itinerary(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Response {
    let params = match body.into_params() {
        Ok(params) => params,
        Err(err) => return error_response(&err.into(), "Failed to generate itinerary"),
    };

    match state.planner.generate(&params).await {
        Ok(itinerary) => (StatusCode::OK, Json(itinerary)).into_response(),
        Err(err) => error_response(&err, "Failed to generate itinerary"),
    }
}

async fn get_hotels(State(state): State<AppState>, Json(body): Json<HotelsRequest>) -> Response {
    let query = match body.into_query() {
        Ok(query) => query,
        Err(err) => return error_response(&err.into(), "Failed to get hotels"),
    };

    match state.catalog.lookup(&query).await {
        Ok(hotels) => (StatusCode::OK, Json(HotelsResponse { hotels })).into_response(),
        Err(err) => error_response(&err, "Failed to get hotels"),
    }
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"error": "Method not allowed"})),
    )
        .into_response()
}

/// Maps a surfaced error to the documented response shape
///
/// Validation failures are the caller's to fix (400 with the message);
/// everything else is a generation/lookup failure (500 with a generic
/// title and the detail string).
fn error_response(err: &anyhow::Error, title: &str) -> Response {
    if let Some(WayfarerError::Validation(message)) = err.downcast_ref::<WayfarerError>() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": message})),
        )
            .into_response();
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": title, "details": err.to_string()})),
    )
        .into_response()
}
