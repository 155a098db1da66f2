//! Wayfarer - travel-itinerary planning service library
//!
//! This library provides the core functionality for the Wayfarer travel
//! planner: prompt construction, language-model providers, itinerary
//! generation, the mock hotel catalog, the session store, and the HTTP
//! API.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `trip`: Domain types (parameters, itineraries) and the session store
//! - `prompts`: System prompt and itinerary prompt builder
//! - `providers`: Language-model provider abstraction and implementations
//! - `planner`: The itinerary request handler
//! - `hotels`: Mock hotel catalog
//! - `server`: HTTP API (axum)
//! - `report`: Observability collaborator for surfaced errors
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use wayfarer::{Config, server::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml")?;
//!     config.validate()?;
//!
//!     let state = AppState::from_config(&config)?;
//!     wayfarer::server::serve(&config.server, state).await
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hotels;
pub mod planner;
pub mod prompts;
pub mod providers;
pub mod report;
pub mod server;
pub mod trip;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, WayfarerError};
pub use hotels::{HotelCatalog, HotelQuery, HotelRecord};
pub use planner::ItineraryPlanner;
pub use trip::{BudgetTier, FetchState, Itinerary, SessionState, TripParameters, TripStore};

#[cfg(test)]
pub mod test_utils;
