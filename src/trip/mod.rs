//! Trip domain: parameters, itineraries, and the session store

pub mod itinerary;
pub mod params;
pub mod store;

pub use itinerary::{Activity, Day, Itinerary, Meal};
pub use params::{BudgetTier, TripDraft, TripParameters, TripUpdate};
pub use store::{FetchState, SessionState, TripStore};
