//! Trip parameter types
//!
//! Defines the user-supplied planning inputs (destination, dates, budget
//! tier, interests, traveler count) in two shapes: [`TripDraft`], the
//! partially-filled form state held by the session store, and
//! [`TripParameters`], the complete set required before an itinerary can
//! be generated.

use crate::error::WayfarerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Budget tier used both as a prompt hint and a hotel price multiplier key
///
/// The wire representation is the lowercase tag (`budget`, `mid-range`,
/// `luxury`). Unrecognized inbound values are preserved verbatim so the
/// hotel multiplier can fall back to its default rather than rejecting
/// the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
    /// Any other value sent by a client; kept verbatim
    Other(String),
}

impl BudgetTier {
    /// Hotel price multiplier for this tier
    ///
    /// Unrecognized tiers map to 1.5.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::trip::BudgetTier;
    ///
    /// assert_eq!(BudgetTier::Luxury.multiplier(), 3.5);
    /// assert_eq!(BudgetTier::Other("premium".into()).multiplier(), 1.5);
    /// ```
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Budget => 1.0,
            Self::MidRange => 2.0,
            Self::Luxury => 3.5,
            Self::Other(_) => 1.5,
        }
    }

    /// The wire tag for this tier
    pub fn as_str(&self) -> &str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for BudgetTier {
    fn default() -> Self {
        Self::MidRange
    }
}

impl From<String> for BudgetTier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "budget" => Self::Budget,
            "mid-range" => Self::MidRange,
            "luxury" => Self::Luxury,
            _ => Self::Other(value),
        }
    }
}

impl From<BudgetTier> for String {
    fn from(tier: BudgetTier) -> Self {
        tier.as_str().to_string()
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete trip parameters, ready for itinerary generation
///
/// All fields are required and non-empty. Use [`TripParameters::validate`]
/// before handing the parameters to the planner; the planner calls it as
/// well, so callers constructing parameters directly cannot skip the check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    /// Destination city or region
    pub destination: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
    /// Budget tier for suggestions and hotel pricing
    #[serde(default)]
    pub budget: BudgetTier,
    /// Interest tags guiding activity selection
    pub interests: Vec<String>,
    /// Number of travelers
    #[serde(default = "default_travelers")]
    pub travelers: u32,
}

fn default_travelers() -> u32 {
    1
}

impl TripParameters {
    /// Checks that all required inputs are present and coherent
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::Validation` if the destination is empty,
    /// no interest is given, the traveler count is zero, or the end date
    /// precedes the start date.
    pub fn validate(&self) -> Result<(), WayfarerError> {
        if self.destination.trim().is_empty() {
            return Err(WayfarerError::Validation(
                "Missing required parameters".to_string(),
            ));
        }
        if self.interests.iter().all(|i| i.trim().is_empty()) {
            return Err(WayfarerError::Validation(
                "Missing required parameters".to_string(),
            ));
        }
        if self.travelers == 0 {
            return Err(WayfarerError::Validation(
                "Traveler count must be at least 1".to_string(),
            ));
        }
        if self.end_date < self.start_date {
            return Err(WayfarerError::Validation(
                "End date must not precede start date".to_string(),
            ));
        }
        Ok(())
    }

    /// Inclusive number of days spanned by the trip
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use wayfarer::trip::{BudgetTier, TripParameters};
    ///
    /// let params = TripParameters {
    ///     destination: "Paris".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 6, 3).unwrap(),
    ///     budget: BudgetTier::MidRange,
    ///     interests: vec!["art".to_string()],
    ///     travelers: 2,
    /// };
    /// assert_eq!(params.day_span(), 3);
    /// ```
    pub fn day_span(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Partially-filled trip parameters held by the session store
///
/// Mirrors the planning form: everything starts empty or at its default
/// and is filled in incrementally via [`TripUpdate`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: None,
            end_date: None,
            budget: BudgetTier::default(),
            interests: Vec::new(),
            travelers: 1,
        }
    }
}

impl TripDraft {
    /// Applies a partial update, returning `true` when the destination or
    /// either date actually changed
    ///
    /// The caller uses the return value to decide whether a previously
    /// stored error should be cleared.
    pub fn apply(&mut self, update: TripUpdate) -> bool {
        let mut geography_changed = false;

        if let Some(destination) = update.destination {
            if destination != self.destination {
                geography_changed = true;
            }
            self.destination = destination;
        }
        if let Some(start_date) = update.start_date {
            if Some(start_date) != self.start_date {
                geography_changed = true;
            }
            self.start_date = Some(start_date);
        }
        if let Some(end_date) = update.end_date {
            if Some(end_date) != self.end_date {
                geography_changed = true;
            }
            self.end_date = Some(end_date);
        }
        if let Some(budget) = update.budget {
            self.budget = budget;
        }
        if let Some(interests) = update.interests {
            self.interests = interests;
        }
        if let Some(travelers) = update.travelers {
            self.travelers = travelers;
        }

        geography_changed
    }

    /// Promotes the draft to complete [`TripParameters`]
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the destination, either date,
    /// or at least one interest is missing.
    pub fn complete(&self) -> Result<TripParameters, String> {
        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            return Err("Please fill out the destination and dates".to_string());
        };
        if self.destination.trim().is_empty() {
            return Err("Please fill out the destination and dates".to_string());
        }
        if self.interests.iter().all(|i| i.trim().is_empty()) {
            return Err("Please select at least one interest".to_string());
        }

        Ok(TripParameters {
            destination: self.destination.clone(),
            start_date,
            end_date,
            budget: self.budget.clone(),
            interests: self.interests.clone(),
            travelers: self.travelers,
        })
    }
}

/// Partial update to a [`TripDraft`]
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<BudgetTier>,
    pub interests: Option<Vec<String>>,
    pub travelers: Option<u32>,
}
