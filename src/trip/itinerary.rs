//! Itinerary types returned by the planner
//!
//! These structs mirror the JSON schema the model is instructed to emit.
//! Parsing is deliberately permissive: every field beyond the top-level
//! object shape carries a serde default, so a reply that omits meals for a
//! day or leaves a description blank still parses. A reply that is not a
//! JSON object (or types a present field wrongly) is rejected by the
//! planner as an upstream format error.

use serde::{Deserialize, Serialize};

/// A structured multi-day travel plan
///
/// Produced once per successful generation and replaced wholesale by the
/// next generation; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Destination echoed from the request
    #[serde(default)]
    pub destination: String,
    /// One entry per trip day, in order
    #[serde(default)]
    pub days: Vec<Day>,
}

/// A single day of the itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based day index
    #[serde(default)]
    pub day: u32,
    /// Calendar date as emitted by the model (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,
    /// Ordered activities, 3-4 expected but not enforced
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Ordered meal suggestions, lunch and dinner expected
    #[serde(default)]
    pub meals: Vec<Meal>,
}

/// An activity or attraction within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Free-form category tag (attraction/food/shopping/...), used only
    /// for icon selection downstream
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// A meal suggestion within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// lunch or dinner, free text in practice
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub location: String,
}
