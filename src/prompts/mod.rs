//! Prompts for itinerary generation
//!
//! This module provides the system prompt and the user-prompt builder that
//! embed trip parameters and the required JSON output schema.

pub mod itinerary_prompt;

pub use itinerary_prompt::build_itinerary_prompt;

/// System prompt establishing the model's role
pub const SYSTEM_PROMPT: &str =
    "You are a travel planning assistant that creates detailed itineraries.";
