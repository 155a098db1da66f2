//! Itinerary prompt builder
//!
//! Builds the user prompt for a single itinerary generation: trip
//! parameters, the exact JSON schema the model must emit, and the
//! JSON-only output instructions. Pure function of its input.

use crate::trip::TripParameters;

/// Builds the itinerary-generation prompt for the given trip parameters
///
/// The prompt states the destination, date range, budget tier, interests,
/// and traveler count, then pins the output to a fixed JSON schema with
/// day/activity/meal entries. `day_count` is advisory: it tells the model
/// how many days the date span covers, but the model's actual output is
/// returned verbatim.
///
/// # Arguments
///
/// * `params` - Validated trip parameters
/// * `day_count` - Inclusive day count of the date span
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wayfarer::prompts::build_itinerary_prompt;
/// use wayfarer::trip::{BudgetTier, TripParameters};
///
/// let params = TripParameters {
///     destination: "Tokyo".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 4, 3).unwrap(),
///     budget: BudgetTier::Luxury,
///     interests: vec!["food".to_string(), "temples".to_string()],
///     travelers: 2,
/// };
/// let prompt = build_itinerary_prompt(&params, params.day_span());
/// assert!(prompt.contains("Tokyo"));
/// assert!(prompt.contains("food, temples"));
/// ```
pub fn build_itinerary_prompt(params: &TripParameters, day_count: i64) -> String {
    let interests = params.interests.join(", ");

    format!(
        r#"You are a travel assistant. The user is going to {destination} from {start} to {end},
with a budget of {budget}, focusing on {interests}.
There are {travelers} traveler(s). The trip spans {day_count} day(s).

Generate a daily itinerary with brief activity descriptions for each day.
For each day, include:
- 3-4 activities or attractions
- A meal suggestion for lunch and dinner
- An approximate location/neighborhood for each activity

Format the response as a JSON object with this structure:
{{
  "destination": "{destination}",
  "days": [
    {{
      "day": 1,
      "date": "YYYY-MM-DD",
      "activities": [
        {{
          "name": "Activity name",
          "description": "Brief 1-2 sentence description",
          "location": "Neighborhood or area",
          "type": "attraction/food/shopping/etc"
        }}
      ],
      "meals": [
        {{
          "type": "lunch/dinner",
          "suggestion": "Restaurant or food type",
          "location": "Neighborhood or area"
        }}
      ]
    }}
  ]
}}

IMPORTANT:
1. Return valid JSON only, with no additional text or explanations
2. Include real, specific places and attractions that actually exist
3. Make sure each activity has a specific location/neighborhood
4. Be sure to match activities to the specified interests
5. Keep the budget level ({budget}) in mind for all suggestions"#,
        destination = params.destination,
        start = params.start_date,
        end = params.end_date,
        budget = params.budget,
        interests = interests,
        travelers = params.travelers,
        day_count = day_count,
    )
}
