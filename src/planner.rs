//! Itinerary request handler
//!
//! The planner owns the round trip from validated trip parameters to a
//! parsed [`Itinerary`]: build the prompt, issue one completion request
//! at a fixed temperature, parse the reply as JSON. There is no retry on
//! transient failure and no schema re-validation beyond a successful
//! parse into the permissive itinerary types; a reply that is not valid
//! itinerary JSON surfaces as an upstream format error.

use crate::config::PlannerConfig;
use crate::error::{Result, WayfarerError};
use crate::prompts::{self, SYSTEM_PROMPT};
use crate::providers::{CompletionRequest, Message, Provider};
use crate::report::Reporter;
use crate::trip::{Itinerary, TripParameters};

use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Generates itineraries through a language-model provider
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use wayfarer::config::{OpenAiConfig, PlannerConfig};
/// use wayfarer::planner::ItineraryPlanner;
/// use wayfarer::providers::OpenAiProvider;
/// use wayfarer::report::tracing_reporter;
///
/// # fn example() -> wayfarer::error::Result<()> {
/// let provider = OpenAiProvider::new(OpenAiConfig::default())?;
/// let planner = ItineraryPlanner::new(
///     Arc::new(provider),
///     tracing_reporter(),
///     &PlannerConfig::default(),
/// );
/// # Ok(())
/// # }
/// ```
pub struct ItineraryPlanner {
    provider: Arc<dyn Provider>,
    reporter: Arc<dyn Reporter>,
    temperature: f32,
}

impl ItineraryPlanner {
    /// Creates a new planner
    ///
    /// # Arguments
    ///
    /// * `provider` - The language-model backend
    /// * `reporter` - Observability sink for surfaced errors
    /// * `config` - Planner configuration (sampling temperature)
    pub fn new(
        provider: Arc<dyn Provider>,
        reporter: Arc<dyn Reporter>,
        config: &PlannerConfig,
    ) -> Self {
        Self {
            provider,
            reporter,
            temperature: config.temperature,
        }
    }

    /// Generates an itinerary for the given trip parameters
    ///
    /// Validation failures never reach the provider; the upstream call is
    /// a single attempt.
    ///
    /// # Errors
    ///
    /// - `WayfarerError::Validation` if a required parameter is missing or
    ///   malformed (the upstream call is not issued)
    /// - `WayfarerError::UpstreamFormat` if the model reply is not valid
    ///   itinerary JSON
    /// - provider errors (`Provider`, `Transport`) passed through from the
    ///   completion call
    pub async fn generate(&self, params: &TripParameters) -> Result<Itinerary> {
        params.validate()?;

        let day_count = params.day_span();
        info!(
            "Generating itinerary: destination={}, {} day(s), budget={}, {} traveler(s)",
            params.destination, day_count, params.budget, params.travelers
        );

        let prompt = prompts::build_itinerary_prompt(params, day_count);
        let request = CompletionRequest::new(
            vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
            self.temperature,
        );

        let response = match self.provider.complete(&request).await {
            Ok(response) => response,
            Err(err) => {
                self.reporter.report(&err, self.context(params));
                return Err(err);
            }
        };

        if let Some(usage) = response.usage {
            debug!(
                "Model reply received: {} prompt tokens, {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = response.content.trim();
        let itinerary: Itinerary = match serde_json::from_str(text) {
            Ok(itinerary) => itinerary,
            Err(err) => {
                let format_err = anyhow::Error::from(WayfarerError::UpstreamFormat(format!(
                    "Model reply is not itinerary JSON: {}",
                    err
                )));
                self.reporter.report(&format_err, self.context(params));
                return Err(format_err);
            }
        };

        debug!(
            "Parsed itinerary for {}: {} day(s)",
            itinerary.destination,
            itinerary.days.len()
        );
        Ok(itinerary)
    }

    fn context(&self, params: &TripParameters) -> serde_json::Value {
        json!({
            "api": "generateItinerary",
            "destination": params.destination,
            "startDate": params.start_date.to_string(),
            "endDate": params.end_date.to_string(),
            "budget": params.budget.as_str(),
            "travelers": params.travelers,
        })
    }
}
