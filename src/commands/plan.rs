//! `plan` command: one-shot itinerary generation from the terminal

use crate::config::Config;
use crate::error::{Result, WayfarerError};
use crate::planner::ItineraryPlanner;
use crate::providers;
use crate::report::tracing_reporter;
use crate::trip::{BudgetTier, TripParameters};

use chrono::NaiveDate;
use std::sync::Arc;

/// Arguments for the `plan` command
#[derive(Debug, Clone)]
pub struct PlanArgs {
    pub destination: String,
    pub start: String,
    pub end: String,
    pub budget: String,
    pub interests: Vec<String>,
    pub travelers: u32,
}

/// Generates one itinerary and prints it as pretty JSON
///
/// # Errors
///
/// Returns an error on invalid arguments, provider construction failure,
/// or a failed generation.
pub async fn run(config: Config, args: PlanArgs) -> Result<()> {
    let params = TripParameters {
        destination: args.destination,
        start_date: parse_date(&args.start, "start")?,
        end_date: parse_date(&args.end, "end")?,
        budget: BudgetTier::from(args.budget),
        interests: args.interests,
        travelers: args.travelers,
    };

    let provider: Arc<dyn providers::Provider> =
        Arc::from(providers::create_provider(&config.provider)?);
    let planner = ItineraryPlanner::new(provider, tracing_reporter(), &config.planner);

    let itinerary = planner.generate(&params).await?;
    println!("{}", serde_json::to_string_pretty(&itinerary)?);
    Ok(())
}

fn parse_date(raw: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        WayfarerError::Validation(format!("Invalid --{} date: {}", flag, raw)).into()
    })
}
