//! Command-line interface definition for Wayfarer
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for running the HTTP server and for one-shot
//! itinerary and hotel lookups from the terminal.

use clap::{Parser, Subcommand};

/// Wayfarer - travel-itinerary planning service
///
/// Generate day-by-day travel itineraries through a language model and
/// pair them with mock hotel lookups, over HTTP or straight from the
/// terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "wayfarer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Wayfarer
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Override the bind address from config
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port from config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate an itinerary once and print it as JSON
    Plan {
        /// Destination city or region
        #[arg(short, long)]
        destination: String,

        /// First day of the trip (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day of the trip (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Budget tier (budget, mid-range, luxury)
        #[arg(short, long, default_value = "mid-range")]
        budget: String,

        /// Interest tags (repeat or comma-separate)
        #[arg(short, long, value_delimiter = ',', required = true)]
        interests: Vec<String>,

        /// Number of travelers
        #[arg(short, long, default_value_t = 1)]
        travelers: u32,
    },

    /// Look up mock hotels for a destination
    Hotels {
        /// Destination city or region
        #[arg(short, long)]
        destination: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,

        /// Budget tier (budget, mid-range, luxury)
        #[arg(short, long, default_value = "mid-range")]
        budget: String,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_serve() {
        let cli = Cli::try_parse_from(["wayfarer", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.config, "config/config.yaml");
    }

    #[test]
    fn test_cli_parses_plan_with_comma_interests() {
        let cli = Cli::try_parse_from([
            "wayfarer",
            "plan",
            "--destination",
            "Paris",
            "--start",
            "2026-06-01",
            "--end",
            "2026-06-05",
            "--interests",
            "art,food",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan {
                destination,
                interests,
                travelers,
                budget,
                ..
            } => {
                assert_eq!(destination, "Paris");
                assert_eq!(interests, vec!["art", "food"]);
                assert_eq!(travelers, 1);
                assert_eq!(budget, "mid-range");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_plan_requires_interests() {
        let result = Cli::try_parse_from([
            "wayfarer",
            "plan",
            "--destination",
            "Paris",
            "--start",
            "2026-06-01",
            "--end",
            "2026-06-05",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_hotels_json_flag() {
        let cli = Cli::try_parse_from([
            "wayfarer",
            "hotels",
            "--destination",
            "Tokyo",
            "--check-in",
            "2026-06-01",
            "--check-out",
            "2026-06-05",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Hotels { json, budget, .. } => {
                assert!(json);
                assert_eq!(budget, "mid-range");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
