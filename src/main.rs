//! Wayfarer - travel-itinerary planning service
//!
//! Main entry point for the Wayfarer binary.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wayfarer::cli::{Cli, Commands};
use wayfarer::commands;
use wayfarer::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::load(&cli.config)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Serve { host, port } => {
            tracing::info!("Starting HTTP server");
            commands::serve::run(config, host, port).await
        }
        Commands::Plan {
            destination,
            start,
            end,
            budget,
            interests,
            travelers,
        } => {
            tracing::info!("Generating one-shot itinerary for {}", destination);
            let args = commands::plan::PlanArgs {
                destination,
                start,
                end,
                budget,
                interests,
                travelers,
            };
            commands::plan::run(config, args).await
        }
        Commands::Hotels {
            destination,
            check_in,
            check_out,
            budget,
            json,
        } => {
            tracing::info!("Looking up hotels for {}", destination);
            let args = commands::hotels::HotelsArgs {
                destination,
                check_in,
                check_out,
                budget,
                json,
            };
            commands::hotels::run(config, args).await
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "wayfarer=debug"
    } else {
        "wayfarer=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
