//! Prints the uplink status and reference data as JSON.
//!
//! ```text
//! cargo run --bin ridestats -- --km=12.5 --ride-type="Lyft fare"
//! ```

use ridestats::config::Settings;
use ridestats::report;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "Usage: ridestats [OPTIONS]

Options:
  --km=<value>          Convert a distance in kilometers to miles
  --ride-type=<label>   Classify a ride-type label against the standard list
  --help                Show this message

Environment:
  STATS_ANVIL_API       Stats service uplink key (optional)
  CHART_ANVIL_API       Chart service uplink key (optional)
  RUST_LOG              Log filter (default: ridestats=info)"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ridestats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let km_arg = args.iter().find_map(|a| a.strip_prefix("--km="));
    let ride_type_arg = args.iter().find_map(|a| a.strip_prefix("--ride-type="));

    let settings = Settings::from_env();

    if !settings.is_stats_configured() {
        tracing::info!("STATS_ANVIL_API not configured");
    }
    if !settings.is_chart_configured() {
        tracing::info!("CHART_ANVIL_API not configured");
    }

    let report = report::build(&settings, km_arg, ride_type_arg)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
