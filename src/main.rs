use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::debug;
use winter_hdd::cli::Args;
use winter_hdd::{HddProcessor, ProcessingStats};

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(_stats) => {
            // Stats and the trend classification have already been printed
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<ProcessingStats> {
    setup_logging(args);

    let config = args.to_config();
    debug!("Configuration: {:?}", config);

    let processor = HddProcessor::new(config).context("Failed to set up winter HDD analysis")?;
    let stats = processor
        .process()
        .with_context(|| format!("Failed to process {}", args.input_path.display()))?;

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("winter_hdd={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}
