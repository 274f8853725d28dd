//! Command-line interface components.

use crate::config::HddConfig;
use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "winter_hdd")]
#[command(about = "Derive Washington winter HDD totals from NOAA climate-division data and report the trend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Fixed-width climate-division input file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,

    /// Spreadsheet output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Chart output file (SVG)
    #[arg(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long, conflicts_with = "chart")]
    pub no_chart: bool,

    /// Also write the winter series as Parquet
    #[arg(long, value_name = "PATH")]
    pub parquet: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration, keeping defaults for anything not given
    pub fn to_config(&self) -> HddConfig {
        let mut config = HddConfig::default()
            .with_input_path(&self.input_path)
            .with_output_path(&self.output_path);

        if let Some(chart) = &self.chart {
            config = config.with_chart_path(chart);
        }
        if self.no_chart {
            config = config.without_chart();
        }
        if let Some(parquet) = &self.parquet {
            config = config.with_parquet_path(parquet);
        }

        config
    }

    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
