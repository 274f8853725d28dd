//! Pipeline orchestration.
//!
//! Sequences the stages in their fixed order: read, filter, clean, derive,
//! export, report. Each stage is a pure function over record slices; the
//! processor only threads their outputs through and reports on the way.

pub mod chart;
pub mod writer;

#[cfg(test)]
mod tests;

use crate::aggregator::aggregate_winters;
use crate::cleaner::clean_records;
use crate::config::HddConfig;
use crate::constants::{WASHINGTON_STATE_CODE, YEAR_EXCLUSIVE_BOUND};
use crate::error::{HddError, Result};
use crate::filter::{distinct_years, filter_region, filter_years, is_chronological};
use crate::models::ProcessingStats;
use crate::reader::read_records;
use crate::trend::fit_trend;

use colored::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs the winter HDD analysis for one configuration
pub struct HddProcessor {
    config: HddConfig,
}

impl HddProcessor {
    /// Create a processor, checking the configuration and the input file
    pub fn new(config: HddConfig) -> Result<Self> {
        config.validate()?;

        if !config.input_path.exists() {
            return Err(HddError::InputNotFound {
                path: config.input_path.clone(),
            });
        }

        Ok(Self { config })
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        let mut stats = ProcessingStats {
            output_path: self.config.output_path.clone(),
            ..Default::default()
        };

        info!("Reading {}", self.config.input_path.display());
        let records = read_records(&self.config.input_path)?;
        stats.rows_read = records.len();

        let regional = filter_region(&records, WASHINGTON_STATE_CODE);
        stats.rows_in_region = regional.len();
        stats.distinct_years = distinct_years(&regional);
        println!(
            "Unique years in dataset: {}",
            format_years(&stats.distinct_years)
        );

        let windowed = filter_years(&regional, YEAR_EXCLUSIVE_BOUND);
        stats.rows_in_window = windowed.len();
        debug!(
            "{} of {} rows kept for region {} before {}",
            windowed.len(),
            records.len(),
            WASHINGTON_STATE_CODE,
            YEAR_EXCLUSIVE_BOUND
        );
        if !is_chronological(&windowed) {
            warn!("Filtered rows are not in year order; winters pair rows by position");
        }

        let cleaned = clean_records(&windowed);
        stats.imputed_cells = cleaned.imputed_cells;
        stats.unresolved_cells = cleaned.unresolved_cells;
        if cleaned.unresolved_cells > 0 {
            warn!(
                "{} cells had no valid neighbours and remain missing",
                cleaned.unresolved_cells
            );
        }

        let aggregates = aggregate_winters(&cleaned.records);
        stats.aggregates = aggregates.len();

        let mut frame = writer::winter_frame(&aggregates)?;
        writer::write_xlsx(&frame, &self.config.output_path)?;
        info!("Wrote {}", self.config.output_path.display());

        if let Some(parquet_path) = &self.config.parquet_path {
            writer::write_parquet(&mut frame, parquet_path)?;
            info!("Wrote {}", parquet_path.display());
            stats.parquet_path = Some(parquet_path.clone());
        }

        let trend = fit_trend(&aggregates)?;
        stats.slope = Some(trend.slope);
        stats.direction = Some(trend.direction());
        debug!(
            "Trend line: slope {:.6}, intercept {:.3}",
            trend.slope, trend.intercept
        );

        if let Some(chart_path) = &self.config.chart_path {
            chart::render_chart(&aggregates, &trend, chart_path)?;
            info!("Rendered {}", chart_path.display());
            stats.chart_path = Some(chart_path.clone());
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        self.report(&stats);

        Ok(stats)
    }

    fn report(&self, stats: &ProcessingStats) {
        println!("\n{}", "Processing Summary".bright_green().bold());
        println!(
            "  {} {}",
            "Rows read:".bright_cyan(),
            stats.rows_read.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Rows in region:".bright_cyan(),
            stats.rows_in_region.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Rows before bound:".bright_cyan(),
            stats.rows_in_window.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Cells imputed:".bright_cyan(),
            stats.imputed_cells.to_string().bright_white()
        );
        if stats.unresolved_cells > 0 {
            println!(
                "  {} {}",
                "Cells missing:".bright_red(),
                stats.unresolved_cells.to_string().bright_red().bold()
            );
        }
        println!(
            "  {} {}",
            "Winters:".bright_cyan(),
            stats.aggregates.to_string().bright_white().bold()
        );
        println!(
            "  {} {}",
            "Spreadsheet:".bright_cyan(),
            stats.output_path.display()
        );
        if let Some(path) = &stats.chart_path {
            println!("  {} {}", "Chart:".bright_cyan(), path.display());
        }
        if let Some(path) = &stats.parquet_path {
            println!("  {} {}", "Parquet:".bright_cyan(), path.display());
        }
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );

        if let Some(direction) = stats.direction {
            println!("\n{}", direction);
        }
    }
}

/// Space-separated years in brackets, e.g. `[1895 1896 1897]`
pub fn format_years(years: &[i64]) -> String {
    let joined: Vec<String> = years.iter().map(|year| year.to_string()).collect();
    format!("[{}]", joined.join(" "))
}
