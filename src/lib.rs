//! Winter HDD Library
//!
//! Derives winter heating-degree-day totals for Washington from the NOAA
//! climate-division fixed-width dataset and reports the long-term trend.
//!
//! The pipeline runs in a fixed order:
//! - Reading fixed-width records with coerce-on-failure numeric parsing
//! - Filtering to state code 045 and years before 2023
//! - Replacing sentinel values and imputing gaps with a trailing rolling mean
//! - Summing November to March into one total per winter
//! - Writing the series to a spreadsheet, charting it with a linear trend,
//!   and classifying the trend direction

pub mod aggregator;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod models;
pub mod processor;
pub mod reader;
pub mod trend;

pub use config::HddConfig;
pub use error::{HddError, Result};
pub use models::{ProcessingStats, Record, TrendDirection, WinterAggregate};
pub use processor::HddProcessor;
pub use trend::TrendLine;
