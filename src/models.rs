//! Core data structures for the winter HDD pipeline.
//!
//! Defines the parsed climate-division record, the derived winter aggregate,
//! the trend classification and the per-run processing statistics.

use crate::constants::{MONTHS_PER_RECORD, messages, months};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One row of the climate-division file: a (region, division, element, year)
/// tuple with twelve monthly values. `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub region_code: String,
    pub division_number: Option<i64>,
    pub element_code: Option<i64>,
    pub year: Option<i64>,
    /// January first
    pub months: [Option<f64>; MONTHS_PER_RECORD],
}

impl Record {
    pub fn jan(&self) -> Option<f64> {
        self.months[months::JAN]
    }

    pub fn feb(&self) -> Option<f64> {
        self.months[months::FEB]
    }

    pub fn mar(&self) -> Option<f64> {
        self.months[months::MAR]
    }

    pub fn nov(&self) -> Option<f64> {
        self.months[months::NOV]
    }

    pub fn dec(&self) -> Option<f64> {
        self.months[months::DEC]
    }
}

/// Accumulated HDD for one winter, keyed by the calendar year the winter ends in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinterAggregate {
    pub winter_year: i64,
    pub winter_hdd: f64,
}

/// Qualitative direction of the fitted HDD trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Negative slope: winters are warming
    Decreasing,
    /// Positive slope: winters are getting colder
    Increasing,
    Flat,
}

impl TrendDirection {
    /// Classify a slope. Only an exact zero counts as flat.
    pub fn from_slope(slope: f64) -> Self {
        if slope < 0.0 {
            TrendDirection::Decreasing
        } else if slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Flat
        }
    }

    /// Fixed console message for this direction
    pub fn message(&self) -> &'static str {
        match self {
            TrendDirection::Decreasing => messages::WARMING,
            TrendDirection::Increasing => messages::COLDER,
            TrendDirection::Flat => messages::FLAT,
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub rows_read: usize,
    pub rows_in_region: usize,
    pub rows_in_window: usize,
    pub imputed_cells: usize,
    pub unresolved_cells: usize,
    pub aggregates: usize,
    pub distinct_years: Vec<i64>,
    pub slope: Option<f64>,
    pub direction: Option<TrendDirection>,
    pub output_path: PathBuf,
    pub chart_path: Option<PathBuf>,
    pub parquet_path: Option<PathBuf>,
    pub processing_time_ms: u128,
}
