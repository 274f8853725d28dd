//! Application constants for the winter HDD analysis
//!
//! The analysis is single-purpose: region, year bound, imputation window and
//! file names are fixed here rather than configured at runtime.

// =============================================================================
// Region and Time Window
// =============================================================================

/// NOAA climate-division state code for Washington
pub const WASHINGTON_STATE_CODE: &str = "045";

/// Width the region code is zero-padded to before comparison
pub const REGION_CODE_WIDTH: usize = 3;

/// Years at or beyond this bound are excluded before aggregation
pub const YEAR_EXCLUSIVE_BOUND: i64 = 2023;

// =============================================================================
// Data Cleaning
// =============================================================================

/// Reserved numeric code meaning "no data"
pub const MISSING_SENTINEL: f64 = -9999.0;

/// Trailing rolling-mean window used to impute missing cells
pub const ROLLING_WINDOW: usize = 5;

/// Minimum number of valid observations in the window for a fill
pub const ROLLING_MIN_PERIODS: usize = 1;

// =============================================================================
// Fixed-Width Layout
// =============================================================================

/// Number of monthly value columns per record
pub const MONTHS_PER_RECORD: usize = 12;

/// Column widths of the climate-division file, left to right
pub const COLUMN_WIDTHS: [usize; 16] = [3, 1, 2, 4, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7];

/// Column names matching [`COLUMN_WIDTHS`]
pub const COLUMN_NAMES: [&str; 16] = [
    "STATE-CODE",
    "DIVISION-NUMBER",
    "ELEMENT-CODE",
    "YEAR",
    "JAN-VALUE",
    "FEB-VALUE",
    "MAR-VALUE",
    "APR-VALUE",
    "MAY-VALUE",
    "JUNE-VALUE",
    "JULY-VALUE",
    "AUG-VALUE",
    "SEPT-VALUE",
    "OCT-VALUE",
    "NOV-VALUE",
    "DEC-VALUE",
];

/// Month indices (zero-based) contributing to a winter season
pub mod months {
    pub const JAN: usize = 0;
    pub const FEB: usize = 1;
    pub const MAR: usize = 2;
    pub const NOV: usize = 10;
    pub const DEC: usize = 11;
}

// =============================================================================
// Inputs and Outputs
// =============================================================================

/// Default input file
pub const DEFAULT_INPUT_PATH: &str = "data";

/// Default spreadsheet output
pub const DEFAULT_OUTPUT_PATH: &str = "Winter_HDD_Washington_1895_2022.xlsx";

/// Default chart output
pub const DEFAULT_CHART_PATH: &str = "Winter_HDD_Washington_1895_2022.svg";

/// Output column holding the winter year
pub const WINTER_YEAR_COLUMN: &str = "WINTER-YEAR";

/// Output column holding the accumulated winter HDD
pub const WINTER_HDD_COLUMN: &str = "WINTER-HDD";

// =============================================================================
// Chart Layout
// =============================================================================

pub mod chart {
    pub const TITLE: &str = "Trend of Winter HDD in Washington (1895 - 2022)";
    pub const X_LABEL: &str = "Year";
    pub const Y_LABEL: &str = "Winter Accumulative HDD";
    pub const SERIES_LABEL: &str = "Winter HDD";
    pub const TREND_LABEL: &str = "Trend Line";

    /// 12x6 inches at 100 dpi
    pub const WIDTH: u32 = 1200;
    pub const HEIGHT: u32 = 600;
}

// =============================================================================
// Trend Messages
// =============================================================================

pub mod messages {
    pub const WARMING: &str = "HDD is decreasing over the past century, indicating warming winters.";
    pub const COLDER: &str = "HDD is increasing over the past century, indicating colder winters.";
    pub const FLAT: &str = "HDD trend is relatively flat over the past century.";
}
