//! Sentinel replacement and rolling-mean gap filling.
//!
//! Every numeric column is cleaned on its own. A missing cell takes the mean
//! of the valid values in the trailing window ending at its row, read from
//! the column before any fill was applied, so fills never feed later fills.
//! The window runs over the current row order; no sort by year happens here.

use crate::constants::{MISSING_SENTINEL, MONTHS_PER_RECORD, ROLLING_MIN_PERIODS, ROLLING_WINDOW};
use crate::models::Record;
use tracing::debug;

/// Output of the cleaning stage
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecords {
    pub records: Vec<Record>,
    /// Cells filled from the rolling mean
    pub imputed_cells: usize,
    /// Cells still missing because their window held no valid value
    pub unresolved_cells: usize,
}

/// Numeric columns of a record, addressable for per-column processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericColumn {
    Division,
    Element,
    Year,
    Month(usize),
}

impl NumericColumn {
    fn all() -> impl Iterator<Item = NumericColumn> {
        [
            NumericColumn::Division,
            NumericColumn::Element,
            NumericColumn::Year,
        ]
        .into_iter()
        .chain((0..MONTHS_PER_RECORD).map(NumericColumn::Month))
    }

    fn get(&self, record: &Record) -> Option<f64> {
        match self {
            NumericColumn::Division => record.division_number.map(|v| v as f64),
            NumericColumn::Element => record.element_code.map(|v| v as f64),
            NumericColumn::Year => record.year.map(|v| v as f64),
            NumericColumn::Month(idx) => record.months[*idx],
        }
    }

    fn set(&self, record: &mut Record, value: Option<f64>) {
        match self {
            NumericColumn::Division => record.division_number = value.map(round_to_integer),
            NumericColumn::Element => record.element_code = value.map(round_to_integer),
            NumericColumn::Year => record.year = value.map(round_to_integer),
            NumericColumn::Month(idx) => record.months[*idx] = value,
        }
    }
}

fn round_to_integer(value: f64) -> i64 {
    value.round() as i64
}

/// Replace the sentinel with missing in every numeric column
pub fn replace_sentinels(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            let mut cleaned = record.clone();
            for column in NumericColumn::all() {
                if column.get(record) == Some(MISSING_SENTINEL) {
                    column.set(&mut cleaned, None);
                }
            }
            cleaned
        })
        .collect()
}

/// Trailing rolling mean over `window` rows including the current one.
///
/// Missing values are skipped; a position with fewer than `min_periods`
/// valid values in its window yields `None`.
pub fn rolling_mean(values: &[Option<f64>], window: usize, min_periods: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|idx| {
            let start = (idx + 1).saturating_sub(window);
            let valid: Vec<f64> = values[start..=idx].iter().flatten().copied().collect();
            if valid.len() < min_periods.max(1) {
                None
            } else {
                Some(valid.iter().sum::<f64>() / valid.len() as f64)
            }
        })
        .collect()
}

/// Fill the missing cells of one column from its rolling mean
pub fn fill_missing(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let means = rolling_mean(values, ROLLING_WINDOW, ROLLING_MIN_PERIODS);
    values
        .iter()
        .zip(means)
        .map(|(value, mean)| value.or(mean))
        .collect()
}

/// Replace sentinels, then impute every missing cell column by column
pub fn clean_records(records: &[Record]) -> CleanedRecords {
    let replaced = replace_sentinels(records);
    let mut cleaned = replaced.clone();
    let mut imputed_cells = 0;
    let mut unresolved_cells = 0;

    for column in NumericColumn::all() {
        let values: Vec<Option<f64>> = replaced.iter().map(|r| column.get(r)).collect();
        let filled = fill_missing(&values);

        for ((record, before), after) in cleaned.iter_mut().zip(&values).zip(filled) {
            match (before, after) {
                (None, Some(_)) => {
                    imputed_cells += 1;
                    column.set(record, after);
                }
                (None, None) => unresolved_cells += 1,
                _ => {}
            }
        }
    }

    debug!(
        "Cleaned {} records: {} cells imputed, {} left missing",
        cleaned.len(),
        imputed_cells,
        unresolved_cells
    );

    CleanedRecords {
        records: cleaned,
        imputed_cells,
        unresolved_cells,
    }
}
