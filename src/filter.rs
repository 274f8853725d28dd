//! Region and year selection.
//!
//! Pure selection: rows are never reordered or modified.

use crate::models::Record;
use crate::reader::pad_region_code;

/// Keep rows whose region code matches `code` (zero-padded before comparison)
pub fn filter_region(records: &[Record], code: &str) -> Vec<Record> {
    let target = pad_region_code(code);
    records
        .iter()
        .filter(|record| record.region_code == target)
        .cloned()
        .collect()
}

/// Keep rows whose year is strictly below `bound`. Rows with no year are dropped.
pub fn filter_years(records: &[Record], bound: i64) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.year.is_some_and(|year| year < bound))
        .cloned()
        .collect()
}

/// Region filter followed by the year bound
pub fn filter_records(records: &[Record], code: &str, bound: i64) -> Vec<Record> {
    filter_years(&filter_region(records, code), bound)
}

/// Distinct years in order of first appearance
pub fn distinct_years(records: &[Record]) -> Vec<i64> {
    let mut years: Vec<i64> = Vec::new();
    for year in records.iter().filter_map(|record| record.year) {
        if !years.contains(&year) {
            years.push(year);
        }
    }
    years
}

/// Whether the rows' known years never decrease
pub fn is_chronological(records: &[Record]) -> bool {
    let years: Vec<i64> = records.iter().filter_map(|record| record.year).collect();
    years.windows(2).all(|pair| pair[0] <= pair[1])
}
