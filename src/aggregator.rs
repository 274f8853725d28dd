//! Winter-season HDD derivation.

use crate::models::{Record, WinterAggregate};
use tracing::debug;

/// Derive one winter aggregate per row.
///
/// Row `i` contributes its November and December; January through March come
/// from row `i + 1` in sequence order, whatever year that row carries. The
/// last row has no successor and yields nothing, as does any row with a
/// missing year or a missing contributing month.
pub fn aggregate_winters(records: &[Record]) -> Vec<WinterAggregate> {
    let aggregates: Vec<WinterAggregate> = records
        .windows(2)
        .filter_map(|pair| winter_for(&pair[0], &pair[1]))
        .collect();

    debug!(
        "Derived {} winter aggregates from {} records",
        aggregates.len(),
        records.len()
    );

    aggregates
}

fn winter_for(current: &Record, next: &Record) -> Option<WinterAggregate> {
    let year = current.year?;
    let winter_hdd = current.nov()? + current.dec()? + next.jan()? + next.feb()? + next.mar()?;

    Some(WinterAggregate {
        winter_year: year + 1,
        winter_hdd,
    })
}
