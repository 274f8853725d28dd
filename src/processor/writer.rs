//! Output writing for the winter series
//!
//! The series is assembled into a polars frame once and written from there:
//! always as a spreadsheet, optionally as Parquet.

use crate::constants::{WINTER_HDD_COLUMN, WINTER_YEAR_COLUMN};
use crate::error::Result;
use crate::models::WinterAggregate;

use polars::prelude::{DataFrame, DataType, ParquetWriter};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build the two-column winter frame, in aggregate order
pub fn winter_frame(aggregates: &[WinterAggregate]) -> Result<DataFrame> {
    let years: Vec<i64> = aggregates.iter().map(|a| a.winter_year).collect();
    let hdd: Vec<f64> = aggregates.iter().map(|a| a.winter_hdd).collect();

    let frame = polars::df!(
        WINTER_YEAR_COLUMN => years,
        WINTER_HDD_COLUMN => hdd,
    )?;

    Ok(frame)
}

/// Write a frame to the first worksheet of a new workbook.
///
/// One header row of column names, then one row per frame row. No index
/// column is added. Null cells are left blank.
pub fn write_xlsx(frame: &DataFrame, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, column) in frame.get_columns().iter().enumerate() {
        let col_idx = col_idx as u16;
        worksheet.write_string(0, col_idx, column.name().as_str())?;

        let values = column
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        for (row_idx, value) in values.f64()?.into_iter().enumerate() {
            if let Some(value) = value {
                worksheet.write_number(row_idx as u32 + 1, col_idx, value)?;
            }
        }
    }

    workbook.save(output_path)?;

    debug!(
        "Wrote {} rows to spreadsheet {}",
        frame.height(),
        output_path.display()
    );

    Ok(())
}

/// Write a frame as a single Parquet file
pub fn write_parquet(frame: &mut DataFrame, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    let file = fs::File::create(output_path)?;
    ParquetWriter::new(file).finish(frame)?;

    debug!(
        "Wrote {} rows to parquet {}",
        frame.height(),
        output_path.display()
    );

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
