//! Fixed-width climate-division file reading.
//!
//! Splits each line by the fixed column widths and coerces the numeric
//! columns. A cell that does not parse becomes missing rather than failing
//! the row; lines that do not match the layout produce whatever the column
//! split yields, since the source is a trusted fixed-format export.

use crate::constants::{COLUMN_WIDTHS, MONTHS_PER_RECORD, REGION_CODE_WIDTH};
use crate::error::{HddError, Result};
use crate::models::Record;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read every record from a climate-division file, in file order
pub fn read_records(file_path: &Path) -> Result<Vec<Record>> {
    if !file_path.exists() {
        return Err(HddError::InputNotFound {
            path: file_path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(file_path)?;
    let records = parse_records(&text);

    debug!(
        "Read {} records from {}",
        records.len(),
        file_path.display()
    );

    Ok(records)
}

/// Parse in-memory fixed-width text, skipping blank lines
pub fn parse_records(text: &str) -> Vec<Record> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse a single fixed-width line. Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<Record> {
    if line.trim().is_empty() {
        return None;
    }

    let fields = split_columns(line, &COLUMN_WIDTHS);

    let mut months = [None; MONTHS_PER_RECORD];
    for (slot, field) in months.iter_mut().zip(&fields[4..]) {
        *slot = parse_float(field);
    }

    Some(Record {
        region_code: pad_region_code(fields[0]),
        division_number: parse_integer(fields[1]),
        element_code: parse_integer(fields[2]),
        year: parse_integer(fields[3]),
        months,
    })
}

/// Left-pad a region code with zeros to the fixed code width
pub fn pad_region_code(code: &str) -> String {
    format!("{:0>width$}", code.trim(), width = REGION_CODE_WIDTH)
}

/// Cut a line into trimmed fields of the given widths. Fields past the end
/// of a short line come back empty.
fn split_columns<'a>(line: &'a str, widths: &[usize]) -> Vec<&'a str> {
    let mut fields = Vec::with_capacity(widths.len());
    let mut rest = line;

    for &width in widths {
        let split = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        let (field, tail) = rest.split_at(split);
        fields.push(field.trim());
        rest = tail;
    }

    fields
}

fn parse_float(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Integral numeric text only; "45" and "45.0" parse, "4.5" is missing
fn parse_integer(field: &str) -> Option<i64> {
    if let Ok(value) = field.parse::<i64>() {
        return Some(value);
    }
    parse_float(field)
        .filter(|value| value.fract() == 0.0)
        .map(|value| value as i64)
}
