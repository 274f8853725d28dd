//! Integration tests for the processor module
//!
//! Runs the full pipeline over small fixed-width files written to temp dirs.

pub mod basic_processing;
pub mod error_handling;

use std::path::{Path, PathBuf};

/// Format one fixed-width line with the given monthly values
pub fn fixed_width_line(code: &str, year: i64, months: &[f64; 12]) -> String {
    let mut line = format!("{code:>3}0{:>2}{year:>4}", 25);
    for value in months {
        line.push_str(&format!("{:>7.1}", value));
    }
    line
}

/// Write lines to `<dir>/data` and return the path
pub fn write_data_file(dir: &Path, lines: &[String]) -> PathBuf {
    let path = dir.join("data");
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

/// Twelve identical monthly values
pub fn flat_months(value: f64) -> [f64; 12] {
    [value; 12]
}
