//! Error handling integration tests

use super::{fixed_width_line, flat_months, write_data_file};
use crate::config::HddConfig;
use crate::error::HddError;
use crate::processor::HddProcessor;
use tempfile::TempDir;

#[test]
fn test_nonexistent_input_path() {
    let temp_dir = TempDir::new().unwrap();
    let nonexistent_path = temp_dir.path().join("nonexistent");
    let config = HddConfig::default()
        .with_input_path(&nonexistent_path)
        .with_output_path(temp_dir.path().join("out.xlsx"));

    match HddProcessor::new(config) {
        Err(HddError::InputNotFound { path }) => assert_eq!(path, nonexistent_path),
        _ => panic!("Expected InputNotFound error"),
    }
}

#[test]
fn test_no_rows_for_region() {
    let temp_dir = TempDir::new().unwrap();
    let lines = vec![
        fixed_width_line("044", 1950, &flat_months(100.0)),
        fixed_width_line("044", 1951, &flat_months(100.0)),
    ];
    let output_path = temp_dir.path().join("out.xlsx");
    let config = HddConfig::default()
        .with_input_path(write_data_file(temp_dir.path(), &lines))
        .with_output_path(&output_path)
        .without_chart();

    let result = HddProcessor::new(config).unwrap().process();

    assert!(matches!(result, Err(HddError::InsufficientData { .. })));
    // The spreadsheet is written before the trend fit fails
    assert!(output_path.exists());
}

#[test]
fn test_all_missing_leaves_no_winters() {
    let temp_dir = TempDir::new().unwrap();
    let lines = vec![
        fixed_width_line("045", 1950, &flat_months(-9999.0)),
        fixed_width_line("045", 1951, &flat_months(-9999.0)),
    ];
    let config = HddConfig::default()
        .with_input_path(write_data_file(temp_dir.path(), &lines))
        .with_output_path(temp_dir.path().join("out.xlsx"))
        .without_chart();

    let result = HddProcessor::new(config).unwrap().process();
    assert!(matches!(result, Err(HddError::InsufficientData { .. })));
}

#[test]
fn test_garbage_lines_do_not_abort() {
    let temp_dir = TempDir::new().unwrap();
    let mut lines = vec!["not a fixed width record".to_string(), String::new()];
    lines.extend((1950..=1953).map(|year| fixed_width_line("045", year, &flat_months(100.0))));
    let config = HddConfig::default()
        .with_input_path(write_data_file(temp_dir.path(), &lines))
        .with_output_path(temp_dir.path().join("out.xlsx"))
        .without_chart();

    let stats = HddProcessor::new(config).unwrap().process().unwrap();
    assert_eq!(stats.rows_read, 5);
    assert_eq!(stats.rows_in_region, 4);
    assert_eq!(stats.aggregates, 3);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_data_file(
        temp_dir.path(),
        &[fixed_width_line("045", 1950, &flat_months(1.0))],
    );
    let config = HddConfig::default()
        .with_input_path(&input_path)
        .with_output_path(&input_path);

    assert!(matches!(
        HddProcessor::new(config),
        Err(HddError::Configuration { .. })
    ));
}
