//! Basic processing integration tests

use super::{fixed_width_line, flat_months, write_data_file};
use crate::config::HddConfig;
use crate::models::TrendDirection;
use crate::processor::{HddProcessor, format_years};
use std::fs;
use tempfile::TempDir;

fn config_in(temp_dir: &TempDir, lines: &[String]) -> HddConfig {
    let input_path = write_data_file(temp_dir.path(), lines);
    HddConfig::default()
        .with_input_path(input_path)
        .with_output_path(temp_dir.path().join("winter.xlsx"))
        .with_chart_path(temp_dir.path().join("winter.svg"))
}

#[test]
fn test_basic_processing_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let mut lines: Vec<String> = (1950..=1955)
        .map(|year| fixed_width_line("045", year, &flat_months(1000.0 - (year - 1950) as f64 * 10.0)))
        .collect();
    lines.push(fixed_width_line("044", 1950, &flat_months(5.0)));
    lines.push(fixed_width_line("046", 1951, &flat_months(5.0)));

    let config = config_in(&temp_dir, &lines);
    let processor = HddProcessor::new(config.clone()).unwrap();
    let stats = processor.process().unwrap();

    assert_eq!(stats.rows_read, 8);
    assert_eq!(stats.rows_in_region, 6);
    assert_eq!(stats.rows_in_window, 6);
    assert_eq!(stats.aggregates, 5);
    assert_eq!(stats.distinct_years, vec![1950, 1951, 1952, 1953, 1954, 1955]);
    assert_eq!(stats.direction, Some(TrendDirection::Decreasing));
    assert!(stats.slope.unwrap() < 0.0);

    assert!(config.output_path.exists());
    assert!(fs::metadata(&config.output_path).unwrap().len() > 0);
    assert_eq!(stats.chart_path, config.chart_path);
    assert!(config.chart_path.unwrap().exists());
}

#[test]
fn test_years_at_or_after_bound_are_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let lines: Vec<String> = [2020, 2021, 2022, 2023, 2025]
        .iter()
        .map(|&year| fixed_width_line("045", year, &flat_months(800.0)))
        .collect();

    let processor = HddProcessor::new(config_in(&temp_dir, &lines)).unwrap();
    let stats = processor.process().unwrap();

    // Distinct years are reported before the bound applies
    assert_eq!(stats.distinct_years, vec![2020, 2021, 2022, 2023, 2025]);
    assert_eq!(stats.rows_in_window, 3);
    assert_eq!(stats.aggregates, 2);
}

#[test]
fn test_three_years_yield_two_winters() {
    let temp_dir = TempDir::new().unwrap();
    let lines = vec![
        fixed_width_line("045", 1950, &flat_months(100.0)),
        fixed_width_line("045", 1951, &flat_months(200.0)),
        fixed_width_line("045", 1952, &flat_months(300.0)),
    ];

    let processor = HddProcessor::new(config_in(&temp_dir, &lines)).unwrap();
    let stats = processor.process().unwrap();

    assert_eq!(stats.aggregates, 2);
    assert_eq!(stats.direction, Some(TrendDirection::Increasing));
}

#[test]
fn test_sentinel_rows_are_imputed_in_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let lines = vec![
        fixed_width_line("045", 1950, &flat_months(100.0)),
        fixed_width_line("045", 1951, &flat_months(-9999.0)),
        fixed_width_line("045", 1952, &flat_months(100.0)),
    ];

    let processor = HddProcessor::new(config_in(&temp_dir, &lines)).unwrap();
    let stats = processor.process().unwrap();

    assert_eq!(stats.imputed_cells, 12);
    assert_eq!(stats.unresolved_cells, 0);
    assert_eq!(stats.aggregates, 2);
    assert_eq!(stats.direction, Some(TrendDirection::Flat));
}

#[test]
fn test_flat_series_reports_flat_trend() {
    let temp_dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1950..=1960)
        .map(|year| fixed_width_line("045", year, &flat_months(700.0)))
        .collect();

    let processor = HddProcessor::new(config_in(&temp_dir, &lines)).unwrap();
    let stats = processor.process().unwrap();

    assert_eq!(stats.slope, Some(0.0));
    assert_eq!(stats.direction, Some(TrendDirection::Flat));
}

#[test]
fn test_parquet_companion_and_no_chart() {
    let temp_dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1950..=1953)
        .map(|year| fixed_width_line("045", year, &flat_months(500.0)))
        .collect();
    let parquet_path = temp_dir.path().join("out").join("winter.parquet");
    let config = config_in(&temp_dir, &lines)
        .without_chart()
        .with_parquet_path(&parquet_path);

    let processor = HddProcessor::new(config).unwrap();
    let stats = processor.process().unwrap();

    assert!(parquet_path.exists());
    assert_eq!(stats.parquet_path, Some(parquet_path));
    assert!(stats.chart_path.is_none());
    assert!(!temp_dir.path().join("winter.svg").exists());
}

#[test]
fn test_single_winter_reports_colder_trend() {
    let temp_dir = TempDir::new().unwrap();
    let lines = vec![
        fixed_width_line("045", 1950, &flat_months(400.0)),
        fixed_width_line("045", 1951, &flat_months(400.0)),
    ];
    let config = config_in(&temp_dir, &lines);

    let processor = HddProcessor::new(config.clone()).unwrap();
    let stats = processor.process().unwrap();

    assert_eq!(stats.aggregates, 1);
    assert!(stats.slope.unwrap() > 0.0);
    assert_eq!(stats.direction, Some(TrendDirection::Increasing));
    assert!(config.chart_path.unwrap().exists());
}

#[test]
fn test_format_years() {
    assert_eq!(format_years(&[1950, 1951]), "[1950 1951]");
    assert_eq!(format_years(&[1895]), "[1895]");
    assert_eq!(format_years(&[]), "[]");
}
