//! Configuration management and validation.
//!
//! Only file locations and output toggles are configurable. The region,
//! year bound and imputation window are fixed in [`crate::constants`].

use crate::constants::{DEFAULT_CHART_PATH, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::error::{HddError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration for the winter HDD pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HddConfig {
    /// Fixed-width climate-division input file
    pub input_path: PathBuf,

    /// Spreadsheet receiving the winter series
    pub output_path: PathBuf,

    /// Chart file; `None` skips rendering
    pub chart_path: Option<PathBuf>,

    /// Optional Parquet copy of the winter series
    pub parquet_path: Option<PathBuf>,
}

impl Default for HddConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chart_path: Some(PathBuf::from(DEFAULT_CHART_PATH)),
            parquet_path: None,
        }
    }
}

impl HddConfig {
    /// Read from a different input file
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Write the spreadsheet somewhere else
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Render the chart to this file
    pub fn with_chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chart_path = Some(path.into());
        self
    }

    /// Skip chart rendering
    pub fn without_chart(mut self) -> Self {
        self.chart_path = None;
        self
    }

    /// Also write the winter series as Parquet
    pub fn with_parquet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.parquet_path = Some(path.into());
        self
    }

    /// Reject configurations where one output would overwrite another or the input
    pub fn validate(&self) -> Result<()> {
        let mut outputs = vec![&self.output_path];
        outputs.extend(self.chart_path.iter());
        outputs.extend(self.parquet_path.iter());

        if outputs.iter().any(|path| **path == self.input_path) {
            return Err(HddError::Configuration {
                message: format!(
                    "output would overwrite input file {}",
                    self.input_path.display()
                ),
            });
        }

        for (idx, path) in outputs.iter().enumerate() {
            if outputs[idx + 1..].contains(path) {
                return Err(HddError::Configuration {
                    message: format!("output path {} used more than once", path.display()),
                });
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(HddError::Configuration {
                message: "spreadsheet output path is empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HddConfig::default();
        assert_eq!(config.input_path, PathBuf::from("data"));
        assert_eq!(
            config.output_path,
            PathBuf::from("Winter_HDD_Washington_1895_2022.xlsx")
        );
        assert!(config.chart_path.is_some());
        assert!(config.parquet_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = HddConfig::default()
            .with_input_path("climdiv-hddcst")
            .with_output_path("out.xlsx")
            .without_chart()
            .with_parquet_path("out.parquet");

        assert_eq!(config.input_path, PathBuf::from("climdiv-hddcst"));
        assert_eq!(config.output_path, PathBuf::from("out.xlsx"));
        assert!(config.chart_path.is_none());
        assert_eq!(config.parquet_path, Some(PathBuf::from("out.parquet")));
    }

    #[test]
    fn test_output_overwriting_input_is_rejected() {
        let config = HddConfig::default().with_output_path("data");
        assert!(matches!(
            config.validate(),
            Err(HddError::Configuration { .. })
        ));
    }

    #[test]
    fn test_duplicate_outputs_are_rejected() {
        let config = HddConfig::default()
            .with_chart_path("same.out")
            .with_parquet_path("same.out");
        assert!(config.validate().is_err());
    }
}
