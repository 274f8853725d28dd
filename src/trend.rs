//! Least-squares trend line over the winter series.

use crate::error::{HddError, Result};
use crate::models::{TrendDirection, WinterAggregate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Degree-1 polynomial fit `hdd = slope * year + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn evaluate(&self, year: f64) -> f64 {
        self.slope * year + self.intercept
    }

    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_slope(self.slope)
    }
}

/// Fit a least-squares line of winter HDD against winter year.
///
/// An empty series is an error. When every point shares one year (a single
/// winter included) the system is rank deficient and the minimum-norm
/// solution is returned instead: the coefficients lie along `(year, 1)`,
/// giving `slope = year * mean_hdd / (year^2 + 1)`.
pub fn fit_trend(aggregates: &[WinterAggregate]) -> Result<TrendLine> {
    if aggregates.is_empty() {
        return Err(HddError::InsufficientData {
            reason: "need at least 1 winter aggregate, found 0".to_string(),
        });
    }

    let n = aggregates.len() as f64;
    let mean_x = aggregates.iter().map(|a| a.winter_year as f64).sum::<f64>() / n;
    let mean_y = aggregates.iter().map(|a| a.winter_hdd).sum::<f64>() / n;

    let (covariance, variance) = aggregates.iter().fold((0.0, 0.0), |(cov, var), a| {
        let dx = a.winter_year as f64 - mean_x;
        let dy = a.winter_hdd - mean_y;
        (cov + dx * dy, var + dx * dx)
    });

    if variance == 0.0 {
        warn!(
            "Trend fit is rank deficient: all {} winters fall in {}",
            aggregates.len(),
            mean_x
        );
        let scale = mean_y / (mean_x * mean_x + 1.0);
        return Ok(TrendLine {
            slope: mean_x * scale,
            intercept: scale,
        });
    }

    let slope = covariance / variance;
    Ok(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
