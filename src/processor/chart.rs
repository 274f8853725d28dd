//! Trend chart rendering
//!
//! Draws the winter series with markers and the fitted trend line as a
//! dashed overlay across the same years, then writes the chart as SVG.

use crate::constants::chart;
use crate::error::{HddError, Result};
use crate::models::WinterAggregate;
use crate::trend::TrendLine;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Render the series and trend line to `chart_path`
pub fn render_chart(
    aggregates: &[WinterAggregate],
    trend: &TrendLine,
    chart_path: &Path,
) -> Result<()> {
    if aggregates.is_empty() {
        return Err(HddError::InsufficientData {
            reason: "no winter aggregates to chart".to_string(),
        });
    }

    draw(aggregates, trend, chart_path).map_err(|e| HddError::Chart {
        path: chart_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        "Rendered {} points to chart {}",
        aggregates.len(),
        chart_path.display()
    );

    Ok(())
}

fn draw(
    aggregates: &[WinterAggregate],
    trend: &TrendLine,
    chart_path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let series: Vec<(f64, f64)> = aggregates
        .iter()
        .map(|a| (a.winter_year as f64, a.winter_hdd))
        .collect();
    let fitted: Vec<(f64, f64)> = series
        .iter()
        .map(|&(year, _)| (year, trend.evaluate(year)))
        .collect();

    let (x_range, y_range) = axis_ranges(&series, &fitted);

    let root = SVGBackend::new(chart_path, (chart::WIDTH, chart::HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut plot = ChartBuilder::on(&root)
        .caption(chart::TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    plot.configure_mesh()
        .x_desc(chart::X_LABEL)
        .y_desc(chart::Y_LABEL)
        .x_label_formatter(&|year: &f64| format!("{:.0}", year))
        .draw()?;

    plot.draw_series(LineSeries::new(series.iter().copied(), &BLUE))?
        .label(chart::SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    plot.draw_series(
        series
            .iter()
            .map(|&point| Circle::new(point, 3, BLUE.filled())),
    )?;

    plot.draw_series(DashedLineSeries::new(
        fitted.iter().copied(),
        8,
        5,
        RED.stroke_width(2),
    ))?
    .label(chart::TREND_LABEL)
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    plot.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Axis extents covering both the series and the fitted line, with a margin
fn axis_ranges(series: &[(f64, f64)], fitted: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    let (x_min, x_max) = extent(series.iter().map(|p| p.0));
    let (y_min, y_max) = extent(series.iter().chain(fitted).map(|p| p.1));

    let y_pad = ((y_max - y_min) * 0.05).max(1.0);
    ((x_min - 1.0)..(x_max + 1.0), (y_min - y_pad)..(y_max + y_pad))
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
