//! Plain-text rendering of dashboard blocks

use crate::state::{DashboardState, DataStatus};
use std::fmt::Write;
use temp_forecast::{HistoricalSeries, SimulationReport};

/// Explanation, warning and error blocks of a report
pub fn render_report(report: &SimulationReport) -> String {
    let mut out = String::new();

    if let Some(error) = &report.error {
        let _ = writeln!(out, "Error: {}", error);
        return out;
    }

    for line in &report.explanation {
        let _ = writeln!(out, "{}", line);
    }

    if let Some(warning) = &report.warning {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", warning);
    }

    if !report.trend_line.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Projected trend:");
        for point in &report.trend_line {
            let _ = writeln!(out, "  {:>6}  {:>6.2}°C", point.year_label, point.temperature);
        }
    }

    out
}

/// One-line description of the data status
pub fn render_status(state: &DashboardState) -> String {
    match &state.data {
        DataStatus::Loading => "Loading temperature data...".to_string(),
        DataStatus::Ready(series) => match series.span() {
            Some((first, last)) => {
                format!("{} years of data ({} to {})", series.len(), first, last)
            }
            None => "No temperature data available.".to_string(),
        },
        DataStatus::Empty => "No temperature data available.".to_string(),
        DataStatus::Failed(message) => message.clone(),
    }
}

/// Summary statistics of a series
pub fn render_summary(series: &HistoricalSeries) -> String {
    let mut out = String::new();

    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        let _ = writeln!(out, "No temperature data available.");
        return out;
    };

    let extent = temp_math::extent(series.annual_means());

    let _ = writeln!(out, "Years:           {} to {} ({} records)", first.year, last.year, series.len());
    if let Some(extent) = extent {
        let _ = writeln!(out, "Annual mean:     {:.2}°C to {:.2}°C", extent.min, extent.max);
    }
    let _ = writeln!(out, "Latest smoothed: {:.2}°C ({})", last.five_year_smooth, last.year);
    let _ = writeln!(
        out,
        "Smoothed change: {:+.2}°C since {}",
        last.five_year_smooth - first.five_year_smooth,
        first.year
    );

    out
}
