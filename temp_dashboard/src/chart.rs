//! Chart-ready series sharing one year axis

use crate::state::DashboardState;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use temp_forecast::{HistoricalSeries, TrendPoint};

/// One plotted line; `None` marks a year the line has no value for
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartLine {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// Observed annual mean, observed smoothed mean and projected trend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// Year labels of the shared axis, ascending
    pub labels: Vec<String>,
    pub annual_mean: ChartLine,
    pub smoothed: ChartLine,
    pub projection: ChartLine,
}

#[derive(Default)]
struct AxisRow {
    annual_mean: Option<f64>,
    smoothed: Option<f64>,
    projection: Option<f64>,
}

impl ChartData {
    /// Merge observations and trend points onto the union of their years
    pub fn build(series: &HistoricalSeries, trend_line: &[TrendPoint]) -> Self {
        let mut rows: BTreeMap<i32, AxisRow> = BTreeMap::new();

        for record in series.records() {
            let row = rows.entry(record.year).or_default();
            row.annual_mean = Some(record.annual_mean);
            row.smoothed = Some(record.five_year_smooth);
        }
        for point in trend_line {
            rows.entry(point.year).or_default().projection = Some(point.temperature);
        }

        let labels = rows.keys().map(|year| year.to_string()).collect();
        let line = |label: &str, pick: fn(&AxisRow) -> Option<f64>| ChartLine {
            label: label.to_string(),
            values: rows.values().map(pick).collect(),
        };

        Self {
            labels,
            annual_mean: line("Annual Mean", |r| r.annual_mean),
            smoothed: line("5-Year Smooth", |r| r.smoothed),
            projection: line("Projected Trend", |r| r.projection),
        }
    }

    /// Chart for the current dashboard state; empty until data is loaded
    pub fn from_state(state: &DashboardState) -> Self {
        let Some(series) = state.series() else {
            return Self::default();
        };

        let trend: &[TrendPoint] = state
            .report
            .as_ref()
            .map(|r| r.trend_line.as_slice())
            .unwrap_or(&[]);

        Self::build(series, trend)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty-printed JSON to `path`
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
