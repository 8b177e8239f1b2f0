//! # Temp Dashboard
//!
//! `temp_dashboard` is the presentation side of the temperature forecast engine.
//! It keeps no mutable state of its own: every screen is a [`DashboardState`]
//! snapshot, and user actions are [`DashboardEvent`]s folded in by [`reduce`].
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use temp_dashboard::{reduce, ChartData, DashboardEvent, DashboardState};
//! use temp_forecast::source::{CsvFileSource, DataSession};
//! use temp_forecast::{PredictionModel, SimulationConfig};
//!
//! let state = DashboardState::new(Arc::new(SimulationConfig::default()));
//! let session = DataSession::open(&CsvFileSource::new("ph_temperatures.csv"));
//!
//! let state = reduce(&state, DashboardEvent::from_session(&session));
//! let state = reduce(&state, DashboardEvent::ModelSelected(PredictionModel::MovingAverage));
//! let state = reduce(&state, DashboardEvent::TargetYearChanged(2040));
//! let state = reduce(&state, DashboardEvent::SimulateRequested);
//!
//! let chart = ChartData::from_state(&state);
//! println!("{}", chart.to_json().unwrap());
//! ```

use thiserror::Error;

pub mod chart;
pub mod state;
pub mod view;

pub use chart::{ChartData, ChartLine};
pub use state::{reduce, DashboardEvent, DashboardState, DataStatus};

/// Errors raised while preparing dashboard output
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
