//! # Temp Forecast
//!
//! Prediction engine for historical Philippine annual mean temperatures.
//!
//! ## Features
//!
//! - Loading of year/annual-mean/smoothed-mean feeds from CSV or JSON
//! - Explicit data sessions over pluggable temperature sources
//! - Forecasting models (degree-2 polynomial regression, moving-average extrapolation)
//! - Trend lines from the last observation to the target year
//! - Plausibility checks against the historical record
//!
//! ## Quick Start
//!
//! ```no_run
//! use temp_forecast::source::{CsvFileSource, DataSession};
//! use temp_forecast::{PredictionModel, PredictionRequest, Simulator};
//!
//! # fn main() -> temp_forecast::Result<()> {
//! let session = DataSession::open(&CsvFileSource::new("ph_temperatures.csv"))?;
//! let series = session.series();
//!
//! let request = PredictionRequest::new(PredictionModel::Polynomial, 2050);
//! let result = Simulator::default().run(series.records(), &request)?;
//!
//! println!("{:.2}°C", result.prediction);
//! for line in &result.explanation {
//!     println!("{}", line);
//! }
//!
//! session.close();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod simulation;
pub mod source;
pub mod trend;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::config::{OutOfRangePolicy, SimulationConfig};
pub use crate::data::{DataLoader, HistoricalSeries, ObservedYear};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{
    fit_polynomial, predict_moving_average, predict_polynomial, ForecastModel,
    MovingAverageForecast, PolynomialFit, PredictionModel, TrainedForecastModel,
};
pub use crate::simulation::{
    run_simulation, PredictionRequest, PredictionResult, SimulationReport, Simulator,
};
pub use crate::source::{DataSession, TemperatureSource};
pub use crate::trend::{generate_trend_line, TrendPoint};
pub use crate::validation::{validate_against_history, RangeCheck};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
