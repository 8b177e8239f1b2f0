//! # PH Temp
//!
//! Umbrella crate for the Philippine temperature forecast engine.
//!
//! - [`math`]: averages, extents and least-squares fitting
//! - [`forecast`]: data loading, models, trend lines and simulations
//! - [`dashboard`]: presentation state, chart series and text views
//!
//! ## Example
//!
//! ```
//! use ph_temp_workspace::forecast::utils::synthetic_series;
//! use ph_temp_workspace::{forecast_report, PredictionModel, PredictionRequest};
//!
//! let series = synthetic_series(1901, 122, 25.6, 0.01, 0.0, 7).unwrap();
//! let request = PredictionRequest::new(PredictionModel::MovingAverage, 2030);
//!
//! let report = forecast_report(&series, &request, Default::default());
//! assert!(report.is_success());
//! assert_eq!(report.trend_line.last().unwrap().year, 2030);
//! ```

pub use temp_dashboard as dashboard;
pub use temp_forecast as forecast;
pub use temp_math as math;

pub use temp_forecast::{
    HistoricalSeries, PredictionModel, PredictionRequest, SimulationConfig, SimulationReport,
    Simulator,
};

/// Run one request against a series and return a presentation-ready report
///
/// An invalid configuration is reported the same way as a rejected request.
pub fn forecast_report(
    series: &HistoricalSeries,
    request: &PredictionRequest,
    config: SimulationConfig,
) -> SimulationReport {
    let outcome = Simulator::new(config).and_then(|sim| sim.run(series.records(), request));
    SimulationReport::from_outcome(request, outcome)
}
