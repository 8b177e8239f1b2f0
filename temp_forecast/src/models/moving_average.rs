//! Moving-average extrapolation of the smoothed temperature series

use crate::config::DEFAULT_MOVING_AVERAGE_WINDOW;
use crate::data::ObservedYear;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};
use serde::{Deserialize, Serialize};
use temp_math::{average_step_change, mean, trailing_window};

/// Outcome of a moving-average projection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MovingAverageForecast {
    /// Projected temperature (°C)
    pub prediction: f64,
    /// Mean smoothed temperature over the window (°C)
    pub avg_temp: f64,
    /// Average change per year across the window (°C/year)
    pub yearly_change: f64,
    /// Number of records actually averaged
    pub window_size: usize,
}

/// Project the trailing 5-year smoothed average forward to `target_year`
///
/// An empty series yields an all-zero forecast.
pub fn predict_moving_average(series: &[ObservedYear], target_year: i32) -> MovingAverageForecast {
    TrainedMovingAverage::from_series(series, DEFAULT_MOVING_AVERAGE_WINDOW, String::new())
        .forecast(target_year)
}

/// Moving-average extrapolation model
#[derive(Debug, Clone)]
pub struct MovingAverageExtrapolation {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
}

impl MovingAverageExtrapolation {
    /// Create a new model averaging the last `window` years
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("{}-Year Moving Average", window),
            window,
        })
    }

    /// Window size
    pub fn window(&self) -> usize {
        self.window
    }
}

impl ForecastModel for MovingAverageExtrapolation {
    type Trained = TrainedMovingAverage;

    fn train(&self, series: &[ObservedYear]) -> Result<Self::Trained> {
        Ok(TrainedMovingAverage::from_series(
            series,
            self.window,
            self.name.clone(),
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Trained moving-average extrapolation
#[derive(Debug, Clone)]
pub struct TrainedMovingAverage {
    name: String,
    avg_temp: f64,
    yearly_change: f64,
    window_size: usize,
    last_year: i32,
}

impl TrainedMovingAverage {
    fn from_series(series: &[ObservedYear], window: usize, name: String) -> Self {
        let smoothed: Vec<f64> = series.iter().map(|r| r.five_year_smooth).collect();
        let values = trailing_window(&smoothed, window);

        // Both helpers only fail on an empty window, which is the zero model
        let avg_temp = mean(values).unwrap_or(0.0);
        let yearly_change = average_step_change(values).unwrap_or(0.0);

        Self {
            name,
            avg_temp,
            yearly_change,
            window_size: values.len(),
            last_year: series.last().map_or(0, |r| r.year),
        }
    }

    /// Full projection for `target_year`
    pub fn forecast(&self, target_year: i32) -> MovingAverageForecast {
        if self.window_size == 0 {
            return MovingAverageForecast::default();
        }

        MovingAverageForecast {
            prediction: self.predict(target_year),
            avg_temp: self.avg_temp,
            yearly_change: self.yearly_change,
            window_size: self.window_size,
        }
    }
}

impl TrainedForecastModel for TrainedMovingAverage {
    fn predict(&self, year: i32) -> f64 {
        if self.window_size == 0 {
            return 0.0;
        }
        self.avg_temp + self.yearly_change * (f64::from(year) - f64::from(self.last_year))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
