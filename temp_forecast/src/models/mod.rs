//! Forecasting models for annual temperature series

use crate::data::ObservedYear;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

pub mod moving_average;
pub mod polynomial;

pub use moving_average::{
    predict_moving_average, MovingAverageExtrapolation, MovingAverageForecast,
};
pub use polynomial::{fit_polynomial, predict_polynomial, PolynomialFit, PolynomialRegression};

/// The models a user can choose between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionModel {
    /// Degree-2 least-squares regression on the smoothed series
    Polynomial,
    /// Extrapolation of the trailing smoothed average and its yearly change
    MovingAverage,
}

impl PredictionModel {
    /// Both models, in the order they are offered
    pub const ALL: [PredictionModel; 2] = [PredictionModel::Polynomial, PredictionModel::MovingAverage];

    /// Human-readable model name
    pub fn display_name(&self) -> &'static str {
        match self {
            PredictionModel::Polynomial => "Polynomial Regression (degree 2)",
            PredictionModel::MovingAverage => "Moving Average",
        }
    }
}

impl fmt::Display for PredictionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            PredictionModel::Polynomial => "polynomial",
            PredictionModel::MovingAverage => "moving-average",
        };
        f.write_str(key)
    }
}

impl FromStr for PredictionModel {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "polynomial" | "poly" | "regression" => Ok(PredictionModel::Polynomial),
            "moving-average" | "moving_average" | "movingaverage" | "ma" => {
                Ok(PredictionModel::MovingAverage)
            }
            other => Err(ForecastError::InvalidParameter(format!(
                "Unknown model '{}', expected 'polynomial' or 'moving-average'",
                other
            ))),
        }
    }
}

/// A model fitted to a series that can predict the temperature of any year
pub trait TrainedForecastModel: Debug {
    /// Predicted temperature (°C) for the given year
    fn predict(&self, year: i32) -> f64;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on an observed series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model; an empty series yields a zero-valued model
    fn train(&self, series: &[ObservedYear]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}
