//! Trend-line points bridging the last observation and the target year

use crate::config::{DEFAULT_BASE_YEAR, DEFAULT_MOVING_AVERAGE_WINDOW};
use crate::data::ObservedYear;
use crate::error::Result;
use crate::models::{
    ForecastModel, MovingAverageExtrapolation, PolynomialRegression, PredictionModel,
    TrainedForecastModel,
};
use serde::{Deserialize, Serialize};

/// One plotted point of the projected trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Year as shown on the chart axis
    pub year_label: String,
    /// Calendar year
    pub year: i32,
    /// Temperature (°C)
    pub temperature: f64,
}

impl TrendPoint {
    pub fn new(year: i32, temperature: f64) -> Self {
        Self {
            year_label: year.to_string(),
            year,
            temperature,
        }
    }
}

/// Generate the trend line for `model` using default model parameters
///
/// See [`trend_line_from`] for the stepping rules.
pub fn generate_trend_line(
    series: &[ObservedYear],
    prediction: f64,
    target_year: i32,
    model: PredictionModel,
    num_segments: u32,
) -> Result<Vec<TrendPoint>> {
    let points = match model {
        PredictionModel::Polynomial => {
            let trained = PolynomialRegression::new(DEFAULT_BASE_YEAR).train(series)?;
            trend_line_from(series, prediction, target_year, &trained, num_segments)
        }
        PredictionModel::MovingAverage => {
            let trained =
                MovingAverageExtrapolation::new(DEFAULT_MOVING_AVERAGE_WINDOW)?.train(series)?;
            trend_line_from(series, prediction, target_year, &trained, num_segments)
        }
    };

    Ok(points)
}

/// Step from the last observed year towards `target_year`
///
/// The line starts at the last observation's smoothed value. Intermediate
/// years are `ceil(span / num_segments)` apart and are predicted by
/// `predictor`. The final point is always `(target_year, prediction)`, so the
/// line ends exactly on the requested year. When the target equals the last
/// observed year the line is that single observation. An empty series gives
/// an empty line.
pub fn trend_line_from<M>(
    series: &[ObservedYear],
    prediction: f64,
    target_year: i32,
    predictor: &M,
    num_segments: u32,
) -> Vec<TrendPoint>
where
    M: TrainedForecastModel + ?Sized,
{
    let Some(last) = series.last() else {
        return Vec::new();
    };

    let mut points = vec![TrendPoint::new(last.year, last.five_year_smooth)];
    if target_year == last.year {
        return points;
    }

    let span = i64::from(target_year) - i64::from(last.year);
    if span > 0 {
        let segments = i64::from(num_segments.max(1));
        let step = ((span + segments - 1) / segments).max(1);

        let mut year = i64::from(last.year) + step;
        while year < i64::from(target_year) {
            // Strictly between two i32 years, so the cast is lossless
            let current = year as i32;
            points.push(TrendPoint::new(current, predictor.predict(current)));
            year += step;
        }
    }

    points.push(TrendPoint::new(target_year, prediction));
    points
}
