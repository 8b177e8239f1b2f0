//! Simulation orchestration: validate the request, run a model, explain it

use crate::config::{OutOfRangePolicy, SimulationConfig};
use crate::data::ObservedYear;
use crate::error::{ForecastError, Result};
use crate::models::{
    ForecastModel, MovingAverageExtrapolation, MovingAverageForecast, PolynomialFit,
    PolynomialRegression, PredictionModel, TrainedForecastModel,
};
use crate::trend::{trend_line_from, TrendPoint};
use crate::validation::{validate_against_history, RangeCheck};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A user's request for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Model to run
    pub model: PredictionModel,
    /// Year to forecast
    pub target_year: i32,
}

impl PredictionRequest {
    pub fn new(model: PredictionModel, target_year: i32) -> Self {
        Self { model, target_year }
    }
}

/// Model-specific statistics behind a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum ModelDiagnostics {
    Polynomial(PolynomialFit),
    MovingAverage(MovingAverageForecast),
}

/// Output of a successful simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted temperature (°C)
    pub prediction: f64,
    /// Human-readable description of the model and its inputs
    pub explanation: Vec<String>,
    /// Present when the prediction leaves the historical band
    pub warning: Option<String>,
    /// Points from the last observed year to the target year
    pub trend_line: Vec<TrendPoint>,
    /// Band used for the plausibility check
    pub range: RangeCheck,
    /// Statistics of the model that produced the prediction
    pub diagnostics: ModelDiagnostics,
}

/// Run a simulation with the default configuration
pub fn run_simulation(series: &[ObservedYear], request: &PredictionRequest) -> Result<PredictionResult> {
    Simulator::default().run(series, request)
}

/// Runs prediction requests under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Create a simulator after validating the configuration
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validate the request, run the chosen model and assemble the result
    pub fn run(&self, series: &[ObservedYear], request: &PredictionRequest) -> Result<PredictionResult> {
        if request.target_year < self.config.min_target_year {
            return Err(ForecastError::InvalidYear {
                requested: request.target_year,
                minimum: self.config.min_target_year,
            });
        }

        let Some(last) = series.last() else {
            return Err(ForecastError::EmptyDataset);
        };

        debug!(
            model = %request.model,
            target_year = request.target_year,
            observations = series.len(),
            "running simulation"
        );

        let target = request.target_year;
        let (prediction, explanation, diagnostics, trained) = match request.model {
            PredictionModel::Polynomial => {
                let trained = PolynomialRegression::new(self.config.base_year).train(series)?;
                let fit = trained.fit().clone();
                let prediction = fit.predict(target);
                let explanation = self.explain_polynomial(series, target, prediction, &fit);
                let trained: Box<dyn TrainedForecastModel> = Box::new(trained);
                (prediction, explanation, ModelDiagnostics::Polynomial(fit), trained)
            }
            PredictionModel::MovingAverage => {
                let trained = MovingAverageExtrapolation::new(self.config.moving_average_window)?
                    .train(series)?;
                let forecast = trained.forecast(target);
                let explanation = self.explain_moving_average(last, target, &forecast);
                let trained: Box<dyn TrainedForecastModel> = Box::new(trained);
                (
                    forecast.prediction,
                    explanation,
                    ModelDiagnostics::MovingAverage(forecast),
                    trained,
                )
            }
        };

        if !prediction.is_finite() {
            return Err(ForecastError::CalculationError(format!(
                "{} produced a non-finite prediction for {}",
                request.model.display_name(),
                target
            )));
        }

        let range = validate_against_history(prediction, series, self.config.history_margin);
        let warning = range.warning(prediction);

        let keep_trend_line = match (&warning, self.config.out_of_range_policy) {
            (Some(_), OutOfRangePolicy::SuppressTrendLine) => {
                warn!(
                    prediction,
                    allowed_min = range.allowed_min,
                    allowed_max = range.allowed_max,
                    "prediction outside historical range, trend line suppressed"
                );
                false
            }
            (Some(_), OutOfRangePolicy::KeepTrendLine) => {
                warn!(
                    prediction,
                    allowed_min = range.allowed_min,
                    allowed_max = range.allowed_max,
                    "prediction outside historical range"
                );
                true
            }
            (None, _) => true,
        };

        let trend_line = if keep_trend_line {
            trend_line_from(
                series,
                prediction,
                target,
                &*trained,
                self.config.trend_segments,
            )
        } else {
            Vec::new()
        };

        info!(
            model = %request.model,
            target_year = target,
            prediction,
            points = trend_line.len(),
            "simulation complete"
        );

        Ok(PredictionResult {
            prediction,
            explanation,
            warning,
            trend_line,
            range,
            diagnostics,
        })
    }

    fn explain_polynomial(
        &self,
        series: &[ObservedYear],
        target: i32,
        prediction: f64,
        fit: &PolynomialFit,
    ) -> Vec<String> {
        let mut lines = vec![
            format!("Model: {}", PredictionModel::Polynomial.display_name()),
            format!("Target year: {}", target),
            format!("Predicted temperature: {:.2}°C", prediction),
        ];

        if fit.adjustment_applied {
            lines.push(format!("Adjusted R²: {:.4}", fit.r_squared_adjusted));
        } else {
            lines.push(format!(
                "R²: {:.4} (too few years to adjust for model complexity)",
                fit.r_squared
            ));
        }

        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            lines.push(format!(
                "Fitted on {} years of smoothed data ({} to {}), x = year - {}",
                fit.n_observations, first.year, last.year, fit.base_year
            ));
        }
        lines.push(format!("Equation: {}", fit.equation()));

        lines
    }

    fn explain_moving_average(
        &self,
        last: &ObservedYear,
        target: i32,
        forecast: &MovingAverageForecast,
    ) -> Vec<String> {
        vec![
            format!(
                "Model: {}-Year {}",
                self.config.moving_average_window,
                PredictionModel::MovingAverage.display_name()
            ),
            format!("Target year: {}", target),
            format!("Predicted temperature: {:.2}°C", forecast.prediction),
            format!(
                "Average of last {} smoothed values: {:.2}°C",
                forecast.window_size, forecast.avg_temp
            ),
            format!("Average yearly change: {:+.4}°C/year", forecast.yearly_change),
            format!(
                "Projected {} years beyond {}",
                i64::from(target) - i64::from(last.year),
                last.year
            ),
        ]
    }
}

/// Presentation-ready record of one simulation attempt
///
/// Failed attempts keep a zero prediction and carry the user-facing error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub model: PredictionModel,
    pub target_year: i32,
    pub prediction: f64,
    pub explanation: Vec<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub trend_line: Vec<TrendPoint>,
}

impl SimulationReport {
    /// Convert the outcome of [`Simulator::run`] into a report
    pub fn from_outcome(request: &PredictionRequest, outcome: Result<PredictionResult>) -> Self {
        match outcome {
            Ok(result) => Self {
                model: request.model,
                target_year: request.target_year,
                prediction: result.prediction,
                explanation: result.explanation,
                warning: result.warning,
                error: None,
                trend_line: result.trend_line,
            },
            Err(err) => {
                warn!(error = %err, "simulation rejected");
                Self::rejected(request, err.user_message())
            }
        }
    }

    /// Report for a request that could not be run
    pub fn rejected(request: &PredictionRequest, message: impl Into<String>) -> Self {
        Self {
            model: request.model,
            target_year: request.target_year,
            prediction: 0.0,
            explanation: Vec::new(),
            warning: None,
            error: Some(message.into()),
            trend_line: Vec::new(),
        }
    }

    /// Whether the simulation produced a prediction
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
