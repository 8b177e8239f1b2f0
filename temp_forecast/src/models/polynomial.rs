//! Quadratic regression on the smoothed temperature series

use crate::config::DEFAULT_BASE_YEAR;
use crate::data::ObservedYear;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};
use serde::{Deserialize, Serialize};
use temp_math::{evaluate_quadratic, fit_quadratic};
use tracing::debug;

/// Fitted quadratic `a·x² + b·x + c` with `x = year - base_year`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialFit {
    /// Coefficients `[a, b, c]`
    pub coefficients: [f64; 3],
    /// Unadjusted R²
    pub r_squared: f64,
    /// Adjusted R², equal to `r_squared` when `adjustment_applied` is false
    pub r_squared_adjusted: f64,
    /// False when the sample had too few years (n ≤ 3) to adjust R²
    pub adjustment_applied: bool,
    /// Number of years fitted
    pub n_observations: usize,
    /// Year mapped to x = 0
    pub base_year: i32,
}

impl PolynomialFit {
    /// Degenerate fit used for an empty series
    pub fn zero(base_year: i32) -> Self {
        Self {
            coefficients: [0.0; 3],
            r_squared: 0.0,
            r_squared_adjusted: 0.0,
            adjustment_applied: false,
            n_observations: 0,
            base_year,
        }
    }

    /// Evaluate the fitted curve at a calendar year
    pub fn predict(&self, year: i32) -> f64 {
        predict_polynomial(&self.coefficients, year, self.base_year)
    }

    /// Rendered equation, e.g. `y = 0.000120x² + 0.0030x + 25.9000`
    pub fn equation(&self) -> String {
        let [a, b, c] = self.coefficients;
        format!("y = {:.6}x² {} {:.4}x {} {:.4}", a, sign(b), b.abs(), sign(c), c.abs())
    }
}

fn sign(v: f64) -> char {
    if v < 0.0 {
        '-'
    } else {
        '+'
    }
}

/// Fit a quadratic to the smoothed series after shifting years by `base_year`
///
/// Returns a zero-valued fit for an empty series.
pub fn fit_polynomial(series: &[ObservedYear], base_year: i32) -> Result<PolynomialFit> {
    if series.is_empty() {
        return Ok(PolynomialFit::zero(base_year));
    }

    let xs: Vec<f64> = series.iter().map(|r| year_offset(r.year, base_year)).collect();
    let ys: Vec<f64> = series.iter().map(|r| r.five_year_smooth).collect();

    let fit = fit_quadratic(&xs, &ys)?;
    debug!(
        n = fit.n_observations,
        degree = fit.degree,
        r_squared = fit.r_squared,
        "fitted polynomial trend"
    );

    Ok(PolynomialFit {
        coefficients: fit.coefficients,
        r_squared: fit.r_squared,
        r_squared_adjusted: fit.r_squared_adjusted,
        adjustment_applied: fit.adjustment_applied,
        n_observations: fit.n_observations,
        base_year,
    })
}

/// Evaluate the quadratic at `x = target_year - base_year`
pub fn predict_polynomial(coefficients: &[f64; 3], target_year: i32, base_year: i32) -> f64 {
    evaluate_quadratic(coefficients, year_offset(target_year, base_year))
}

/// `year - base_year` without overflowing `i32`
fn year_offset(year: i32, base_year: i32) -> f64 {
    f64::from(year) - f64::from(base_year)
}

/// Polynomial regression model
#[derive(Debug, Clone)]
pub struct PolynomialRegression {
    /// Name of the model
    name: String,
    /// Year mapped to x = 0
    base_year: i32,
}

impl PolynomialRegression {
    /// Create a new model normalizing years against `base_year`
    pub fn new(base_year: i32) -> Self {
        Self {
            name: format!("Polynomial Regression (degree 2, base year {})", base_year),
            base_year,
        }
    }
}

impl Default for PolynomialRegression {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_YEAR)
    }
}

impl ForecastModel for PolynomialRegression {
    type Trained = TrainedPolynomial;

    fn train(&self, series: &[ObservedYear]) -> Result<Self::Trained> {
        let fit = fit_polynomial(series, self.base_year)?;
        if fit.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ForecastError::CalculationError(
                "Polynomial fit produced non-finite coefficients".to_string(),
            ));
        }

        Ok(TrainedPolynomial {
            name: self.name.clone(),
            fit,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Trained polynomial regression
#[derive(Debug, Clone)]
pub struct TrainedPolynomial {
    name: String,
    fit: PolynomialFit,
}

impl TrainedPolynomial {
    /// Fit statistics
    pub fn fit(&self) -> &PolynomialFit {
        &self.fit
    }
}

impl TrainedForecastModel for TrainedPolynomial {
    fn predict(&self, year: i32) -> f64 {
        self.fit.predict(year)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
