//! Least-squares polynomial regression
//!
//! Fits `y = a·x² + b·x + c` by solving the normal equations. When the
//! observations cannot support a quadratic (fewer than three distinct x
//! values) the fit falls back to a straight line, then to a constant, so a
//! non-empty input always yields usable coefficients.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Number of predictors in the quadratic model (x and x²)
pub const QUADRATIC_PREDICTORS: usize = 2;

const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Result of a quadratic least-squares fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticFit {
    /// Coefficients `[a, b, c]` of `a·x² + b·x + c`
    pub coefficients: [f64; 3],
    /// Unadjusted coefficient of determination
    pub r_squared: f64,
    /// Adjusted R², or the unadjusted value when the sample is too small
    pub r_squared_adjusted: f64,
    /// Whether the degrees-of-freedom adjustment could be applied
    pub adjustment_applied: bool,
    /// Number of observations used
    pub n_observations: usize,
    /// Degree of the polynomial actually fitted (0, 1 or 2)
    pub degree: usize,
}

impl QuadraticFit {
    /// Evaluate the fitted polynomial at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_quadratic(&self.coefficients, x)
    }
}

/// Evaluate `a·x² + b·x + c` for coefficients `[a, b, c]`
pub fn evaluate_quadratic(coefficients: &[f64; 3], x: f64) -> f64 {
    let [a, b, c] = *coefficients;
    (a * x + b) * x + c
}

/// Adjusted R² for `n` observations and `predictors` explanatory variables
///
/// Returns `None` when `n - predictors - 1` is not positive.
pub fn adjusted_r_squared(r_squared: f64, n: usize, predictors: usize) -> Option<f64> {
    let dof = n.checked_sub(predictors + 1).filter(|&d| d > 0)?;
    Some(1.0 - (1.0 - r_squared) * (n - 1) as f64 / dof as f64)
}

/// Fit a quadratic to the given points by ordinary least squares
pub fn fit_quadratic(xs: &[f64], ys: &[f64]) -> Result<QuadraticFit> {
    if xs.len() != ys.len() {
        return Err(MathError::InvalidInput(format!(
            "x and y lengths differ ({} vs {})",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Err(MathError::InsufficientData(
            "At least one observation is required for regression".to_string(),
        ));
    }
    if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
        return Err(MathError::InvalidInput(
            "Regression inputs must be finite".to_string(),
        ));
    }

    let (coefficients, degree) = match solve_quadratic(xs, ys) {
        Some(coefficients) => (coefficients, 2),
        None => match solve_linear(xs, ys) {
            Some([b, c]) => ([0.0, b, c], 1),
            None => ([0.0, 0.0, ys.iter().sum::<f64>() / ys.len() as f64], 0),
        },
    };

    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(MathError::CalculationError(
            "Regression produced non-finite coefficients".to_string(),
        ));
    }

    let r_squared = coefficient_of_determination(xs, ys, &coefficients);
    let n = xs.len();
    let adjusted = adjusted_r_squared(r_squared, n, QUADRATIC_PREDICTORS);

    Ok(QuadraticFit {
        coefficients,
        r_squared,
        r_squared_adjusted: adjusted.unwrap_or(r_squared),
        adjustment_applied: adjusted.is_some(),
        n_observations: n,
        degree,
    })
}

/// Solve the 3x3 normal equations; `None` if they are singular
///
/// The system is solved in the standardized variable `u = (x - m) / s` and
/// the coefficients are mapped back to `x` afterwards.
fn solve_quadratic(xs: &[f64], ys: &[f64]) -> Option<[f64; 3]> {
    let n = xs.len() as f64;
    let m = xs.iter().sum::<f64>() / n;
    let spread = (xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n).sqrt();
    if spread < 1e-10 {
        return None;
    }

    let [alpha, beta, gamma] = solve_standardized(xs.iter().map(|x| (x - m) / spread), ys)?;

    let s2 = spread * spread;
    Some([
        alpha / s2,
        beta / spread - 2.0 * alpha * m / s2,
        alpha * m * m / s2 - beta * m / spread + gamma,
    ])
}

fn solve_standardized<I>(us: I, ys: &[f64]) -> Option<[f64; 3]>
where
    I: Iterator<Item = f64>,
{
    let mut s = [0.0_f64; 5]; // sums of u^0 .. u^4
    let mut t = [0.0_f64; 3]; // sums of y·u^0 .. y·u^2

    for (x, &y) in us.zip(ys) {
        let mut p = 1.0;
        for (k, sk) in s.iter_mut().enumerate() {
            *sk += p;
            if k < 3 {
                t[k] += y * p;
            }
            p *= x;
        }
    }

    let mut m = [
        [s[4], s[3], s[2], t[2]],
        [s[3], s[2], s[1], t[1]],
        [s[2], s[1], s[0], t[0]],
    ];
    let scale = m
        .iter()
        .flat_map(|row| row[..3].iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    // Gaussian elimination with partial pivoting
    for col in 0..3 {
        let pivot = (col..3).max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))?;
        if m[pivot][col].abs() <= SINGULAR_TOLERANCE * scale {
            return None;
        }
        m.swap(col, pivot);

        for row in col + 1..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut solution = [0.0_f64; 3];
    for row in (0..3).rev() {
        let tail: f64 = (row + 1..3).map(|k| m[row][k] * solution[k]).sum();
        solution[row] = (m[row][3] - tail) / m[row][row];
    }

    Some(solution)
}

/// Straight-line fit `[slope, intercept]`; `None` if all x are equal
fn solve_linear(xs: &[f64], ys: &[f64]) -> Option<[f64; 2]> {
    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        numerator += (x - x_mean) * (y - y_mean);
        denominator += (x - x_mean) * (x - x_mean);
    }

    if denominator.abs() < 1e-10 {
        return None;
    }

    let slope = numerator / denominator;
    Some([slope, y_mean - slope * x_mean])
}

fn coefficient_of_determination(xs: &[f64], ys: &[f64], coefficients: &[f64; 3]) -> f64 {
    let y_mean = ys.iter().sum::<f64>() / ys.len() as f64;

    let mut ss_total = 0.0;
    let mut ss_residual = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        ss_total += (y - y_mean).powi(2);
        ss_residual += (y - evaluate_quadratic(coefficients, x)).powi(2);
    }

    // A flat series is explained perfectly by any fit that reproduces it
    if ss_total < SINGULAR_TOLERANCE {
        return if ss_residual < SINGULAR_TOLERANCE { 1.0 } else { 0.0 };
    }

    1.0 - ss_residual / ss_total
}
