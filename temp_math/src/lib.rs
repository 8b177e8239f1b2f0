//! # Temp Math
//!
//! Numeric building blocks for temperature trend forecasting.
//! This crate provides the least-squares, windowed-average and range
//! calculations that the forecasting engine composes into predictions.

use thiserror::Error;

// Calculation modules
pub mod averages;
pub mod bounds;
pub mod regression;

pub use averages::{average_step_change, centered_moving_average, mean, trailing_window};
pub use bounds::{extent, Extent};
pub use regression::{adjusted_r_squared, evaluate_quadratic, fit_quadratic, QuadraticFit};

/// Errors that can occur in forecasting math
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MathError::InsufficientData("need 1 value".to_string());
        assert_eq!(err.to_string(), "Insufficient data for calculation: need 1 value");
    }
}
