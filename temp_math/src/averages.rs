//! Windowed average calculations
//!
//! Contains the averaging helpers used by the moving-average forecast:
//! - Arithmetic mean
//! - Trailing window selection (clamped to the available data)
//! - Average per-step change across a window
//! - Centered moving average (used to derive smoothed series)

use crate::{MathError, Result};

/// Arithmetic mean of a slice
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot average an empty slice".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Return the last `window` values, or all of them when fewer are available
pub fn trailing_window(values: &[f64], window: usize) -> &[f64] {
    let start = values.len().saturating_sub(window);
    &values[start..]
}

/// Average change per step between the first and last value of a window
///
/// The span of a window of `n` values covers `n - 1` steps. A single value
/// has no span and therefore no change.
pub fn average_step_change(window: &[f64]) -> Result<f64> {
    match window {
        [] => Err(MathError::InsufficientData(
            "Cannot compute a rate of change without values".to_string(),
        )),
        [_] => Ok(0.0),
        [first, .., last] => Ok((last - first) / (window.len() - 1) as f64),
    }
}

/// Centered moving average with a shrinking window at the edges
///
/// Each output value is the mean of the input values within `window / 2`
/// positions on either side. Near the start and end of the series only the
/// available neighbours are used.
pub fn centered_moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(MathError::InvalidInput(
            "Window must be greater than zero".to_string(),
        ));
    }

    let half = window / 2;
    let smoothed = (0..values.len())
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(values.len() - 1);
            let span = &values[lo..=hi];
            span.iter().sum::<f64>() / span.len() as f64
        })
        .collect();

    Ok(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let avg = mean(&[26.0, 26.2, 26.4, 26.6, 26.8]).unwrap();
        assert_relative_eq!(avg, 26.4, epsilon = 1e-12);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_trailing_window_clamps() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(trailing_window(&values, 5), &[1.0, 2.0, 3.0]);
        assert_eq!(trailing_window(&values, 2), &[2.0, 3.0]);
        assert!(trailing_window(&[], 5).is_empty());
    }

    #[test]
    fn test_average_step_change() {
        let change = average_step_change(&[26.0, 26.2, 26.4, 26.6, 26.8]).unwrap();
        assert_relative_eq!(change, 0.2, epsilon = 1e-12);

        // Shorter windows divide by their own span
        let change = average_step_change(&[26.0, 26.6]).unwrap();
        assert_relative_eq!(change, 0.6, epsilon = 1e-12);

        assert_eq!(average_step_change(&[26.0]).unwrap(), 0.0);
        assert!(average_step_change(&[]).is_err());
    }

    #[test]
    fn test_centered_moving_average() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let smoothed = centered_moving_average(&values, 5).unwrap();

        assert_eq!(smoothed.len(), values.len());
        assert_relative_eq!(smoothed[0], 2.0); // mean of 1, 2, 3
        assert_relative_eq!(smoothed[2], 3.0); // mean of 1..=5
        assert_relative_eq!(smoothed[5], 5.0); // mean of 4, 5, 6

        assert!(centered_moving_average(&values, 0).is_err());
        assert!(centered_moving_average(&[], 5).unwrap().is_empty());
    }
}
