//! Utility functions for the temp_forecast crate

use crate::data::{HistoricalSeries, ObservedYear};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use temp_math::centered_moving_average;

/// Generate a reproducible synthetic temperature series
///
/// # Arguments
/// * `start_year` - First year of the series
/// * `years` - Number of years to generate
/// * `base_temp` - Annual mean (°C) in the first year
/// * `trend` - Warming per year (°C)
/// * `noise` - Maximum absolute random deviation per year (°C)
/// * `seed` - Random seed
///
/// The smoothed column is a centered 5-year average of the generated annual means.
pub fn synthetic_series(
    start_year: i32,
    years: usize,
    base_temp: f64,
    trend: f64,
    noise: f64,
    seed: u64,
) -> Result<HistoricalSeries> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = noise.abs();

    let annual: Vec<f64> = (0..years)
        .map(|i| {
            let jitter = if noise > 0.0 {
                rng.gen_range(-noise..=noise)
            } else {
                0.0
            };
            base_temp + trend * i as f64 + jitter
        })
        .collect();

    let smoothed = centered_moving_average(&annual, 5)?;

    let records = annual
        .iter()
        .zip(smoothed)
        .enumerate()
        .map(|(i, (&mean, smooth))| ObservedYear::new(start_year + i as i32, mean, smooth))
        .collect();

    HistoricalSeries::new(records)
}
