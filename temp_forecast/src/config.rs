//! Simulation settings

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Year subtracted from calendar years before polynomial fitting
pub const DEFAULT_BASE_YEAR: i32 = 1900;
/// First year a forecast may target
pub const FIRST_FORECAST_YEAR: i32 = 2024;
/// Upper bound suggested to users; the engine does not enforce it
pub const LAST_SUGGESTED_YEAR: i32 = 2100;
/// Allowed distance (°C) beyond the observed annual-mean extremes
pub const DEFAULT_HISTORY_MARGIN: f64 = 1.5;
/// Number of segments between the last observation and the target year
pub const DEFAULT_TREND_SEGMENTS: u32 = 5;
/// Number of trailing years averaged by the moving-average model
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;

/// What to do with the trend line when a prediction leaves the historical band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutOfRangePolicy {
    /// Return the warning without a trend line
    #[default]
    SuppressTrendLine,
    /// Return the warning together with the trend line
    KeepTrendLine,
}

/// Tunable parameters for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub base_year: i32,
    pub min_target_year: i32,
    pub max_target_year: i32,
    pub history_margin: f64,
    pub trend_segments: u32,
    pub moving_average_window: usize,
    pub out_of_range_policy: OutOfRangePolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_year: DEFAULT_BASE_YEAR,
            min_target_year: FIRST_FORECAST_YEAR,
            max_target_year: LAST_SUGGESTED_YEAR,
            history_margin: DEFAULT_HISTORY_MARGIN,
            trend_segments: DEFAULT_TREND_SEGMENTS,
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            out_of_range_policy: OutOfRangePolicy::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Replace the out-of-range policy
    pub fn with_out_of_range_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range_policy = policy;
        self
    }

    /// Replace the history margin
    pub fn with_history_margin(mut self, margin: f64) -> Self {
        self.history_margin = margin;
        self
    }

    /// Check that all parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.trend_segments == 0 {
            return Err(ForecastError::InvalidParameter(
                "trend_segments must be positive".to_string(),
            ));
        }

        if self.moving_average_window == 0 {
            return Err(ForecastError::InvalidParameter(
                "moving_average_window must be positive".to_string(),
            ));
        }

        if !self.history_margin.is_finite() || self.history_margin < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "history_margin must be a non-negative number, got {}",
                self.history_margin
            )));
        }

        if self.base_year > self.min_target_year {
            return Err(ForecastError::InvalidParameter(format!(
                "base_year ({}) is after min_target_year ({})",
                self.base_year, self.min_target_year
            )));
        }

        if self.min_target_year > self.max_target_year {
            return Err(ForecastError::InvalidParameter(format!(
                "min_target_year ({}) is after max_target_year ({})",
                self.min_target_year, self.max_target_year
            )));
        }

        Ok(())
    }

    /// Clamp a user-entered year into the suggested range
    pub fn clamp_target_year(&self, year: i32) -> i32 {
        year.clamp(self.min_target_year, self.max_target_year)
    }
}
