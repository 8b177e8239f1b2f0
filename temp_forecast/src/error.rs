//! Error types for the temp_forecast crate

use thiserror::Error;

/// Custom error types for the temp_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The data source was unavailable or returned unusable records
    #[error("Data fetch error: {0}")]
    DataFetchError(String),

    /// The data source answered with zero records
    #[error("No temperature records available")]
    EmptyDataset,

    /// Requested year precedes the first forecastable year
    #[error("Invalid target year {requested}: forecasts start at {minimum}")]
    InvalidYear { requested: i32, minimum: i32 },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A computation produced a non-finite result
    #[error("Calculation error: {0}")]
    CalculationError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while reading CSV records
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error while reading JSON records
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error while parsing a configuration file
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// Error from the numeric primitives
    #[error("Math error: {0}")]
    MathError(#[from] temp_math::MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl ForecastError {
    /// Message suitable for showing to the person running the simulation
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::DataFetchError(_)
            | ForecastError::IoError(_)
            | ForecastError::CsvError(_)
            | ForecastError::JsonError(_) => {
                format!("Failed to load temperature data. {}", self)
            }
            ForecastError::EmptyDataset => {
                "No temperature data is available to run a simulation.".to_string()
            }
            ForecastError::InvalidYear { minimum, .. } => {
                format!("Please enter a target year of {} or later.", minimum)
            }
            ForecastError::CalculationError(_) | ForecastError::MathError(_) => {
                "Error in calculation. The model could not produce a usable prediction."
                    .to_string()
            }
            ForecastError::InvalidParameter(_)
            | ForecastError::ValidationError(_)
            | ForecastError::ConfigError(_) => self.to_string(),
        }
    }

    /// Whether the error prevents any simulation for the session
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            ForecastError::DataFetchError(_)
                | ForecastError::EmptyDataset
                | ForecastError::IoError(_)
                | ForecastError::CsvError(_)
                | ForecastError::JsonError(_)
        )
    }
}
