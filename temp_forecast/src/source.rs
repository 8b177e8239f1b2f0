//! Data-access handles for the historical temperature feed
//!
//! A [`DataSession`] is opened explicitly from a [`TemperatureSource`],
//! fetches the series exactly once and hands out a shared read-only snapshot
//! until it is closed.

use crate::data::{DataLoader, HistoricalSeries, ObservedYear};
use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Something that can supply the historical temperature series
pub trait TemperatureSource {
    /// Short description used in logs and error messages
    fn name(&self) -> &str;

    /// Fetch all records, ascending by year
    fn fetch(&self) -> Result<HistoricalSeries>;
}

/// CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
}

impl CsvFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: format!("csv:{}", path.display()),
            path,
        }
    }
}

impl TemperatureSource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<HistoricalSeries> {
        DataLoader::from_csv(&self.path)
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: format!("json:{}", path.display()),
            path,
        }
    }
}

impl TemperatureSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<HistoricalSeries> {
        DataLoader::from_json(&self.path)
    }
}

/// Records already held in memory
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    records: Vec<ObservedYear>,
}

impl InMemorySource {
    pub fn new(name: &str, records: Vec<ObservedYear>) -> Self {
        Self {
            name: name.to_string(),
            records,
        }
    }
}

impl TemperatureSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<HistoricalSeries> {
        HistoricalSeries::new(self.records.clone())
    }
}

/// Pick a file source from the path extension
pub fn source_for_path<P: AsRef<Path>>(path: P) -> Result<Box<dyn TemperatureSource>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(Box::new(CsvFileSource::new(path))),
        Some("json") => Ok(Box::new(JsonFileSource::new(path))),
        _ => Err(ForecastError::InvalidParameter(format!(
            "Cannot infer data format of '{}', expected a .csv or .json file",
            path.display()
        ))),
    }
}

/// An open connection to the historical series
#[derive(Debug)]
pub struct DataSession {
    source_name: String,
    series: Arc<HistoricalSeries>,
    opened_at: DateTime<Utc>,
}

impl DataSession {
    /// Fetch the series once and start a session
    ///
    /// Fetch failures become [`ForecastError::DataFetchError`]; a successful
    /// fetch with no records becomes [`ForecastError::EmptyDataset`].
    pub fn open<S>(source: &S) -> Result<Self>
    where
        S: TemperatureSource + ?Sized,
    {
        info!(source = source.name(), "opening data session");

        let series = source.fetch().map_err(|err| match err {
            ForecastError::EmptyDataset => err,
            other => {
                warn!(source = source.name(), error = %other, "data fetch failed");
                ForecastError::DataFetchError(format!("{}: {}", source.name(), other))
            }
        })?;

        if series.is_empty() {
            warn!(source = source.name(), "data source returned no records");
            return Err(ForecastError::EmptyDataset);
        }

        info!(
            source = source.name(),
            records = series.len(),
            "data session ready"
        );

        Ok(Self {
            source_name: source.name().to_string(),
            series: Arc::new(series),
            opened_at: Utc::now(),
        })
    }

    /// Shared snapshot of the series
    pub fn series(&self) -> Arc<HistoricalSeries> {
        Arc::clone(&self.series)
    }

    /// Name of the source the session was opened from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// When the session was opened
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// End the session
    pub fn close(self) {
        let open_for = Utc::now() - self.opened_at;
        info!(
            source = %self.source_name,
            open_ms = open_for.num_milliseconds(),
            "closing data session"
        );
    }
}
