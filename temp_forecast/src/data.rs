//! Historical temperature records and loading

use crate::error::{ForecastError, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Window used to derive the smoothed mean when a feed omits it
const SMOOTHING_WINDOW: usize = 5;

/// One year of observed temperatures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedYear {
    /// Calendar year
    pub year: i32,
    /// Annual mean temperature (°C)
    pub annual_mean: f64,
    /// Centered 5-year smoothed mean temperature (°C)
    pub five_year_smooth: f64,
}

impl ObservedYear {
    /// Create a new observation
    pub fn new(year: i32, annual_mean: f64, five_year_smooth: f64) -> Self {
        Self {
            year,
            annual_mean,
            five_year_smooth,
        }
    }
}

/// Immutable, year-ordered series of observations
///
/// Records are sorted by year with no duplicates and only finite values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoricalSeries {
    records: Vec<ObservedYear>,
}

impl HistoricalSeries {
    /// Build a series, sorting by year and rejecting duplicates or non-finite values
    pub fn new(mut records: Vec<ObservedYear>) -> Result<Self> {
        if let Some(bad) = records
            .iter()
            .find(|r| !r.annual_mean.is_finite() || !r.five_year_smooth.is_finite())
        {
            return Err(ForecastError::ValidationError(format!(
                "Non-finite temperature recorded for {}",
                bad.year
            )));
        }

        records.sort_by_key(|r| r.year);

        if let Some(pair) = records.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(ForecastError::ValidationError(format!(
                "Duplicate record for year {}",
                pair[0].year
            )));
        }

        Ok(Self { records })
    }

    /// A series with no records
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records, ascending by year
    pub fn records(&self) -> &[ObservedYear] {
        &self.records
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of observed years
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Earliest observation
    pub fn first(&self) -> Option<&ObservedYear> {
        self.records.first()
    }

    /// Latest observation
    pub fn last(&self) -> Option<&ObservedYear> {
        self.records.last()
    }

    /// First and last observed year
    pub fn span(&self) -> Option<(i32, i32)> {
        Some((self.first()?.year, self.last()?.year))
    }

    /// Look up the observation for a given year
    pub fn get(&self, year: i32) -> Option<&ObservedYear> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|i| &self.records[i])
    }

    /// Observed years
    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Annual mean temperatures
    pub fn annual_means(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.annual_mean).collect()
    }

    /// Smoothed mean temperatures
    pub fn smoothed(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.five_year_smooth).collect()
    }
}

impl AsRef<[ObservedYear]> for HistoricalSeries {
    fn as_ref(&self) -> &[ObservedYear] {
        &self.records
    }
}

/// Record as it appears in a feed; the year may be text or a number
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(deserialize_with = "deserialize_year")]
    year: i32,
    #[serde(alias = "annualMean", alias = "Annual Mean")]
    annual_mean: f64,
    #[serde(default, alias = "fiveYearSmooth", alias = "5-year smooth")]
    five_year_smooth: Option<f64>,
}

/// JSON feeds arrive either as a bare array or wrapped in a `data` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonFeed {
    Rows(Vec<RawRecord>),
    Wrapped { data: Vec<RawRecord> },
}

fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a calendar year as an integer or text")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i32, E> {
            i32::try_from(v).map_err(|_| E::custom(format!("year {} out of range", v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i32, E> {
            i32::try_from(v).map_err(|_| E::custom(format!("year {} out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<i32, E> {
            if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
                Ok(v as i32)
            } else {
                Err(E::custom(format!("year {} is not a whole number", v)))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<i32, E> {
            v.trim()
                .parse::<i32>()
                .map_err(|e| E::custom(format!("invalid year '{}': {}", v, e)))
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

/// Data loader for historical temperature feeds
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a series from a CSV file with `year,annual_mean,five_year_smooth` columns
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<HistoricalSeries> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Load a series from any CSV source
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<HistoricalSeries> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let raw = csv_reader
            .deserialize::<RawRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::build_series(raw)
    }

    /// Load a series from a JSON file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<HistoricalSeries> {
        let file = File::open(path)?;
        let feed: JsonFeed = serde_json::from_reader(BufReader::new(file))?;
        Self::from_feed(feed)
    }

    /// Load a series from a JSON document
    pub fn from_json_str(json: &str) -> Result<HistoricalSeries> {
        let feed: JsonFeed = serde_json::from_str(json)?;
        Self::from_feed(feed)
    }

    fn from_feed(feed: JsonFeed) -> Result<HistoricalSeries> {
        match feed {
            JsonFeed::Rows(rows) | JsonFeed::Wrapped { data: rows } => Self::build_series(rows),
        }
    }

    /// Convert raw rows into a validated series, deriving missing smoothed values
    fn build_series(raw: Vec<RawRecord>) -> Result<HistoricalSeries> {
        let mut raw = raw;
        raw.sort_by_key(|r| r.year);

        let missing = raw.iter().filter(|r| r.five_year_smooth.is_none()).count();
        let derived = if missing > 0 {
            debug!(missing, "deriving smoothed means from annual means");
            let annual: Vec<f64> = raw.iter().map(|r| r.annual_mean).collect();
            temp_math::centered_moving_average(&annual, SMOOTHING_WINDOW)?
        } else {
            Vec::new()
        };

        let records = raw
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let smooth = r.five_year_smooth.unwrap_or_else(|| derived[i]);
                ObservedYear::new(r.year, r.annual_mean, smooth)
            })
            .collect();

        let series = HistoricalSeries::new(records)?;
        debug!(records = series.len(), "loaded temperature series");
        Ok(series)
    }
}
