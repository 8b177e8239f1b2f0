use std::io::Write;
use tempfile::Builder;
use temp_forecast::data::HistoricalSeries;
use temp_forecast::source::{source_for_path, DataSession, InMemorySource, TemperatureSource};
use temp_forecast::{ForecastError, ObservedYear, Result};

struct UnreachableSource;

impl TemperatureSource for UnreachableSource {
    fn name(&self) -> &str {
        "unreachable"
    }

    fn fetch(&self) -> Result<HistoricalSeries> {
        Err(ForecastError::IoError(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

#[test]
fn test_session_shares_snapshot() {
    let source = InMemorySource::new(
        "memory",
        vec![
            ObservedYear::new(2021, 26.7, 26.6),
            ObservedYear::new(2020, 26.2, 26.4),
        ],
    );

    let session = DataSession::open(&source).unwrap();
    let a = session.series();
    let b = session.series();

    assert_eq!(session.source_name(), "memory");
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(a.years(), vec![2020, 2021]);

    session.close();
    // Snapshots outlive the session
    assert_eq!(b.len(), 2);
}

#[test]
fn test_fetch_failure_and_empty_result_are_distinct() {
    let failed = DataSession::open(&UnreachableSource).unwrap_err();
    assert!(matches!(failed, ForecastError::DataFetchError(_)));
    assert!(failed.to_string().contains("unreachable"));
    assert!(failed.is_blocking());

    let empty = DataSession::open(&InMemorySource::new("memory", Vec::new())).unwrap_err();
    assert!(matches!(empty, ForecastError::EmptyDataset));
    assert!(empty.is_blocking());
}

#[test]
fn test_invalid_records_are_fetch_errors() {
    let source = InMemorySource::new(
        "memory",
        vec![
            ObservedYear::new(2020, 26.0, 26.0),
            ObservedYear::new(2020, 26.0, 26.0),
        ],
    );

    assert!(matches!(
        DataSession::open(&source),
        Err(ForecastError::DataFetchError(_))
    ));
}

#[test]
fn test_source_for_path_by_extension() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "year,annual_mean,five_year_smooth").unwrap();
    writeln!(file, "2022,26.9,26.8").unwrap();

    let source = source_for_path(file.path()).unwrap();
    assert!(source.name().starts_with("csv:"));

    let session = DataSession::open(&*source).unwrap();
    assert_eq!(session.series().len(), 1);

    assert!(source_for_path("temperatures.xlsx").is_err());
    assert!(source_for_path("temperatures.json")
        .unwrap()
        .name()
        .starts_with("json:"));
}
