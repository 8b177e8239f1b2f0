use std::io::Write;
use tempfile::NamedTempFile;
use temp_forecast::data::{DataLoader, HistoricalSeries, ObservedYear};
use temp_forecast::ForecastError;

#[test]
fn test_data_loader_from_csv() {
    // Create a temporary CSV file
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "year,annual_mean,five_year_smooth").unwrap();
    writeln!(file, "2020,26.2,26.4").unwrap();
    writeln!(file, "2018,26.1,26.0").unwrap();
    writeln!(file, "2019, 26.3 ,26.2").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.years(), vec![2018, 2019, 2020]);
    assert_eq!(series.get(2019).unwrap().annual_mean, 26.3);
    assert_eq!(series.span(), Some((2018, 2020)));
}

#[test]
fn test_data_loader_from_json_variants() {
    let bare = r#"[{"year": "2021", "annual_mean": 26.7, "five_year_smooth": 26.6}]"#;
    let wrapped = r#"{"data": [{"year": 2021, "annualMean": 26.7, "fiveYearSmooth": 26.6}]}"#;

    let a = DataLoader::from_json_str(bare).unwrap();
    let b = DataLoader::from_json_str(wrapped).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.records(), &[ObservedYear::new(2021, 26.7, 26.6)]);
}

#[test]
fn test_data_loader_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"year": 2000, "annual_mean": 25.9, "five_year_smooth": 25.8}}]"#
    )
    .unwrap();

    let series = DataLoader::from_json(file.path()).unwrap();
    assert_eq!(series.len(), 1);
}

#[test]
fn test_empty_feed_loads_as_empty_series() {
    let series = DataLoader::from_json_str("[]").unwrap();
    assert!(series.is_empty());

    let series = DataLoader::from_csv_reader("year,annual_mean,five_year_smooth\n".as_bytes())
        .unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_data_loader_error_handling() {
    // Non-existent file
    let result = DataLoader::from_csv("nonexistent_file.csv");
    assert!(matches!(result, Err(ForecastError::IoError(_))));

    // Unparseable year
    let csv = "year,annual_mean,five_year_smooth\nnext year,26.0,26.0\n";
    assert!(matches!(
        DataLoader::from_csv_reader(csv.as_bytes()),
        Err(ForecastError::CsvError(_))
    ));

    // Malformed JSON
    assert!(matches!(
        DataLoader::from_json_str("{not json"),
        Err(ForecastError::JsonError(_))
    ));
}

#[test]
fn test_series_rejects_duplicates_and_non_finite() {
    let duplicate = vec![
        ObservedYear::new(2020, 26.0, 26.0),
        ObservedYear::new(2020, 26.1, 26.1),
    ];
    assert!(matches!(
        HistoricalSeries::new(duplicate),
        Err(ForecastError::ValidationError(_))
    ));

    let nan = vec![ObservedYear::new(2020, f64::NAN, 26.0)];
    assert!(matches!(
        HistoricalSeries::new(nan),
        Err(ForecastError::ValidationError(_))
    ));
}

#[test]
fn test_series_accessors() {
    let series = HistoricalSeries::new(vec![
        ObservedYear::new(2001, 26.0, 25.9),
        ObservedYear::new(2000, 25.8, 25.7),
    ])
    .unwrap();

    assert_eq!(series.first().unwrap().year, 2000);
    assert_eq!(series.last().unwrap().year, 2001);
    assert_eq!(series.annual_means(), vec![25.8, 26.0]);
    assert_eq!(series.smoothed(), vec![25.7, 25.9]);
    assert!(series.get(1999).is_none());
    assert!(HistoricalSeries::empty().span().is_none());
}
