use pretty_assertions::assert_eq;
use std::sync::Arc;
use temp_dashboard::view::{render_report, render_status, render_summary};
use temp_dashboard::{reduce, ChartData, DashboardEvent, DashboardState};
use temp_forecast::{
    HistoricalSeries, ObservedYear, PredictionModel, PredictionRequest, SimulationConfig,
    SimulationReport, TrendPoint,
};

fn create_test_series() -> HistoricalSeries {
    HistoricalSeries::new(vec![
        ObservedYear::new(2018, 26.1, 26.0),
        ObservedYear::new(2019, 26.3, 26.2),
        ObservedYear::new(2020, 26.2, 26.4),
        ObservedYear::new(2021, 26.7, 26.6),
        ObservedYear::new(2022, 26.9, 26.8),
    ])
    .unwrap()
}

fn simulated_state(target_year: i32) -> DashboardState {
    let state = DashboardState::new(Arc::new(SimulationConfig::default()));
    let state = reduce(&state, DashboardEvent::DataLoaded(Arc::new(create_test_series())));
    let state = reduce(&state, DashboardEvent::ModelSelected(PredictionModel::MovingAverage));
    let state = reduce(&state, DashboardEvent::TargetYearChanged(target_year));
    reduce(&state, DashboardEvent::SimulateRequested)
}

#[test]
fn test_chart_without_projection() {
    let chart = ChartData::build(&create_test_series(), &[]);

    assert_eq!(chart.labels, vec!["2018", "2019", "2020", "2021", "2022"]);
    assert_eq!(chart.annual_mean.label, "Annual Mean");
    assert_eq!(chart.smoothed.label, "5-Year Smooth");
    assert_eq!(chart.projection.label, "Projected Trend");
    assert_eq!(chart.annual_mean.values[0], Some(26.1));
    assert_eq!(chart.smoothed.values[4], Some(26.8));
    assert!(chart.projection.values.iter().all(Option::is_none));
}

#[test]
fn test_chart_axis_is_union_of_years() {
    let trend = vec![
        TrendPoint::new(2022, 26.8),
        TrendPoint::new(2025, 27.4),
        TrendPoint::new(2030, 28.0),
    ];

    let chart = ChartData::build(&create_test_series(), &trend);

    assert_eq!(
        chart.labels,
        vec!["2018", "2019", "2020", "2021", "2022", "2025", "2030"]
    );
    for line in [&chart.annual_mean, &chart.smoothed, &chart.projection] {
        assert_eq!(line.values.len(), chart.labels.len());
    }

    // Projection joins the observed lines at the last observed year
    assert_eq!(chart.projection.values[3], None);
    assert_eq!(chart.projection.values[4], Some(26.8));
    assert_eq!(chart.smoothed.values[4], Some(26.8));
    assert_eq!(chart.annual_mean.values[5], None);
    assert_eq!(chart.projection.values[6], Some(28.0));
}

#[test]
fn test_chart_from_state() {
    let loading = DashboardState::new(Arc::new(SimulationConfig::default()));
    assert_eq!(ChartData::from_state(&loading), ChartData::default());

    let state = simulated_state(2026);
    let chart = ChartData::from_state(&state);

    assert_eq!(chart.labels.first().map(String::as_str), Some("2018"));
    assert_eq!(chart.labels.last().map(String::as_str), Some("2026"));
    assert_eq!(chart.labels.len(), 9);
}

#[test]
fn test_chart_json() {
    let chart = ChartData::from_state(&simulated_state(2026));
    let json = chart.to_json().unwrap();

    let parsed: ChartData = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.labels, chart.labels);
    assert!(json.contains("\"Projected Trend\""));
    assert!(json.contains("null"));
}

#[test]
fn test_render_successful_report() {
    let state = simulated_state(2026);
    let text = render_report(state.report.as_ref().unwrap());

    assert!(text.starts_with("Model: 5-Year Moving Average\n"));
    assert!(text.contains("Predicted temperature: 27.20°C"));
    assert!(text.contains("Projected trend:"));
    assert!(!text.contains("Warning"));
}

#[test]
fn test_render_out_of_range_report() {
    let state = simulated_state(2100);
    let text = render_report(state.report.as_ref().unwrap());

    assert!(text.contains("Warning: the predicted temperature"));
    assert!(!text.contains("Projected trend:"));
}

#[test]
fn test_render_rejected_report() {
    let request = PredictionRequest::new(PredictionModel::Polynomial, 2000);
    let report = SimulationReport::rejected(&request, "Please enter a target year of 2024 or later.");

    assert_eq!(
        render_report(&report),
        "Error: Please enter a target year of 2024 or later.\n"
    );
}

#[test]
fn test_render_status_and_summary() {
    let loading = DashboardState::new(Arc::new(SimulationConfig::default()));
    assert_eq!(render_status(&loading), "Loading temperature data...");

    let state = simulated_state(2026);
    assert_eq!(render_status(&state), "5 years of data (2018 to 2022)");

    let summary = render_summary(&create_test_series());
    assert!(summary.contains("2018 to 2022 (5 records)"));
    assert!(summary.contains("26.10°C to 26.90°C"));
    assert!(summary.contains("Latest smoothed: 26.80°C (2022)"));
    assert!(summary.contains("+0.80°C since 2018"));

    assert_eq!(
        render_summary(&HistoricalSeries::empty()),
        "No temperature data available.\n"
    );
}

#[test]
fn test_chart_write_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.json");
    let chart = ChartData::from_state(&simulated_state(2026));

    chart.write_json(&path).unwrap();
    let written: ChartData =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, chart);

    let missing = dir.path().join("no-such-dir").join("chart.json");
    assert!(matches!(
        chart.write_json(&missing),
        Err(temp_dashboard::DashboardError::Io(_))
    ));
}
