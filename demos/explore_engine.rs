// Walks a synthetic series through both models, a few target years and the dashboard reducer
use std::sync::Arc;
use ph_temp_workspace::dashboard::view::{render_report, render_status};
use ph_temp_workspace::dashboard::{reduce, ChartData, DashboardEvent, DashboardState};
use ph_temp_workspace::forecast::config::OutOfRangePolicy;
use ph_temp_workspace::forecast::source::{DataSession, InMemorySource};
use ph_temp_workspace::forecast::utils::synthetic_series;
use ph_temp_workspace::{forecast_report, PredictionModel, PredictionRequest, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Exploring the temperature forecast engine\n");

    let series = synthetic_series(1901, 122, 25.6, 0.012, 0.3, 1991)?;

    println!("=== Models across target years ===");
    for model in PredictionModel::ALL {
        println!("\n{}", model.display_name());
        for target in [2030, 2050, 2100] {
            let request = PredictionRequest::new(model, target);
            let report = forecast_report(&series, &request, SimulationConfig::default());
            let flag = if report.warning.is_some() { "  (outside historical range)" } else { "" };
            println!("  {} -> {:.2}°C{}", target, report.prediction, flag);
        }
    }

    println!("\n=== Dashboard session ===");
    let source = InMemorySource::new("synthetic", series.records().to_vec());
    let session = DataSession::open(&source);

    let config = SimulationConfig::default().with_out_of_range_policy(OutOfRangePolicy::KeepTrendLine);
    let mut state = DashboardState::new(Arc::new(config));
    state = reduce(&state, DashboardEvent::from_session(&session));
    println!("{}", render_status(&state));

    state = reduce(&state, DashboardEvent::ModelSelected(PredictionModel::MovingAverage));
    state = reduce(&state, DashboardEvent::TargetYearNudged(26));
    state = reduce(&state, DashboardEvent::SimulateRequested);

    if let Some(report) = &state.report {
        println!();
        print!("{}", render_report(report));
    }

    let chart = ChartData::from_state(&state);
    println!(
        "\nChart axis: {} years ({} to {})",
        chart.labels.len(),
        chart.labels.first().map(String::as_str).unwrap_or("-"),
        chart.labels.last().map(String::as_str).unwrap_or("-"),
    );

    if let Ok(session) = session {
        session.close();
    }

    println!("\nDone exploring");
    Ok(())
}
