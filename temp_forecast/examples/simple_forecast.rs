use temp_forecast::source::{DataSession, InMemorySource};
use temp_forecast::utils::synthetic_series;
use temp_forecast::{PredictionModel, PredictionRequest, SimulationReport, Simulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A reproducible stand-in for the historical feed
    let series = synthetic_series(1901, 122, 25.6, 0.011, 0.25, 2024)?;
    let source = InMemorySource::new("synthetic", series.records().to_vec());

    let session = DataSession::open(&source)?;
    let snapshot = session.series();
    println!(
        "Loaded {} years from {}",
        snapshot.len(),
        session.source_name()
    );

    let simulator = Simulator::default();
    for model in PredictionModel::ALL {
        let request = PredictionRequest::new(model, 2050);
        let report =
            SimulationReport::from_outcome(&request, simulator.run(snapshot.records(), &request));

        println!("\n{}", model.display_name());
        for line in &report.explanation {
            println!("  {}", line);
        }
        if let Some(warning) = &report.warning {
            println!("  {}", warning);
        }
        for point in &report.trend_line {
            println!("  {}: {:.2}°C", point.year_label, point.temperature);
        }
    }

    session.close();
    Ok(())
}
