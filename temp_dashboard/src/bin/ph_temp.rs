//! # ph-temp
//!
//! Command-line front end for the Philippine temperature forecast engine.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use temp_dashboard::view::{render_report, render_status, render_summary};
use temp_dashboard::{reduce, ChartData, DashboardEvent, DashboardState, DataStatus};
use temp_forecast::source::{source_for_path, DataSession};
use temp_forecast::{OutOfRangePolicy, PredictionModel, SimulationConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ph-temp")]
#[command(about = "Forecast Philippine annual mean temperatures", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the temperature of a future year
    Simulate {
        /// Historical data file (CSV or JSON)
        #[arg(short, long)]
        data: PathBuf,

        /// Model (polynomial, moving-average)
        #[arg(short, long, default_value = "polynomial", value_parser = parse_model)]
        model: PredictionModel,

        /// Year to forecast
        #[arg(short, long)]
        target_year: i32,

        /// TOML file with simulation settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep the trend line when the prediction leaves the historical range
        #[arg(long)]
        keep_trend_line: bool,

        /// Margin (°C) around the historical range
        #[arg(long)]
        margin: Option<f64>,

        /// Number of trend line segments
        #[arg(long)]
        segments: Option<u32>,

        /// Write chart data as JSON to a file, or `-` for stdout
        #[arg(long)]
        chart_json: Option<PathBuf>,
    },

    /// Summarise a historical data file
    Summary {
        /// Historical data file (CSV or JSON)
        #[arg(short, long)]
        data: PathBuf,
    },
}

fn parse_model(value: &str) -> Result<PredictionModel, String> {
    value.parse().map_err(|e: temp_forecast::ForecastError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ph_temp=info,temp_forecast=warn,temp_dashboard=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            data,
            model,
            target_year,
            config,
            keep_trend_line,
            margin,
            segments,
            chart_json,
        } => {
            let mut config = match config {
                Some(path) => SimulationConfig::from_file(&path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?,
                None => SimulationConfig::default(),
            };
            if keep_trend_line {
                config = config.with_out_of_range_policy(OutOfRangePolicy::KeepTrendLine);
            }
            if let Some(margin) = margin {
                config = config.with_history_margin(margin);
            }
            if let Some(segments) = segments {
                config.trend_segments = segments;
            }
            config.validate()?;

            simulate(&data, Arc::new(config), model, target_year, chart_json.as_deref())
        }
        Commands::Summary { data } => summary(&data),
    }
}

fn simulate(
    data: &Path,
    config: Arc<SimulationConfig>,
    model: PredictionModel,
    target_year: i32,
    chart_json: Option<&Path>,
) -> anyhow::Result<()> {
    let source = source_for_path(data)?;
    let session = DataSession::open(&*source);

    let mut state = DashboardState::new(config);
    state = reduce(&state, DashboardEvent::from_session(&session));
    println!("{}", render_status(&state));

    state = reduce(&state, DashboardEvent::ModelSelected(model));
    state = reduce(&state, DashboardEvent::TargetYearChanged(target_year));
    if !state.target_in_suggested_range() {
        println!(
            "Note: suggested target years are {} to {}",
            state.config.min_target_year, state.config.max_target_year
        );
    }
    state = reduce(&state, DashboardEvent::SimulateRequested);

    if let Ok(session) = session {
        session.close();
    }

    let Some(report) = &state.report else {
        bail!("simulation produced no report");
    };
    println!();
    print!("{}", render_report(report));

    if let Some(path) = chart_json {
        let chart = ChartData::from_state(&state);
        if path == Path::new("-") {
            println!("{}", chart.to_json()?);
        } else {
            chart
                .write_json(path)
                .with_context(|| format!("Failed to write chart data to {}", path.display()))?;
            info!(path = %path.display(), "chart data written");
        }
    }

    match &report.error {
        Some(error) => bail!("{}", error),
        None => Ok(()),
    }
}

fn summary(data: &Path) -> anyhow::Result<()> {
    let source = source_for_path(data)?;
    let session = DataSession::open(&*source);

    let state = reduce(
        &DashboardState::new(Arc::new(SimulationConfig::default())),
        DashboardEvent::from_session(&session),
    );

    match &state.data {
        DataStatus::Ready(series) => print!("{}", render_summary(series)),
        DataStatus::Failed(message) => bail!("{}", message),
        _ => println!("{}", render_status(&state)),
    }

    if let Ok(session) = session {
        session.close();
    }
    Ok(())
}
