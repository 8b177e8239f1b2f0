//! Dashboard state snapshots and the reducer that advances them

use std::sync::Arc;
use temp_forecast::source::DataSession;
use temp_forecast::{
    ForecastError, HistoricalSeries, PredictionModel, PredictionRequest, SimulationConfig,
    SimulationReport, Simulator,
};
use tracing::debug;

/// Loading state of the historical series
#[derive(Debug, Clone, PartialEq)]
pub enum DataStatus {
    /// Fetch in progress
    Loading,
    /// Series available for simulations
    Ready(Arc<HistoricalSeries>),
    /// Fetch succeeded with no records
    Empty,
    /// Fetch failed; holds the user-facing message
    Failed(String),
}

/// Everything the dashboard shows at one moment
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub config: Arc<SimulationConfig>,
    pub data: DataStatus,
    pub model: PredictionModel,
    pub target_year: i32,
    pub report: Option<SimulationReport>,
}

impl DashboardState {
    /// Initial state: data loading, polynomial model, earliest target year
    pub fn new(config: Arc<SimulationConfig>) -> Self {
        Self {
            data: DataStatus::Loading,
            model: PredictionModel::Polynomial,
            target_year: config.min_target_year,
            report: None,
            config,
        }
    }

    /// The series, once loaded
    pub fn series(&self) -> Option<&Arc<HistoricalSeries>> {
        match &self.data {
            DataStatus::Ready(series) => Some(series),
            _ => None,
        }
    }

    /// The request the current controls describe
    pub fn request(&self) -> PredictionRequest {
        PredictionRequest::new(self.model, self.target_year)
    }

    /// Whether the target year lies within the suggested input range
    pub fn target_in_suggested_range(&self) -> bool {
        self.config.clamp_target_year(self.target_year) == self.target_year
    }
}

/// User actions and data-source notifications
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The series arrived (possibly empty)
    DataLoaded(Arc<HistoricalSeries>),
    /// The fetch failed with the given message
    DataFailed(String),
    /// A different model was chosen
    ModelSelected(PredictionModel),
    /// The target year was typed in
    TargetYearChanged(i32),
    /// The target year was stepped up or down; stays in the suggested range
    TargetYearNudged(i32),
    /// The simulate button was pressed
    SimulateRequested,
}

impl DashboardEvent {
    /// Translate the outcome of opening a data session
    pub fn from_session(outcome: &temp_forecast::Result<DataSession>) -> Self {
        match outcome {
            Ok(session) => DashboardEvent::DataLoaded(session.series()),
            Err(ForecastError::EmptyDataset) => {
                DashboardEvent::DataLoaded(Arc::new(HistoricalSeries::empty()))
            }
            Err(err) => DashboardEvent::DataFailed(err.user_message()),
        }
    }
}

/// Compute the state that follows `state` after `event`
///
/// Changing the data, the model or the target year discards any previous
/// report so a result is never shown next to controls that did not produce it.
pub fn reduce(state: &DashboardState, event: DashboardEvent) -> DashboardState {
    debug!(?event, "dashboard event");

    match event {
        DashboardEvent::DataLoaded(series) => DashboardState {
            data: if series.is_empty() {
                DataStatus::Empty
            } else {
                DataStatus::Ready(series)
            },
            report: None,
            ..state.clone()
        },
        DashboardEvent::DataFailed(message) => DashboardState {
            data: DataStatus::Failed(message),
            report: None,
            ..state.clone()
        },
        DashboardEvent::ModelSelected(model) => DashboardState {
            model,
            report: None,
            ..state.clone()
        },
        DashboardEvent::TargetYearChanged(year) => DashboardState {
            target_year: year,
            report: None,
            ..state.clone()
        },
        DashboardEvent::TargetYearNudged(delta) => DashboardState {
            target_year: state
                .config
                .clamp_target_year(state.target_year.saturating_add(delta)),
            report: None,
            ..state.clone()
        },
        DashboardEvent::SimulateRequested => DashboardState {
            report: Some(simulate(state)),
            ..state.clone()
        },
    }
}

fn simulate(state: &DashboardState) -> SimulationReport {
    let request = state.request();

    match &state.data {
        DataStatus::Ready(series) => {
            let outcome = Simulator::new(state.config.as_ref().clone())
                .and_then(|simulator| simulator.run(series.records(), &request));
            SimulationReport::from_outcome(&request, outcome)
        }
        DataStatus::Loading => {
            SimulationReport::rejected(&request, "Temperature data is still loading.")
        }
        DataStatus::Empty => {
            SimulationReport::rejected(&request, ForecastError::EmptyDataset.user_message())
        }
        DataStatus::Failed(message) => SimulationReport::rejected(&request, message.clone()),
    }
}
