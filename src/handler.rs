use std::time::Duration;

use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::depth_chart::DepthChart;
use crate::espn::{DEFAULT_TIMEOUT, Schedule, ScheduleConfig};
use crate::model::game::{Game, ScheduleMetadata};
use crate::model::picks::WeeklyPicks;
use crate::slate::{Focus, format_slate, select_games};
use crate::validate::{ValidationOutcome, validate_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workflow {
    Schedule,
    Validate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub schedule_url: String,
    #[serde(default = "default_focus")]
    pub focus_games: String,
    /// When non-empty, selects exactly these game ids and overrides `focus_games`.
    #[serde(default)]
    pub game_ids: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub depth_chart_csv: Option<String>,
    #[serde(default)]
    pub picks: Option<serde_json::Value>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

fn default_focus() -> String {
    "all".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Request {
    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig::new(self.schedule_url.clone()).with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn focus(&self) -> Focus {
        if self.game_ids.is_empty() {
            Focus::parse(&self.focus_games)
        } else {
            Focus::GameIds(self.game_ids.clone())
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub slate: Option<String>,
    pub depth_chart: Option<String>,
    pub metadata: Option<ScheduleMetadata>,
    #[serde(default)]
    pub games: Vec<Game>,
    pub picks: Option<WeeklyPicks>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Output of the schedule workflow.
#[derive(Debug, Clone)]
pub struct SlateRun {
    pub schedule: Schedule,
    pub selected: Vec<Game>,
    pub slate: String,
}

/// Output of the validate workflow. `outcome` is None when no picks were supplied.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    pub chart: DepthChart,
    pub outcome: Option<ValidationOutcome>,
}

enum WorkflowOutput {
    Schedule(SlateRun),
    Validate(ValidationRun),
    Failed(String),
}

/// Fetch the week's schedule, apply the focus, and render the slate.
pub fn run_schedule_workflow(config: &ScheduleConfig, focus: &Focus) -> Result<SlateRun, String> {
    let schedule = Schedule::fetch(config).map_err(|e| format!("Schedule fetch failed: {}", e))?;
    let selected = select_games(&schedule.games, focus);
    let slate = format_slate(&selected);
    info!(total = schedule.games.len(), selected = selected.len(), "Prepared slate");
    Ok(SlateRun { schedule, selected, slate })
}

/// Build the depth chart and, when picks are supplied, validate them against it.
pub fn run_validate_workflow(depth_chart_csv: &str, picks: Option<serde_json::Value>) -> Result<ValidationRun, String> {
    let chart = DepthChart::from_csv(depth_chart_csv).map_err(|e| format!("Depth chart parse failed: {}", e))?;
    let outcome = match picks {
        Some(value) => Some(validate_json(value, &chart).map_err(|e| format!("Picks rejected: {}", e))?),
        None => None,
    };
    Ok(ValidationRun { chart, outcome })
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;

    // Default to the schedule workflow if none specified
    let workflows = if payload.workflows.is_empty() {
        vec![Workflow::Schedule]
    } else {
        payload.workflows.clone()
    };

    let mut handles: Vec<tokio::task::JoinHandle<WorkflowOutput>> = Vec::new();

    for wf in workflows {
        match wf {
            Workflow::Schedule => {
                // spawn_blocking needs owned inputs; the fetch is a blocking ureq call.
                let config = payload.schedule_config();
                let focus = payload.focus();
                let handle = tokio::task::spawn_blocking(move || match run_schedule_workflow(&config, &focus) {
                    Ok(run) => WorkflowOutput::Schedule(run),
                    Err(msg) => {
                        error!(error = %msg, "Schedule workflow failed");
                        WorkflowOutput::Failed(msg)
                    }
                });
                handles.push(handle);
            }
            Workflow::Validate => {
                let Some(csv) = payload.depth_chart_csv.clone() else {
                    let msg = "Validate: no depth chart supplied (skipped)".to_string();
                    info!("{}", msg);
                    handles.push(tokio::spawn(async move { WorkflowOutput::Failed(msg) }));
                    continue;
                };
                let picks = payload.picks.clone();
                let handle = tokio::task::spawn_blocking(move || match run_validate_workflow(&csv, picks) {
                    Ok(run) => WorkflowOutput::Validate(run),
                    Err(msg) => {
                        error!(error = %msg, "Validate workflow failed");
                        WorkflowOutput::Failed(msg)
                    }
                });
                handles.push(handle);
            }
        }
    }

    let mut summaries: Vec<String> = Vec::new();
    let mut slate_run: Option<SlateRun> = None;
    let mut validation_run: Option<ValidationRun> = None;
    for h in handles {
        match h.await {
            Ok(WorkflowOutput::Schedule(run)) => {
                summaries.push(format!("Schedule: {} of {} games selected", run.selected.len(), run.schedule.games.len()));
                slate_run = Some(run);
            }
            Ok(WorkflowOutput::Validate(run)) => {
                let warning_count = run.outcome.as_ref().map(|o| o.warnings.len()).unwrap_or(0);
                summaries.push(format!("Validate: {} teams, {} warnings", run.chart.len(), warning_count));
                validation_run = Some(run);
            }
            Ok(WorkflowOutput::Failed(msg)) => summaries.push(msg),
            Err(e) => summaries.push(format!("Workflow task join error: {}", e)),
        }
    }

    let mut response = Response {
        message: if summaries.is_empty() { "No workflows executed".to_string() } else { summaries.join("; ") },
        ..Response::default()
    };

    if let Some(run) = validation_run {
        response.depth_chart = Some(match &slate_run {
            Some(slate) => run.chart.format_for_games(&slate.selected),
            None => run.chart.format_compact(),
        });
        if let Some(outcome) = run.outcome {
            response.warnings = outcome.warnings;
            response.picks = Some(outcome.picks);
        }
    }
    if let Some(run) = slate_run {
        response.slate = Some(run.slate);
        response.metadata = Some(run.schedule.metadata);
        response.games = run.selected;
    }

    Ok(response)
}
