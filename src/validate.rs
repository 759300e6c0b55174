use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::depth_chart::DepthChart;
use crate::error::SchemaError;
use crate::model::picks::{RosterClaim, WeeklyPicks};
use crate::names::same_name;

/// Prefixed to a pick's note when its team was rewritten from the depth chart.
pub const CORRECTED_TAG: &str = "[TEAM CORRECTED]";
/// Prefixed to a pick's note when the player is not on any depth chart.
pub const NOT_FOUND_TAG: &str = "[NOT IN DEPTH CHART]";

const LONG_SHOT_LABEL: &str = "long shot";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub picks: WeeklyPicks,
    pub warnings: Vec<String>,
}

/// Result of checking one claim.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Check {
    Confirmed,
    Corrected { from: String, to: String },
    NotFound,
}

/// Deserialize a recommendation collection and validate it.
pub fn validate_json(picks: serde_json::Value, chart: &DepthChart) -> Result<ValidationOutcome, SchemaError> {
    let mut picks: WeeklyPicks = serde_json::from_value(picks)?;
    let warnings = validate_picks(&mut picks, chart);
    Ok(ValidationOutcome { picks, warnings })
}

pub fn validate_str(picks: &str, chart: &DepthChart) -> Result<ValidationOutcome, SchemaError> {
    let mut picks: WeeklyPicks = serde_json::from_str(picks)?;
    let warnings = validate_picks(&mut picks, chart);
    Ok(ValidationOutcome { picks, warnings })
}

/// Check every pick's claimed team against `chart`, correcting or flagging
/// in place. Returns one human-readable warning per changed pick.
#[instrument(level = "info", skip_all, fields(teams = chart.len()))]
pub fn validate_picks(picks: &mut WeeklyPicks, chart: &DepthChart) -> Vec<String> {
    let mut warnings = Vec::new();

    for (label, players) in picks.categories.iter_mut() {
        for player in players.iter_mut() {
            if let Some(w) = apply_check(player, chart, label) {
                warnings.push(w);
            }
        }
    }
    for player in picks.long_shots.players.iter_mut() {
        if let Some(w) = apply_check(player, chart, LONG_SHOT_LABEL) {
            warnings.push(w);
        }
    }

    info!(warning_count = warnings.len(), "Validated picks against depth chart");
    warnings
}

fn check_claim<P: RosterClaim>(pick: &P, chart: &DepthChart) -> Check {
    match chart.team_of(pick.name()) {
        Some(actual) if same_name(actual, pick.claimed_team()) => Check::Confirmed,
        Some(actual) => Check::Corrected { from: pick.claimed_team().to_string(), to: actual.to_string() },
        None => Check::NotFound,
    }
}

fn apply_check<P: RosterClaim>(pick: &mut P, chart: &DepthChart, label: &str) -> Option<String> {
    match check_claim(pick, chart) {
        Check::Confirmed => None,
        Check::Corrected { from, to } => {
            let warning = format!("[{}] {}: team corrected from {} to {}", label, pick.name(), from, to);
            info!(player = %pick.name(), from = %from, to = %to, "Corrected claimed team");
            pick.set_team(to);
            pick.set_verified(false);
            prepend_tag(pick.note_mut(), CORRECTED_TAG);
            Some(warning)
        }
        Check::NotFound => {
            let warning = format!("[{}] {}: not found in depth chart (claimed {})", label, pick.name(), pick.claimed_team());
            warn!(player = %pick.name(), team = %pick.claimed_team(), "Player not found in depth chart");
            pick.set_verified(false);
            prepend_tag(pick.note_mut(), NOT_FOUND_TAG);
            Some(warning)
        }
    }
}

fn prepend_tag(note: &mut String, tag: &str) {
    if note.is_empty() {
        note.push_str(tag);
    } else {
        note.insert_str(0, &format!("{} ", tag));
    }
}
