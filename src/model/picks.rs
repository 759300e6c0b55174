use serde::{Deserialize, Serialize};

/// Weekly recommendation collection produced by the picks generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPicks {
    pub meta: PickMeta,
    pub categories: Categories,
    #[serde(default)]
    pub long_shots: LongShots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickMeta {
    pub week: u32,
    pub date: String,
    pub slate_description: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub qbs: Vec<PlayerPick>,
    #[serde(default)]
    pub rbs: Vec<PlayerPick>,
    #[serde(default)]
    pub wrs: Vec<PlayerPick>,
    #[serde(default)]
    pub tes: Vec<PlayerPick>,
}

impl Categories {
    /// Each category list labelled with its position code.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut Vec<PlayerPick>)> {
        [
            ("QB", &mut self.qbs),
            ("RB", &mut self.rbs),
            ("WR", &mut self.wrs),
            ("TE", &mut self.tes),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickSource {
    pub name: String,
    /// "+1", "0" or "-1"
    pub sentiment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSuggestion {
    pub stat: String,
    /// None for yes/no markets like anytime_td
    #[serde(default)]
    pub line: Option<f64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub lean: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPick {
    pub name: String,
    pub team: String,
    pub position: String,
    pub game: String,
    pub matchup_note: String,
    pub injury_status: String,
    pub verified: bool,
    pub what_to_target: String,
    pub why: String,
    pub sources: Vec<PickSource>,
    pub suggestions: Vec<PropSuggestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touchdowns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receptions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongShotPrediction {
    pub label: String,
    pub prediction: PredictionDetails,
    /// e.g. "+600_to_+1500"
    pub odds_bucket_estimate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongShotPick {
    pub name: String,
    pub team: String,
    pub position: String,
    pub game: String,
    pub long_shot: LongShotPrediction,
    pub ultra_long_shot: LongShotPrediction,
    // The generator does not emit these; they only change through validation.
    #[serde(default = "default_verified")]
    pub verified: bool,
    #[serde(default)]
    pub note: String,
}

fn default_verified() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongShots {
    #[serde(default)]
    pub players: Vec<LongShotPick>,
}

/// A recommended player whose claimed team can be checked against a depth chart.
pub trait RosterClaim {
    fn name(&self) -> &str;
    fn claimed_team(&self) -> &str;
    fn set_team(&mut self, team: String);
    fn set_verified(&mut self, verified: bool);
    fn note_mut(&mut self) -> &mut String;
}

impl RosterClaim for PlayerPick {
    fn name(&self) -> &str {
        &self.name
    }
    fn claimed_team(&self) -> &str {
        &self.team
    }
    fn set_team(&mut self, team: String) {
        self.team = team;
    }
    fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }
    fn note_mut(&mut self) -> &mut String {
        &mut self.matchup_note
    }
}

impl RosterClaim for LongShotPick {
    fn name(&self) -> &str {
        &self.name
    }
    fn claimed_team(&self) -> &str {
        &self.team
    }
    fn set_team(&mut self, team: String) {
        self.team = team;
    }
    fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }
    fn note_mut(&mut self) -> &mut String {
        &mut self.note
    }
}
