use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ParseError;
use crate::model::depth::{Position, PositionDepth};
use crate::model::game::Game;
use crate::names::normalize_name;

/// Rank columns and rank-only rows in the export start with this.
const EXCLUDED_PREFIX: &str = "ECR";
/// Present in the column header row of each team block.
const HEADER_MARKER: &str = "Quarterbacks";
/// Placeholder for an empty depth slot.
const PLACEHOLDER: &str = "-";
/// A player row must reach the TE column.
const MIN_PLAYER_CELLS: usize = 8;

/// Team -> position -> players, built from a FantasyPros depth chart export.
/// Teams are kept in name order so lookups are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthChart {
    teams: BTreeMap<String, PositionDepth>,
}

impl DepthChart {
    /// Parse CSV text already in memory.
    pub fn from_csv(text: &str) -> Result<Self, ParseError> {
        Self::from_reader(text.as_bytes())
    }

    /// Load and parse a depth chart export from disk.
    #[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ParseError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_reader(file)
    }

    /// Tokenize row by row; ragged or unexpected rows are skipped, only a
    /// record that cannot be read at all fails the build.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut teams: BTreeMap<String, PositionDepth> = BTreeMap::new();
        let mut current_team: Option<String> = None;
        let mut skipped = 0usize;

        for (index, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| ParseError::Tokenize {
                record: e.position().map(|p| p.record()).unwrap_or(index as u64),
                message: e.to_string(),
            })?;
            let row: Vec<&str> = record.iter().map(clean_cell).collect();

            if row.iter().all(|c| c.is_empty()) {
                continue;
            }

            // Team header: only the first cell carries text.
            if row.len() == 1 || row[1..].iter().all(|c| c.is_empty()) {
                let name = row[0];
                if !name.is_empty() && !name.starts_with(EXCLUDED_PREFIX) {
                    debug!(team = %name, "Depth chart team header");
                    teams.insert(name.to_string(), PositionDepth::default());
                    current_team = Some(name.to_string());
                }
                continue;
            }

            if row[0].starts_with(EXCLUDED_PREFIX) || row.iter().any(|c| c.contains(HEADER_MARKER)) {
                continue;
            }

            let Some(depth) = current_team.as_ref().and_then(|t| teams.get_mut(t)) else {
                skipped += 1;
                continue;
            };
            if row.len() < MIN_PLAYER_CELLS {
                skipped += 1;
                continue;
            }

            for position in Position::ALL {
                let name = row[position.column()];
                if is_player_name(name) {
                    depth.get_mut(position).push(name.to_string());
                }
            }
        }

        info!(team_count = teams.len(), skipped_rows = skipped, "Parsed depth chart");
        Ok(DepthChart { teams })
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn teams(&self) -> impl Iterator<Item = (&str, &PositionDepth)> {
        self.teams.iter().map(|(name, depth)| (name.as_str(), depth))
    }

    pub fn team(&self, name: &str) -> Option<&PositionDepth> {
        self.teams.get(name)
    }

    /// Team currently listing `player`. With duplicate names the first team
    /// in name order wins.
    pub fn team_of(&self, player: &str) -> Option<&str> {
        let wanted = normalize_name(player);
        self.teams
            .iter()
            .find(|(_, depth)| depth.iter().any(|(_, name)| normalize_name(name) == wanted))
            .map(|(team, _)| team.as_str())
    }

    pub fn players(&self, team: &str, position: Position) -> &[String] {
        self.teams.get(team).map(|d| d.get(position)).unwrap_or(&[])
    }

    /// Whether `player` is listed under `claimed_team`. Unknown players are never on a team.
    pub fn is_on_team(&self, player: &str, claimed_team: &str) -> bool {
        match self.team_of(player) {
            Some(actual) => normalize_name(actual) == normalize_name(claimed_team),
            None => false,
        }
    }

    /// Full team name for a short schedule name, e.g. "Buffalo" -> "Buffalo Bills".
    pub fn find_team(&self, partial: &str) -> Option<&str> {
        let partial = partial.trim().to_lowercase();
        if partial.is_empty() {
            return None;
        }
        self.teams
            .keys()
            .find(|name| name.to_lowercase().contains(&partial))
            .map(|name| name.as_str())
    }

    /// Depth lines for the teams playing in `games`.
    pub fn format_for_games(&self, games: &[Game]) -> String {
        let mut included: Vec<&str> = games
            .iter()
            .flat_map(|g| [self.find_team(&g.away_team), self.find_team(&g.home_team)])
            .flatten()
            .collect();
        included.sort_unstable();
        included.dedup();

        let mut lines: Vec<String> = Vec::new();
        for team in included {
            if let Some(depth) = self.teams.get(team) {
                push_team_lines(&mut lines, team, depth, [3, 5, 6, 3]);
            }
        }
        lines.join("\n")
    }

    /// Every team, top of each position only.
    pub fn format_compact(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for (team, depth) in &self.teams {
            push_team_lines(&mut lines, team, depth, [2, 4, 5, 2]);
        }
        lines.join("\n")
    }
}

/// `limits` are per position in QB/RB/WR/TE order.
fn push_team_lines(lines: &mut Vec<String>, team: &str, depth: &PositionDepth, limits: [usize; 4]) {
    lines.push(format!("\n{}", team.to_uppercase()));
    for (position, limit) in Position::ALL.into_iter().zip(limits) {
        let players = depth.get(position);
        if !players.is_empty() {
            let top: Vec<&str> = players.iter().take(limit).map(|s| s.as_str()).collect();
            lines.push(format!("  {}: {}", position.code(), top.join(", ")));
        }
    }
}

fn clean_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}

fn is_player_name(cell: &str) -> bool {
    !cell.is_empty() && cell != PLACEHOLDER && !cell.starts_with(EXCLUDED_PREFIX)
}
