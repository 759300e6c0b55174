use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::game::{Game, TimeSlot};

/// Which games of the week to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    All,
    GameIds(Vec<String>),
    AfternoonOnly,
    EarlyOnly,
    PrimetimeOnly,
    /// Free-text fragments matched against "Away @ Home".
    Matchups(Vec<String>),
}

impl Focus {
    /// Interpret a free-text focus setting: "all", a slot keyword, or a
    /// comma-separated list of matchup fragments.
    pub fn parse(focus: &str) -> Focus {
        let trimmed = focus.trim();
        let lower = trimmed.to_lowercase();
        if lower.is_empty() || lower == "all" {
            Focus::All
        } else if lower.contains("afternoon") {
            Focus::AfternoonOnly
        } else if lower.contains("early") {
            Focus::EarlyOnly
        } else if lower.contains("primetime") {
            Focus::PrimetimeOnly
        } else {
            let fragments: Vec<String> = trimmed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            // Nothing but separators narrows nothing.
            if fragments.is_empty() { Focus::All } else { Focus::Matchups(fragments) }
        }
    }
}

impl FromStr for Focus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Focus::parse(s))
    }
}

/// Games matching `focus`, in their original order. Never fails; no match is an empty list.
pub fn select_games(games: &[Game], focus: &Focus) -> Vec<Game> {
    match focus {
        Focus::All => games.to_vec(),
        Focus::GameIds(ids) => {
            let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
            games.iter().filter(|g| wanted.contains(g.game_id.as_str())).cloned().collect()
        }
        Focus::AfternoonOnly => games.iter().filter(|g| time_contains(g, &["4:", "8:"])).cloned().collect(),
        Focus::EarlyOnly => games.iter().filter(|g| time_contains(g, &["1:"])).cloned().collect(),
        Focus::PrimetimeOnly => games.iter().filter(|g| time_contains(g, &["8:", "9:"])).cloned().collect(),
        Focus::Matchups(fragments) => games
            .iter()
            .filter(|g| fragments.iter().any(|f| g.matchup.contains(f.as_str())))
            .cloned()
            .collect(),
    }
}

// Slot keywords look at the raw kickoff text, not `time_slot`.
fn time_contains(game: &Game, needles: &[&str]) -> bool {
    needles.iter().any(|n| game.time.contains(n))
}

/// Render games grouped by slot for inclusion in a prompt.
pub fn format_slate(games: &[Game]) -> String {
    if games.is_empty() {
        return "No game data available. Please check the schedule URL.".to_string();
    }

    let mut lines = vec!["# NFL Games for Analysis".to_string()];
    let mut number = 0usize;
    for slot in TimeSlot::PRESENTATION_ORDER {
        let group: Vec<&Game> = games.iter().filter(|g| g.time_slot == slot).collect();
        if group.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("## {}", slot.label()));
        for game in group {
            number += 1;
            lines.push(format!("{}. **{}** - {} ({})", number, game.matchup, game.time, game.status));
        }
    }

    lines.push(String::new());
    lines.push(format!("Total games to analyze: {}", games.len()));
    lines.join("\n")
}
