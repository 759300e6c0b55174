use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(a\.?m\.?|p\.?m\.?)?").expect("static time pattern")
});

/// Coarse kickoff window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Early,
    Afternoon,
    Night,
    Thursday,
    Monday,
}

impl TimeSlot {
    /// Order used when rendering a slate.
    pub const PRESENTATION_ORDER: [TimeSlot; 5] = [
        TimeSlot::Early,
        TimeSlot::Afternoon,
        TimeSlot::Night,
        TimeSlot::Thursday,
        TimeSlot::Monday,
    ];

    /// Classify from the day header and the free-text kickoff time.
    /// Day names win over the clock; kickoffs are PM unless marked AM.
    pub fn classify(day: &str, time: &str) -> TimeSlot {
        let day_lower = day.to_lowercase();
        let words: Vec<&str> = day_lower
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| !w.is_empty())
            .collect();
        if words.iter().any(|w| matches!(*w, "monday" | "mon" | "mnf")) {
            return TimeSlot::Monday;
        }
        if words.iter().any(|w| matches!(*w, "thursday" | "thu" | "thurs" | "tnf")) {
            return TimeSlot::Thursday;
        }

        match kickoff_hour(time) {
            Some(h) if h >= 20 => TimeSlot::Night,
            Some(h) if h >= 16 => TimeSlot::Afternoon,
            _ => TimeSlot::Early,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Early => "early",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Night => "night",
            TimeSlot::Thursday => "thursday",
            TimeSlot::Monday => "monday",
        }
    }

    /// Heading used in the rendered slate.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Early => "Early Games",
            TimeSlot::Afternoon => "Afternoon Games",
            TimeSlot::Night => "Night Games",
            TimeSlot::Thursday => "Thursday Night",
            TimeSlot::Monday => "Monday Night",
        }
    }
}

/// 24-hour kickoff hour from the first `H:MM` in `time`.
fn kickoff_hour(time: &str) -> Option<u32> {
    let caps = TIME_PATTERN.captures(time)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    if hour == 0 || hour > 12 {
        // Already 24-hour (or nonsense); take it as-is.
        return Some(hour);
    }
    let is_am = caps
        .get(3)
        .map(|m| m.as_str().to_ascii_lowercase().starts_with('a'))
        .unwrap_or(false);
    Some(match (is_am, hour) {
        (true, 12) => 0,
        (true, h) => h,
        (false, 12) => 12,
        (false, h) => h + 12,
    })
}

/// One scheduled game as scraped from the weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub away_team: String,
    pub home_team: String,
    pub time: String,
    pub day: String,
    pub status: String,
    pub matchup: String,
    pub time_slot: TimeSlot,
    pub game_id: String,
}

impl Game {
    pub fn new(away_team: String, home_team: String, time: String, day: String) -> Self {
        Self::with_status(away_team, home_team, time, day, "Scheduled".to_string())
    }

    pub fn with_status(away_team: String, home_team: String, time: String, day: String, status: String) -> Self {
        let time_slot = TimeSlot::classify(&day, &time);
        let matchup = format!("{} @ {}", away_team, home_team);
        let game_id = game_id(&away_team, &home_team, time_slot);
        Game { away_team, home_team, time, day, status, matchup, time_slot, game_id }
    }
}

/// Stable id: `{away}_{home}_{slot}` with non-alphanumerics removed from the names.
pub fn game_id(away_team: &str, home_team: &str, slot: TimeSlot) -> String {
    let clean = |s: &str| s.chars().filter(|c| c.is_alphanumeric()).collect::<String>();
    format!("{}_{}_{}", clean(away_team), clean(home_team), slot.as_str())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub week: Option<u32>,
    pub year: Option<i32>,
    pub season_type: Option<u32>,
    pub game_count: usize,
    pub extracted_at: DateTime<Utc>,
}
