use nfl_slate_lambda_rust::model::game::{Game, TimeSlot, game_id};
use nfl_slate_lambda_rust::names::{normalize_name, same_name};

#[test]
fn normalize_ignores_case_whitespace_and_suffixes() {
    assert_eq!(normalize_name("Patrick Mahomes Jr."), normalize_name("patrick   mahomes"));
    assert_eq!(normalize_name("  Marvin Harrison  Jr. "), "marvin harrison");
    assert_eq!(normalize_name("Kenneth Walker III"), "kenneth walker");
    assert_eq!(normalize_name("Michael Pittman II"), "michael pittman");
    assert_eq!(normalize_name("Odell Beckham SR."), "odell beckham");
}

#[test]
fn normalize_keeps_suffix_like_text_inside_names() {
    // Only whole tokens after the first are treated as suffixes.
    assert_eq!(normalize_name("Iiro Jr.son"), "iiro jr.son");
    assert_eq!(normalize_name("II Smith"), "ii smith");
}

#[test]
fn normalize_is_idempotent() {
    for name in ["Patrick Mahomes Jr.", "  A.J.   Brown ", "Kenneth Walker III", "", "Jr. Jr.", "De'Von Achane II"] {
        let once = normalize_name(name);
        assert_eq!(normalize_name(&once), once, "input was: {:?}", name);
    }
}

#[test]
fn same_name_compares_normalized() {
    assert!(same_name("Baltimore Ravens", "baltimore  ravens"));
    assert!(!same_name("Baltimore Ravens", "Tennessee Titans"));
}

#[test]
fn classifies_time_slots() {
    assert_eq!(TimeSlot::classify("", "1:05 PM"), TimeSlot::Early);
    assert_eq!(TimeSlot::classify("", "4:25 PM"), TimeSlot::Afternoon);
    assert_eq!(TimeSlot::classify("", "8:20 PM"), TimeSlot::Night);
    assert_eq!(TimeSlot::classify("Monday", "1:00 PM"), TimeSlot::Monday);
    assert_eq!(TimeSlot::classify("Thursday, November 27", "4:30 PM"), TimeSlot::Thursday);
    // Unmarked times are PM.
    assert_eq!(TimeSlot::classify("Sunday", "4:05"), TimeSlot::Afternoon);
    // Morning international games are marked AM.
    assert_eq!(TimeSlot::classify("Sunday", "9:30 AM"), TimeSlot::Early);
    assert_eq!(TimeSlot::classify("Sunday", "TBD"), TimeSlot::Early);
    assert_eq!(TimeSlot::classify("", ""), TimeSlot::Early);
}

#[test]
fn game_derives_matchup_and_id() {
    let game = Game::new("Kansas City".into(), "Las Vegas".into(), "4:25 PM".into(), "Sunday".into());
    assert_eq!(game.matchup, "Kansas City @ Las Vegas");
    assert_eq!(game.status, "Scheduled");
    assert_eq!(game.time_slot, TimeSlot::Afternoon);
    assert_eq!(game.game_id, "KansasCity_LasVegas_afternoon");
    assert_eq!(game.game_id, game_id("Kansas City", "Las Vegas", TimeSlot::Afternoon));

    let again = Game::new("Kansas City".into(), "Las Vegas".into(), "4:25 PM".into(), "Sunday".into());
    assert_eq!(game, again);
}

#[test]
fn game_serializes_slot_lowercase() {
    let game = Game::new("N.Y. Jets".into(), "New Orleans".into(), "8:15 PM".into(), "Monday".into());
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["time_slot"], "monday");
    assert_eq!(json["game_id"], "NYJets_NewOrleans_monday");
}

#[test]
fn classifies_noon_midnight_and_24_hour_times() {
    // 12 PM stays 12, not 24.
    assert_eq!(TimeSlot::classify("Sunday", "12:00 PM"), TimeSlot::Early);
    assert_eq!(TimeSlot::classify("Sunday", "12:30 AM"), TimeSlot::Early);
    assert_eq!(TimeSlot::classify("Sunday", "11:00 PM"), TimeSlot::Night);
    // Hours past 12 are already 24-hour.
    assert_eq!(TimeSlot::classify("Sunday", "17:00"), TimeSlot::Afternoon);
    assert_eq!(TimeSlot::classify("Sunday", "20:15"), TimeSlot::Night);
    assert_eq!(TimeSlot::classify("Sunday", "0:30"), TimeSlot::Early);
}
