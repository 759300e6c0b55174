use nfl_slate_lambda_rust::depth_chart::DepthChart;
use nfl_slate_lambda_rust::error::ParseError;
use nfl_slate_lambda_rust::model::depth::Position;
use nfl_slate_lambda_rust::model::game::Game;

fn load_sample() -> DepthChart {
    DepthChart::from_path("tests/sample_depth_chart.csv").expect("from_path failed")
}

#[test]
fn builds_single_team_block() {
    let csv = "Kansas City Chiefs\n,Patrick Mahomes,,Isiah Pacheco,,Rashee Rice,,Travis Kelce\n";
    let chart = DepthChart::from_csv(csv).expect("from_csv failed");

    assert_eq!(chart.len(), 1);
    assert_eq!(chart.players("Kansas City Chiefs", Position::QB), ["Patrick Mahomes"]);
    assert_eq!(chart.players("Kansas City Chiefs", Position::RB), ["Isiah Pacheco"]);
    assert_eq!(chart.players("Kansas City Chiefs", Position::WR), ["Rashee Rice"]);
    assert_eq!(chart.players("Kansas City Chiefs", Position::TE), ["Travis Kelce"]);
}

#[test]
fn parses_export_with_headers_and_ragged_rows() {
    let chart = load_sample();

    let teams: Vec<&str> = chart.teams().map(|(name, _)| name).collect();
    assert_eq!(teams, vec!["Baltimore Ravens", "Buffalo Bills", "Kansas City Chiefs", "Philadelphia Eagles"]);

    // Depth order follows row order; empty cells are not appended.
    assert_eq!(chart.players("Baltimore Ravens", Position::QB), ["Lamar Jackson", "Cooper Rush"]);
    assert_eq!(
        chart.players("Baltimore Ravens", Position::RB),
        ["Derrick Henry", "Justice Hill", "Keaton Mitchell"]
    );
    assert_eq!(chart.players("Baltimore Ravens", Position::TE), ["Mark Andrews", "Isaiah Likely"]);

    // Placeholders are dropped.
    assert_eq!(chart.players("Philadelphia Eagles", Position::RB), ["Saquon Barkley"]);
    assert_eq!(chart.players("Philadelphia Eagles", Position::TE), ["Dallas Goedert"]);
}

#[test]
fn every_team_has_all_positions() {
    let csv = "New York Jets,,,,,,,\n";
    let chart = DepthChart::from_csv(csv).expect("from_csv failed");
    let depth = chart.team("New York Jets").expect("team should exist");
    for position in Position::ALL {
        assert!(depth.get(position).is_empty());
    }
}

#[test]
fn rows_before_first_team_are_ignored() {
    let csv = ",Orphan Player,,Orphan Back,,Orphan Wideout,,Orphan End\nDenver Broncos\n,Bo Nix,,RJ Harvey,,Courtland Sutton,,Evan Engram\n";
    let chart = DepthChart::from_csv(csv).expect("from_csv failed");
    assert_eq!(chart.len(), 1);
    assert_eq!(chart.team_of("Orphan Player"), None);
    assert_eq!(chart.team_of("Bo Nix"), Some("Denver Broncos"));
}

#[test]
fn looks_up_players_by_normalized_name() {
    let chart = load_sample();
    assert_eq!(chart.team_of("Derrick Henry"), Some("Baltimore Ravens"));
    assert_eq!(chart.team_of("saquon   barkley"), Some("Philadelphia Eagles"));
    assert_eq!(chart.team_of("Stefon Diggs"), None);

    assert!(chart.is_on_team("Derrick Henry", "Baltimore Ravens"));
    assert!(!chart.is_on_team("Derrick Henry", "Tennessee Titans"));
    assert!(!chart.is_on_team("Stefon Diggs", "Houston Texans"));
}

#[test]
fn duplicate_names_resolve_to_first_team_by_name() {
    let csv = "San Francisco 49ers\n,,,,,Mike Williams,,\nLos Angeles Chargers\n,,,,,Mike Williams,,\n";
    let chart = DepthChart::from_csv(csv).expect("from_csv failed");
    assert_eq!(chart.team_of("Mike Williams"), Some("Los Angeles Chargers"));
}

#[test]
fn finds_full_team_names_from_schedule_names() {
    let chart = load_sample();
    assert_eq!(chart.find_team("Buffalo"), Some("Buffalo Bills"));
    assert_eq!(chart.find_team("philadelphia"), Some("Philadelphia Eagles"));
    assert_eq!(chart.find_team("Houston"), None);
    assert_eq!(chart.find_team("  "), None);
}

#[test]
fn formats_depth_for_selected_games() {
    let chart = load_sample();
    let games = vec![
        Game::new("Buffalo".into(), "New England".into(), "1:00 PM".into(), "Sunday".into()),
        Game::new("Baltimore".into(), "Cincinnati".into(), "1:00 PM".into(), "Sunday".into()),
    ];
    let text = chart.format_for_games(&games);

    assert!(text.contains("BALTIMORE RAVENS"), "text was: {}", text);
    assert!(text.contains("BUFFALO BILLS"), "text was: {}", text);
    assert!(!text.contains("KANSAS CITY CHIEFS"), "text was: {}", text);
    assert!(text.contains("  RB: Derrick Henry, Justice Hill, Keaton Mitchell"), "text was: {}", text);
    // Teams are listed alphabetically.
    assert!(text.find("BALTIMORE").unwrap() < text.find("BUFFALO").unwrap());
}

#[test]
fn compact_format_limits_depth() {
    let chart = load_sample();
    let text = chart.format_compact();
    assert!(text.contains("PHILADELPHIA EAGLES"), "text was: {}", text);
    assert!(text.contains("  RB: Derrick Henry, Justice Hill, Keaton Mitchell"), "text was: {}", text);
    assert!(text.contains("  QB: Lamar Jackson, Cooper Rush"), "text was: {}", text);
    assert!(text.contains("  WR: Zay Flowers, Rashod Bateman, DeAndre Hopkins"), "text was: {}", text);
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let bytes: &[u8] = b"Baltimore Ravens\n,Lamar \xff\xfe Jackson,,,,,,\n";
    let err = DepthChart::from_reader(bytes).expect_err("invalid utf-8 should fail");
    assert!(matches!(err, ParseError::Tokenize { .. }), "error was: {}", err);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = DepthChart::from_path("tests/does_not_exist.csv").expect_err("missing file should fail");
    assert!(matches!(err, ParseError::Read { .. }), "error was: {}", err);
}
