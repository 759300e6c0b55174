use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, info_span, instrument, warn};

use crate::error::{ExtractError, FetchError};
use crate::model::game::{Game, ScheduleMetadata};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const HOME_MARKER: char = '@';
const TIME_TBD: &str = "TBD";
const STATUS_SCHEDULED: &str = "Scheduled";
/// Rows shorter than a game row may still carry a day label.
const MIN_GAME_CELLS: usize = 3;
const WEEKDAYS: [&str; 7] = ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];

static ROWS: LazyLock<Selector> = LazyLock::new(|| selector("div.Table__Title, tr"));
static CELLS: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static LINKS: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static TIME_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.date__col"));
static SCHEDULE_TABLES: LazyLock<Selector> = LazyLock::new(|| selector("div.ScheduleTables"));
static CARDS: LazyLock<Selector> = LazyLock::new(|| selector("section.Card"));
static CARD_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".Table__Title"));
static SCORE_TEAMS: LazyLock<Selector> = LazyLock::new(|| selector("div.ScoreCell__TeamName"));
static SCORE_TIME: LazyLock<Selector> = LazyLock::new(|| selector("div.ScoreCell__Time"));
static SCORE_STATUS: LazyLock<Selector> = LazyLock::new(|| selector("div.ScoreCell__Status"));

static WEEK_SEGMENT: LazyLock<Regex> = LazyLock::new(|| pattern(r"/week/(\d+)"));
static YEAR_SEGMENT: LazyLock<Regex> = LazyLock::new(|| pattern(r"/year/(\d+)"));
static SEASON_TYPE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| pattern(r"/seasontype/(\d+)"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("static pattern")
}

/// Where to fetch the weekly schedule from and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub url: String,
    pub timeout: Duration,
}

impl ScheduleConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), timeout: DEFAULT_TIMEOUT }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Games scraped from one ESPN weekly schedule page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub games: Vec<Game>,
    pub metadata: ScheduleMetadata,
}

/// Why a row produced no game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoCells,
    TooFewCells(usize),
    MissingHomeMarker,
    MissingTeam,
}

/// What a container turned out to be during the walk.
enum Row<'a> {
    DayHeader(String),
    Cells(ElementRef<'a>, Vec<ElementRef<'a>>),
}

impl Schedule {
    /// Fetch the schedule page and parse it.
    #[instrument(level = "info", skip(config), fields(url = %config.url))]
    pub fn fetch(config: &ScheduleConfig) -> Result<Self, FetchError> {
        let body = fetch_markup(config)?;
        let schedule = Self::from_html(&body, &config.url, Utc::now());
        info!(game_count = schedule.games.len(), week = ?schedule.metadata.week, "Constructed Schedule from ESPN");
        Ok(schedule)
    }

    /// Parse already-fetched markup (no network). Never fails: markup without
    /// recognizable rows yields an empty schedule.
    pub fn from_html(markup: &str, source_url: &str, extracted_at: DateTime<Utc>) -> Self {
        let document = Html::parse_document(markup);

        let games = match extract_games(&document) {
            Ok(games) => games,
            Err(e) => {
                warn!(error = %e, url = %source_url, "No schedule containers found; returning empty schedule");
                Vec::new()
            }
        };

        let metadata = ScheduleMetadata {
            week: url_number(&WEEK_SEGMENT, source_url),
            year: url_number(&YEAR_SEGMENT, source_url),
            season_type: url_number(&SEASON_TYPE_SEGMENT, source_url),
            game_count: games.len(),
            extracted_at,
        };

        Schedule { games, metadata }
    }

    pub fn game_ids(&self) -> Vec<&str> {
        self.games.iter().map(|g| g.game_id.as_str()).collect()
    }
}

fn fetch_markup(config: &ScheduleConfig) -> Result<String, FetchError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .http_status_as_error(false)
        .build()
        .into();

    let response_result = {
        let _span = info_span!("espn_fetch", url = %config.url).entered();
        agent.get(config.url.as_str()).header("User-Agent", USER_AGENT).call()
    };

    let response = response_result.map_err(|e| {
        error!(error = %e, url = %config.url, "Schedule request failed");
        FetchError::Request { url: config.url.clone(), message: e.to_string() }
    })?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        error!(status, url = %config.url, "Schedule request returned non-success status");
        return Err(FetchError::Status { url: config.url.clone(), status });
    }

    let mut body_reader = response.into_body();
    body_reader.read_to_string().map_err(|e| {
        error!(error = %e, "Failed to read schedule response body");
        FetchError::Body { url: config.url.clone(), message: e.to_string() }
    })
}

/// Try the positional row walk, then score-cell cards, then team links in rows.
/// The first strategy that yields any game wins.
fn extract_games(document: &Html) -> Result<Vec<Game>, ExtractError> {
    let rows = classify_rows(document);
    let cards = score_cards(document);
    if rows.is_empty() && cards.is_empty() {
        return Err(ExtractError::NoContainers);
    }

    let games = walk_rows(&rows, parse_positional_row);
    if !games.is_empty() {
        return Ok(games);
    }

    let games = walk_cards(&cards);
    if !games.is_empty() {
        return Ok(games);
    }

    debug!(row_count = rows.len(), card_count = cards.len(), "No positional or card games; trying link-based rows");
    Ok(walk_rows(&rows, parse_linked_row))
}

fn classify_rows(document: &Html) -> Vec<Row<'_>> {
    document
        .select(&ROWS)
        .filter_map(|el| {
            if el.value().name() != "tr" {
                let label = element_text(el);
                return (!label.is_empty()).then_some(Row::DayHeader(label));
            }
            let cells: Vec<ElementRef> = el.select(&CELLS).collect();
            // Header-only rows and short colspan rows can both name the day.
            if cells.len() < MIN_GAME_CELLS {
                let text = element_text(el);
                if names_weekday(&text) {
                    return Some(Row::DayHeader(text));
                }
            }
            Some(Row::Cells(el, cells))
        })
        .collect()
}

/// Walk rows in order, carrying the most recent day header into each game.
fn walk_rows<'a, F>(rows: &[Row<'a>], parse: F) -> Vec<Game>
where
    F: Fn(ElementRef<'a>, &[ElementRef<'a>], &str) -> Result<Game, SkipReason>,
{
    let mut day = String::new();
    let mut games = Vec::new();
    for row in rows {
        match row {
            Row::DayHeader(label) => day = label.clone(),
            Row::Cells(el, cells) => match parse(*el, cells.as_slice(), day.as_str()) {
                Ok(game) => games.push(game),
                Err(reason) => debug!(?reason, "Skipped schedule row"),
            },
        }
    }
    games
}

/// away cell, "@ home" cell, time cell.
fn parse_positional_row(_row: ElementRef<'_>, cells: &[ElementRef<'_>], day: &str) -> Result<Game, SkipReason> {
    if cells.is_empty() {
        return Err(SkipReason::NoCells);
    }
    if cells.len() < MIN_GAME_CELLS {
        return Err(SkipReason::TooFewCells(cells.len()));
    }

    let away = last_link_text(cells[0]).unwrap_or_else(|| element_text(cells[0]));

    let home_text = element_text(cells[1]);
    let Some(after_marker) = home_text.strip_prefix(HOME_MARKER) else {
        return Err(SkipReason::MissingHomeMarker);
    };
    let home = last_link_text(cells[1]).unwrap_or_else(|| after_marker.trim().to_string());

    if away.is_empty() || home.is_empty() {
        return Err(SkipReason::MissingTeam);
    }

    let time = non_empty_or_tbd(element_text(cells[2]));
    Ok(Game::new(away, home, time, day.to_string()))
}

/// First two team links in the row, time from the dedicated time cell.
fn parse_linked_row(row: ElementRef<'_>, cells: &[ElementRef<'_>], day: &str) -> Result<Game, SkipReason> {
    if cells.is_empty() {
        return Err(SkipReason::NoCells);
    }
    let mut links = row
        .select(&LINKS)
        .map(element_text)
        .filter(|t| !t.is_empty() && t != "@");
    let (Some(away), Some(home)) = (links.next(), links.next()) else {
        return Err(SkipReason::MissingTeam);
    };

    let time = first_text(row, &TIME_CELL);
    Ok(Game::new(away, home, non_empty_or_tbd(time), day.to_string()))
}

/// `div.ScheduleTables` containers, or `section.Card` when the page has none.
fn score_cards(document: &Html) -> Vec<ElementRef<'_>> {
    let tables: Vec<ElementRef> = document.select(&SCHEDULE_TABLES).collect();
    if !tables.is_empty() {
        return tables;
    }
    document.select(&CARDS).collect()
}

fn walk_cards(cards: &[ElementRef<'_>]) -> Vec<Game> {
    cards
        .iter()
        .filter_map(|card| match parse_score_card(*card) {
            Ok(game) => Some(game),
            Err(reason) => {
                debug!(?reason, "Skipped schedule card");
                None
            }
        })
        .collect()
}

/// Two team names, kickoff and status from the card's score cell.
fn parse_score_card(card: ElementRef<'_>) -> Result<Game, SkipReason> {
    let mut teams = card.select(&SCORE_TEAMS).map(element_text).filter(|t| !t.is_empty());
    let (Some(away), Some(home)) = (teams.next(), teams.next()) else {
        return Err(SkipReason::MissingTeam);
    };

    let time = first_text(card, &SCORE_TIME);
    let status = first_text(card, &SCORE_STATUS);
    let status = if status.is_empty() { STATUS_SCHEDULED.to_string() } else { status };
    let day = first_text(card, &CARD_TITLE);
    Ok(Game::with_status(away, home, non_empty_or_tbd(time), day, status))
}

fn first_text(el: ElementRef<'_>, selector: &Selector) -> String {
    el.select(selector).next().map(element_text).unwrap_or_default()
}

fn last_link_text(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&LINKS).map(element_text).filter(|t| !t.is_empty()).last()
}

/// Text content with whitespace runs collapsed.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

fn names_weekday(text: &str) -> bool {
    let lower = text.to_lowercase();
    WEEKDAYS.iter().any(|d| lower.contains(d))
}

fn non_empty_or_tbd(time: String) -> String {
    if time.is_empty() { TIME_TBD.to_string() } else { time }
}

fn url_number<T: std::str::FromStr>(re: &Regex, url: &str) -> Option<T> {
    re.captures(url)?.get(1)?.as_str().parse().ok()
}
