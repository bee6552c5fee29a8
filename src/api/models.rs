//! Response shapes of the data feed and the stats API.
//!
//! The data feed encodes every number as a string and collapses single-element
//! arrays into a bare object, so numeric fields are read through [`StatValue`]
//! and list fields through [`one_or_many`].

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use super::error::NbaApiError;
use crate::types::GameStatus;

/// Description the feed uses for the play closing a period
pub const END_PERIOD_DESCRIPTION: &str = "End Period";

/// Last regulation period
pub const REGULATION_PERIODS: u32 = 4;

/// Result set holding a team's season-wide averages
pub const OVERALL_TEAM_DASHBOARD: &str = "OverallTeamDashboard";

/// Deserialize a list that the feed may send as a single object, or omit
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

/// A numeric field as sent by the feed ("12", "0.456", "" or a bare number)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatValue(String);

impl StatValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_u32(&self) -> u32 {
        self.0.trim().parse().unwrap_or(0)
    }

    pub fn as_i32(&self) -> i32 {
        self.0.trim().trim_start_matches('+').parse().unwrap_or(0)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.trim().parse().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<'de> Deserialize<'de> for StatValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
            Null(()),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => StatValue(s),
            Raw::Int(n) => StatValue(n.to_string()),
            Raw::Float(n) => StatValue(n.to_string()),
            Raw::Null(()) => StatValue::default(),
        })
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue(s.to_string())
    }
}

impl From<u32> for StatValue {
    fn from(n: u32) -> Self {
        StatValue(n.to_string())
    }
}

impl From<i32> for StatValue {
    fn from(n: i32) -> Self {
        StatValue(n.to_string())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Games by date
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GamesResponse {
    pub sports_content: GamesContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GamesContent {
    pub games: GameList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameList {
    #[serde(deserialize_with = "one_or_many")]
    pub game: Vec<ScheduledGame>,
}

/// One entry of the daily schedule
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduledGame {
    pub id: String,
    pub date: String,
    pub time: String,
    pub arena: String,
    pub city: String,
    pub state: String,
    pub period_time: PeriodTime,
    pub visitor: TeamLine,
    pub home: TeamLine,
}

impl ScheduledGame {
    pub fn status(&self) -> GameStatus {
        self.period_time.status()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PeriodTime {
    pub period_value: StatValue,
    pub period_status: String,
    pub game_status: StatValue,
    pub game_clock: String,
    pub total_periods: StatValue,
    pub period_name: String,
}

impl PeriodTime {
    pub fn status(&self) -> GameStatus {
        GameStatus::from_code(self.game_status.as_str())
    }

    pub fn period(&self) -> u32 {
        self.period_value.as_u32()
    }
}

/// A team's side of a game: score, line score, and (in the box score) stats
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamLine {
    pub id: StatValue,
    pub team_key: String,
    pub city: String,
    pub abbreviation: String,
    pub nickname: String,
    pub score: StatValue,
    pub linescores: Linescores,
    #[serde(rename = "Leaders")]
    pub leaders: Leaders,
    pub stats: TeamStats,
    pub players: PlayerList,
}

impl TeamLine {
    pub fn full_name(&self) -> String {
        match (self.city.is_empty(), self.nickname.is_empty()) {
            (false, false) => format!("{} {}", self.city, self.nickname),
            (true, false) => self.nickname.clone(),
            _ => self.abbreviation.clone(),
        }
    }

    pub fn periods(&self) -> &[PeriodScore] {
        &self.linescores.period
    }

    /// Points scored in the given period (1-based), if the feed has it
    pub fn period_score(&self, period: u32) -> Option<u32> {
        self.linescores
            .period
            .iter()
            .find(|p| p.period_value.as_u32() == period)
            .map(|p| p.score.as_u32())
    }

    pub fn players(&self) -> &[PlayerLine] {
        &self.players.player
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Linescores {
    #[serde(deserialize_with = "one_or_many")]
    pub period: Vec<PeriodScore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PeriodScore {
    pub period_value: StatValue,
    pub period_name: String,
    pub score: StatValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Leaders {
    #[serde(rename = "Points")]
    pub points: Option<LeaderCategory>,
    #[serde(rename = "Rebounds")]
    pub rebounds: Option<LeaderCategory>,
    #[serde(rename = "Assists")]
    pub assists: Option<LeaderCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeaderCategory {
    #[serde(rename = "StatValue")]
    pub stat_value: StatValue,
    #[serde(deserialize_with = "one_or_many")]
    pub leader: Vec<Leader>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Leader {
    #[serde(rename = "PersonID")]
    pub person_id: StatValue,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
}

impl Leader {
    pub fn short_name(&self) -> String {
        short_name(&self.first_name, &self.last_name)
    }
}

/// "LeBron" + "James" -> "L. James"
fn short_name(first: &str, last: &str) -> String {
    match first.chars().next() {
        Some(initial) => format!("{}. {}", initial, last),
        None => last.to_string(),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub points: StatValue,
    pub field_goals_made: StatValue,
    pub field_goals_attempted: StatValue,
    pub field_goals_percentage: StatValue,
    pub free_throws_made: StatValue,
    pub free_throws_attempted: StatValue,
    pub free_throws_percentage: StatValue,
    pub three_pointers_made: StatValue,
    pub three_pointers_attempted: StatValue,
    pub three_pointers_percentage: StatValue,
    pub rebounds_offensive: StatValue,
    pub rebounds_defensive: StatValue,
    pub team_rebounds: StatValue,
    pub assists: StatValue,
    pub fouls: StatValue,
    pub team_fouls: StatValue,
    pub technical_fouls: StatValue,
    pub steals: StatValue,
    pub turnovers: StatValue,
    pub team_turnovers: StatValue,
    pub blocks: StatValue,
    pub short_timeout_remaining: StatValue,
    pub full_timeout_remaining: StatValue,
}

impl TeamStats {
    pub fn rebounds(&self) -> u32 {
        self.rebounds_offensive.as_u32() + self.rebounds_defensive.as_u32()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerList {
    #[serde(deserialize_with = "one_or_many")]
    pub player: Vec<PlayerLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerLine {
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: String,
    pub person_id: StatValue,
    pub position_short: String,
    pub minutes: StatValue,
    pub seconds: StatValue,
    pub points: StatValue,
    pub field_goals_made: StatValue,
    pub field_goals_attempted: StatValue,
    pub three_pointers_made: StatValue,
    pub three_pointers_attempted: StatValue,
    pub free_throws_made: StatValue,
    pub free_throws_attempted: StatValue,
    pub rebounds_offensive: StatValue,
    pub rebounds_defensive: StatValue,
    pub assists: StatValue,
    pub fouls: StatValue,
    pub steals: StatValue,
    pub turnovers: StatValue,
    pub blocks: StatValue,
    pub plus_minus: StatValue,
    pub on_court: StatValue,
    pub starting_position: String,
}

impl PlayerLine {
    pub fn short_name(&self) -> String {
        short_name(&self.first_name, &self.last_name)
    }

    pub fn rebounds(&self) -> u32 {
        self.rebounds_offensive.as_u32() + self.rebounds_defensive.as_u32()
    }

    pub fn is_on_court(&self) -> bool {
        self.on_court.as_u32() == 1
    }
}

// ---------------------------------------------------------------------------
// Box score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoxscoreResponse {
    pub sports_content: BoxscoreContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoxscoreContent {
    pub sports_meta: SportsMeta,
    pub game: BoxscoreGame,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SportsMeta {
    pub season_meta: SeasonMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonMeta {
    pub calendar_date: String,
    pub season_year: String,
    pub stats_season_year: String,
    pub stats_season_id: String,
    pub display_year: String,
    pub display_season: String,
    pub season_stage: String,
}

impl SeasonMeta {
    /// "2017-18 Regular Season"
    pub fn display(&self) -> String {
        format!("{} {}", self.display_year, self.display_season)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoxscoreGame {
    pub id: String,
    pub date: String,
    pub time: String,
    pub arena: String,
    pub city: String,
    pub state: String,
    pub attendance: StatValue,
    pub period_time: PeriodTime,
    pub visitor: TeamLine,
    pub home: TeamLine,
}

impl BoxscoreGame {
    pub fn game_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y%m%d").ok()
    }

    /// Start time as "HH:MM", from the feed's "HHMM"
    pub fn start_time(&self) -> String {
        format_feed_time(&self.time)
    }

    /// "Staples Center | Los Angeles, CA"
    pub fn location(&self) -> String {
        if self.state.is_empty() {
            format!("{} | {}", self.arena, self.city)
        } else {
            format!("{} | {}, {}", self.arena, self.city, self.state)
        }
    }

    /// Number of periods to display: regulation plus any overtime played
    pub fn period_count(&self) -> u32 {
        let played = |team: &TeamLine| {
            team.periods()
                .iter()
                .map(|p| p.period_value.as_u32())
                .max()
                .unwrap_or(0)
        };
        REGULATION_PERIODS
            .max(played(&self.visitor))
            .max(played(&self.home))
            .max(self.period_time.period())
    }
}

/// "1930" -> "19:30"; anything else is returned unchanged
pub fn format_feed_time(time: &str) -> String {
    if time.len() == 4 && time.chars().all(|c| c.is_ascii_digit()) {
        format!("{}:{}", &time[0..2], &time[2..4])
    } else {
        time.to_string()
    }
}

/// Box score plus the season metadata that travels with it
#[derive(Debug, Clone, Default)]
pub struct Boxscore {
    pub season_meta: SeasonMeta,
    pub game: BoxscoreGame,
}

impl From<BoxscoreResponse> for Boxscore {
    fn from(response: BoxscoreResponse) -> Self {
        Boxscore {
            season_meta: response.sports_content.sports_meta.season_meta,
            game: response.sports_content.game,
        }
    }
}

// ---------------------------------------------------------------------------
// Play-by-play
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayByPlayResponse {
    pub sports_content: PlayByPlayContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayByPlayContent {
    pub game: PlayByPlay,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayByPlay {
    pub id: String,
    #[serde(deserialize_with = "one_or_many")]
    pub play: Vec<Play>,
}

impl PlayByPlay {
    pub fn last_play(&self) -> Option<&Play> {
        self.play.last()
    }

    /// Whether the latest event closes out the game
    pub fn is_final(&self) -> bool {
        self.last_play().map_or(false, Play::ends_game)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Play {
    pub event: StatValue,
    pub period: StatValue,
    pub clock: String,
    pub description: String,
    pub home_score: StatValue,
    pub visitor_score: StatValue,
    pub team_abr: String,
    pub person_id: StatValue,
}

impl Play {
    /// End of the fourth period or later, with no tie to send it to overtime
    pub fn ends_game(&self) -> bool {
        self.period.as_u32() >= REGULATION_PERIODS
            && self.description == END_PERIOD_DESCRIPTION
            && self.home_score.as_u32() != self.visitor_score.as_u32()
    }
}

// ---------------------------------------------------------------------------
// Stats API (team season splits)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|set| set.name == name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn value(&self, row: usize, header: &str) -> Option<&Value> {
        let column = self.headers.iter().position(|h| h == header)?;
        self.row_set.get(row)?.get(column)
    }

    fn number(&self, row: usize, header: &str) -> f64 {
        self.value(row, header).and_then(Value::as_f64).unwrap_or(0.0)
    }
}

/// Season per-game averages for one team
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamDashboard {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
    pub points: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub plus_minus: f64,
}

impl TeamDashboard {
    pub fn from_result_set(set: &ResultSet) -> Result<Self, NbaApiError> {
        if set.row_set.is_empty() {
            return Err(NbaApiError::EmptyResultSet(set.name.clone()));
        }
        Ok(TeamDashboard {
            games_played: set.number(0, "GP") as u32,
            wins: set.number(0, "W") as u32,
            losses: set.number(0, "L") as u32,
            win_pct: set.number(0, "W_PCT"),
            points: set.number(0, "PTS"),
            fg_pct: set.number(0, "FG_PCT"),
            fg3_pct: set.number(0, "FG3_PCT"),
            ft_pct: set.number(0, "FT_PCT"),
            rebounds: set.number(0, "REB"),
            assists: set.number(0, "AST"),
            steals: set.number(0, "STL"),
            blocks: set.number(0, "BLK"),
            turnovers: set.number(0, "TOV"),
            plus_minus: set.number(0, "PLUS_MINUS"),
        })
    }

    pub fn from_response(response: &StatsResponse) -> Result<Self, NbaApiError> {
        let set = response
            .result_set(OVERALL_TEAM_DASHBOARD)
            .ok_or_else(|| NbaApiError::MissingResultSet(OVERALL_TEAM_DASHBOARD.to_string()))?;
        Self::from_result_set(set)
    }

    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(period: &str, description: &str, home: &str, visitor: &str) -> Play {
        Play {
            period: period.into(),
            description: description.to_string(),
            home_score: home.into(),
            visitor_score: visitor.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_end_of_fourth_with_lead_is_final() {
        assert!(play("4", "End Period", "101", "98").ends_game());
    }

    #[test]
    fn test_end_of_overtime_with_lead_is_final() {
        assert!(play("6", "End Period", "120", "121").ends_game());
    }

    #[test]
    fn test_tied_end_of_fourth_is_not_final() {
        assert!(!play("4", "End Period", "100", "100").ends_game());
    }

    #[test]
    fn test_end_of_third_is_not_final() {
        assert!(!play("3", "End Period", "80", "70").ends_game());
    }

    #[test]
    fn test_other_play_in_fourth_is_not_final() {
        assert!(!play("4", "Jump Shot: Made", "101", "98").ends_game());
    }

    #[test]
    fn test_empty_play_by_play_is_not_final() {
        assert!(!PlayByPlay::default().is_final());
    }

    #[test]
    fn test_play_by_play_checks_last_play_only() {
        let pbp = PlayByPlay {
            id: "0021700001".to_string(),
            play: vec![
                play("4", "End Period", "101", "98"),
                play("4", "Instant Replay", "101", "98"),
            ],
        };
        assert!(!pbp.is_final());
    }

    #[test]
    fn test_games_single_object_and_string_numbers() {
        let json = r#"{
            "sports_content": {
                "games": {
                    "game": {
                        "id": "0021700500",
                        "date": "20180101",
                        "time": "1930",
                        "period_time": { "period_value": "2", "game_status": "2", "game_clock": "5:21" },
                        "visitor": { "abbreviation": "LAL", "city": "Los Angeles", "nickname": "Lakers", "score": "48",
                                     "linescores": { "period": { "period_value": "1", "score": "25" } } },
                        "home": { "abbreviation": "BOS", "city": "Boston", "nickname": "Celtics", "score": 51 }
                    }
                }
            }
        }"#;

        let response: GamesResponse = serde_json::from_str(json).unwrap();
        let games = response.sports_content.games.game;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].status(), GameStatus::InProgress);
        assert_eq!(games[0].period_time.period(), 2);
        assert_eq!(games[0].visitor.score.as_u32(), 48);
        assert_eq!(games[0].home.score.as_u32(), 51);
        assert_eq!(games[0].visitor.period_score(1), Some(25));
        assert_eq!(games[0].visitor.period_score(2), None);
    }

    #[test]
    fn test_games_missing_list_is_empty() {
        let response: GamesResponse =
            serde_json::from_str(r#"{"sports_content": {"games": {}}}"#).unwrap();
        assert!(response.sports_content.games.game.is_empty());
    }

    #[test]
    fn test_boxscore_response_conversion() {
        let json = r#"{
            "sports_content": {
                "sports_meta": { "season_meta": { "display_year": "2017-18", "display_season": "Regular Season" } },
                "game": {
                    "id": "0021700500", "date": "20180101", "time": "1930",
                    "arena": "TD Garden", "city": "Boston", "state": "MA",
                    "visitor": { "abbreviation": "LAL", "players": { "player": [
                        { "first_name": "LeBron", "last_name": "James", "points": "30",
                          "rebounds_offensive": "2", "rebounds_defensive": "7" }
                    ] } },
                    "home": { "abbreviation": "BOS", "Leaders": { "Points": {
                        "StatValue": "28", "leader": { "FirstName": "Jayson", "LastName": "Tatum" } } } }
                }
            }
        }"#;

        let response: BoxscoreResponse = serde_json::from_str(json).unwrap();
        let boxscore = Boxscore::from(response);
        assert_eq!(boxscore.season_meta.display(), "2017-18 Regular Season");
        assert_eq!(boxscore.game.start_time(), "19:30");
        assert_eq!(boxscore.game.location(), "TD Garden | Boston, MA");
        assert_eq!(boxscore.game.game_date(), NaiveDate::from_ymd_opt(2018, 1, 1));

        let player = &boxscore.game.visitor.players()[0];
        assert_eq!(player.short_name(), "L. James");
        assert_eq!(player.rebounds(), 9);

        let points = boxscore.game.home.leaders.points.as_ref().unwrap();
        assert_eq!(points.stat_value.as_u32(), 28);
        assert_eq!(points.leader[0].short_name(), "J. Tatum");
    }

    #[test]
    fn test_period_count_includes_overtime() {
        let mut game = BoxscoreGame::default();
        assert_eq!(game.period_count(), 4);

        game.home.linescores.period = (1..=6)
            .map(|p| PeriodScore {
                period_value: p.into(),
                score: 20u32.into(),
                ..Default::default()
            })
            .collect();
        assert_eq!(game.period_count(), 6);
    }

    #[test]
    fn test_format_feed_time() {
        assert_eq!(format_feed_time("1930"), "19:30");
        assert_eq!(format_feed_time("TBD"), "TBD");
    }

    #[test]
    fn test_team_dashboard_from_result_set() {
        let json = r#"{
            "resultSets": [
                { "name": "OverallTeamDashboard",
                  "headers": ["GROUP_SET", "GP", "W", "L", "W_PCT", "PTS", "FG_PCT", "REB", "AST", "PLUS_MINUS"],
                  "rowSet": [["Overall", 36, 26, 10, 0.722, 104.6, 0.451, 45.2, 22.1, 4.3]] },
                { "name": "LocationTeamDashboard", "headers": [], "rowSet": [] }
            ]
        }"#;

        let response: StatsResponse = serde_json::from_str(json).unwrap();
        let dashboard = TeamDashboard::from_response(&response).unwrap();
        assert_eq!(dashboard.games_played, 36);
        assert_eq!(dashboard.record(), "26-10");
        assert_eq!(dashboard.points, 104.6);
        // Columns missing from the response read as zero
        assert_eq!(dashboard.steals, 0.0);
    }

    #[test]
    fn test_team_dashboard_missing_result_set() {
        let response = StatsResponse::default();
        assert!(matches!(
            TeamDashboard::from_response(&response),
            Err(NbaApiError::MissingResultSet(_))
        ));
    }

    #[test]
    fn test_team_dashboard_empty_rows() {
        let set = ResultSet {
            name: OVERALL_TEAM_DASHBOARD.to_string(),
            ..Default::default()
        };
        assert!(matches!(
            TeamDashboard::from_result_set(&set),
            Err(NbaApiError::EmptyResultSet(_))
        ));
    }

    #[test]
    fn test_stat_value_parsing() {
        assert_eq!(StatValue::from("+7").as_i32(), 7);
        assert_eq!(StatValue::from("-3").as_i32(), -3);
        assert_eq!(StatValue::from("").as_u32(), 0);
        assert_eq!(StatValue::from("0.456").as_f64(), 0.456);
    }
}
