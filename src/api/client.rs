use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::NbaApiError;
use super::models::{
    Boxscore, BoxscoreResponse, GamesResponse, PlayByPlay, PlayByPlayResponse, ScheduledGame,
    StatsResponse, TeamDashboard,
};
use crate::config::ApiConfig;
use crate::season::Season;

/// The stats API rejects requests that don't look like they come from a browser
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";
const STATS_REFERER: &str = "https://www.nba.com/";
const STATS_ORIGIN: &str = "https://www.nba.com";

/// HTTP client for the data feed (schedule, box score, play-by-play)
/// and the stats API (team season splits)
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    data_base_url: String,
    stats_base_url: String,
}

/// Date segment used by the data feed URLs
pub fn date_path(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

impl Client {
    pub fn new() -> Result<Self, NbaApiError> {
        Self::with_config(&ApiConfig::default())
    }

    pub fn with_config(config: &ApiConfig) -> Result<Self, NbaApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, HeaderValue::from_static(STATS_REFERER));
        headers.insert(ORIGIN, HeaderValue::from_static(STATS_ORIGIN));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(NbaApiError::Client)?;

        Ok(Client {
            http,
            data_base_url: config.data_base_url.trim_end_matches('/').to_string(),
            stats_base_url: config.stats_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, NbaApiError> {
        debug!("GET {} {:?}", url, query);
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| NbaApiError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NbaApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| NbaApiError::Request {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| NbaApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub fn games_url(&self, date: NaiveDate) -> String {
        format!("{}/scoreboard/{}/games.json", self.data_base_url, date_path(date))
    }

    pub fn boxscore_url(&self, date: NaiveDate, game_id: &str) -> String {
        format!(
            "{}/game/{}/{}/boxscore.json",
            self.data_base_url,
            date_path(date),
            game_id
        )
    }

    pub fn play_by_play_url(&self, date: NaiveDate, game_id: &str) -> String {
        format!(
            "{}/game/{}/{}/pbp_all.json",
            self.data_base_url,
            date_path(date),
            game_id
        )
    }

    /// All games scheduled on the given date
    pub async fn games(&self, date: NaiveDate) -> Result<Vec<ScheduledGame>, NbaApiError> {
        let response: GamesResponse = self.get_json(&self.games_url(date), &[]).await?;
        Ok(response.sports_content.games.game)
    }

    pub async fn boxscore(&self, date: NaiveDate, game_id: &str) -> Result<Boxscore, NbaApiError> {
        let response: BoxscoreResponse = self
            .get_json(&self.boxscore_url(date, game_id), &[])
            .await?;
        Ok(Boxscore::from(response))
    }

    pub async fn play_by_play(
        &self,
        date: NaiveDate,
        game_id: &str,
    ) -> Result<PlayByPlay, NbaApiError> {
        let response: PlayByPlayResponse = self
            .get_json(&self.play_by_play_url(date, game_id), &[])
            .await?;
        Ok(response.sports_content.game)
    }

    /// Regular season per-game averages for a team
    pub async fn team_dashboard(
        &self,
        season: &Season,
        team_id: &str,
    ) -> Result<TeamDashboard, NbaApiError> {
        let url = format!("{}/teamdashboardbygeneralsplits", self.stats_base_url);
        let season = season.label();
        let query = [
            ("DateFrom", ""),
            ("DateTo", ""),
            ("GameSegment", ""),
            ("LastNGames", "0"),
            ("LeagueID", "00"),
            ("Location", ""),
            ("MeasureType", "Base"),
            ("Month", "0"),
            ("OpponentTeamID", "0"),
            ("Outcome", ""),
            ("PORound", "0"),
            ("PaceAdjust", "N"),
            ("PerMode", "PerGame"),
            ("Period", "0"),
            ("PlusMinus", "N"),
            ("Rank", "N"),
            ("Season", season.as_str()),
            ("SeasonSegment", ""),
            ("SeasonType", "Regular Season"),
            ("ShotClockRange", ""),
            ("TeamID", team_id),
            ("VsConference", ""),
            ("VsDivision", ""),
        ];
        let response: StatsResponse = self.get_json(&url, &query).await?;
        TeamDashboard::from_response(&response)
    }
}
