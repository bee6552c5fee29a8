/// Trait for providing game data, abstracting over the real API client and mock implementations
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{Boxscore, Client, NbaApiError, PlayByPlay, ScheduledGame, TeamDashboard};
use crate::season::Season;

/// Trait for data providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait NbaDataProvider: Send + Sync {
    /// Get all games scheduled on a date
    async fn games(&self, date: NaiveDate) -> Result<Vec<ScheduledGame>, NbaApiError>;

    /// Get the box score (and season metadata) for a game
    async fn boxscore(&self, date: NaiveDate, game_id: &str) -> Result<Boxscore, NbaApiError>;

    /// Get the play-by-play for a game
    async fn play_by_play(&self, date: NaiveDate, game_id: &str)
        -> Result<PlayByPlay, NbaApiError>;

    /// Get a team's season per-game averages
    async fn team_dashboard(
        &self,
        season: &Season,
        team_id: &str,
    ) -> Result<TeamDashboard, NbaApiError>;
}

/// Implement the trait for the real api::Client
#[async_trait]
impl NbaDataProvider for Client {
    async fn games(&self, date: NaiveDate) -> Result<Vec<ScheduledGame>, NbaApiError> {
        self.games(date).await
    }

    async fn boxscore(&self, date: NaiveDate, game_id: &str) -> Result<Boxscore, NbaApiError> {
        self.boxscore(date, game_id).await
    }

    async fn play_by_play(
        &self,
        date: NaiveDate,
        game_id: &str,
    ) -> Result<PlayByPlay, NbaApiError> {
        self.play_by_play(date, game_id).await
    }

    async fn team_dashboard(
        &self,
        season: &Season,
        team_id: &str,
    ) -> Result<TeamDashboard, NbaApiError> {
        self.team_dashboard(season, team_id).await
    }
}
