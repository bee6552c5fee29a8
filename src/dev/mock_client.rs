/// Mock API client for development and testing
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::api::{Boxscore, NbaApiError, PlayByPlay, ScheduledGame, TeamDashboard};
use crate::data_provider::NbaDataProvider;
use crate::fixtures;
use crate::season::Season;

/// Mock client that returns fixture data instead of making real API calls
#[derive(Debug, Default)]
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

#[async_trait]
impl NbaDataProvider for MockClient {
    async fn games(&self, date: NaiveDate) -> Result<Vec<ScheduledGame>, NbaApiError> {
        info!("MockClient: Returning mock games for {}", date);
        Ok(fixtures::create_mock_games())
    }

    async fn boxscore(&self, date: NaiveDate, game_id: &str) -> Result<Boxscore, NbaApiError> {
        info!("MockClient: Returning mock boxscore for game {} on {}", game_id, date);
        Ok(fixtures::create_mock_boxscore(game_id))
    }

    async fn play_by_play(
        &self,
        date: NaiveDate,
        game_id: &str,
    ) -> Result<PlayByPlay, NbaApiError> {
        info!("MockClient: Returning mock play-by-play for game {} on {}", game_id, date);
        Ok(fixtures::create_mock_play_by_play(game_id))
    }

    async fn team_dashboard(
        &self,
        season: &Season,
        team_id: &str,
    ) -> Result<TeamDashboard, NbaApiError> {
        info!("MockClient: Returning mock dashboard for team {} in {}", team_id, season);
        Ok(fixtures::create_mock_team_dashboard(team_id))
    }
}
