use anyhow::{bail, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::api::models::format_feed_time;
use crate::api::ScheduledGame;
use crate::config::Config;
use crate::tui::picker;
use crate::types::{period_label, GameStatus};

/// Status column of a game line: start time, live clock, or "Final"
pub fn game_status_label(game: &ScheduledGame) -> String {
    let period_time = &game.period_time;
    match game.status() {
        GameStatus::Scheduled => format_feed_time(&game.time),
        GameStatus::Halftime => "Halftime".to_string(),
        GameStatus::InProgress => {
            let period = period_label(period_time.period());
            if period_time.game_clock.is_empty() {
                period
            } else {
                format!("{} {}", period, period_time.game_clock)
            }
        }
        GameStatus::Final => "Final".to_string(),
    }
}

/// One line per game, e.g. `LAL  96 - 107 BOS  Final`
pub fn format_game_line(game: &ScheduledGame) -> String {
    let status = game_status_label(game);
    match game.status() {
        GameStatus::Scheduled => format!(
            "{:<3}  {:^9}  {:<3}  {}",
            game.visitor.abbreviation, "@", game.home.abbreviation, status
        ),
        _ => format!(
            "{:<3}  {:>3} - {:<3}  {:<3}  {}",
            game.visitor.abbreviation,
            game.visitor.score.as_u32(),
            game.home.score.as_u32(),
            game.home.abbreviation,
            status
        ),
    }
}

/// Pick the game to show
///
/// A single game is selected without prompting; several games open the
/// interactive picker. Returns `None` when the user cancels.
pub fn select_game<'a>(
    games: &'a [ScheduledGame],
    date: NaiveDate,
    config: &Config,
) -> Result<Option<&'a ScheduledGame>> {
    match games {
        [] => bail!("No games scheduled on {}", date.format("%Y/%m/%d")),
        [only] => {
            info!("Single game on {}, selecting {}", date, only.id);
            Ok(Some(only))
        }
        _ => {
            let options: Vec<String> = games.iter().map(format_game_line).collect();
            let title = format!("Games on {}", date.format("%Y/%m/%d"));
            let choice = picker::pick(&title, &options, &config.display)?;
            Ok(choice.and_then(|index| games.get(index)))
        }
    }
}
