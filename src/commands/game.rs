use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::api::{Boxscore, ScheduledGame};
use crate::commands::boxscore::format_boxscore;
use crate::commands::preview::format_preview;
use crate::commands::schedule::select_game;
use crate::commands::scoreboard::format_scoreboard;
use crate::commands::DateSelection;
use crate::config::Config;
use crate::data_provider::NbaDataProvider;
use crate::formatting::format_date_banner;
use crate::season::Season;
use crate::tui::live;
use crate::types::GameStatus;

pub async fn run(
    client: &dyn NbaDataProvider,
    selection: DateSelection,
    today: NaiveDate,
    config: &Config,
) -> Result<()> {
    let date = selection.resolve(today)?;
    let season = Season::for_date(date)?;
    info!("Showing games on {} ({} season)", date, season);

    print!("{}", format_date_banner(date, &config.display));

    let games = client
        .games(date)
        .await
        .with_context(|| format!("Failed to fetch games for {}", date))?;

    let Some(game) = select_game(&games, date, config)? else {
        info!("Game selection cancelled");
        return Ok(());
    };

    show_game(client, date, &season, game, config).await
}

/// Render the selected game according to its schedule status
pub async fn show_game(
    client: &dyn NbaDataProvider,
    date: NaiveDate,
    season: &Season,
    game: &ScheduledGame,
    config: &Config,
) -> Result<()> {
    let boxscore = client
        .boxscore(date, &game.id)
        .await
        .with_context(|| format!("Failed to fetch boxscore for game {}", game.id))?;

    let status = game.status();
    info!("Game {} status: {:?}", game.id, status);

    match status {
        GameStatus::Scheduled => {
            eprintln!("Loading game preview...");
            let preview = preview_report(client, season, &boxscore, config).await?;
            print!("{}", preview);
        }
        GameStatus::InProgress | GameStatus::Halftime => {
            live::run(client, date, &game.id, boxscore, config).await?;
        }
        GameStatus::Final => {
            print!("{}", final_report(&boxscore, config));
        }
    }

    Ok(())
}

/// Fetch both teams' season averages and format the preview
pub async fn preview_report(
    client: &dyn NbaDataProvider,
    season: &Season,
    boxscore: &Boxscore,
    config: &Config,
) -> Result<String> {
    let game = &boxscore.game;
    let visitor = client
        .team_dashboard(season, game.visitor.id.as_str())
        .await
        .with_context(|| format!("Failed to fetch season stats for {}", game.visitor.abbreviation))?;
    let home = client
        .team_dashboard(season, game.home.id.as_str())
        .await
        .with_context(|| format!("Failed to fetch season stats for {}", game.home.abbreviation))?;

    Ok(format_preview(boxscore, &visitor, &home, &config.display))
}

/// Scoreboard, a blank line, then the box score
pub fn final_report(boxscore: &Boxscore, config: &Config) -> String {
    format!(
        "{}\n{}",
        format_scoreboard(boxscore, &config.display),
        format_boxscore(boxscore, &config.display)
    )
}
