/// Live dashboard loop
///
/// Draws the dashboard, waits for the poll interval (watching the keyboard
/// meanwhile), re-fetches box score and play-by-play, and repeats until the
/// final play comes in or the user quits.
use std::fmt::Write as _;
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::api::{Boxscore, Play, PlayByPlay};
use crate::config::Config;
use crate::data_provider::NbaDataProvider;
use crate::tui::{dashboard, restore_terminal, setup_terminal, Tui};
use crate::types::{period_label, GameStatus};

/// How often the wait loop checks for key presses and resizes
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Fallback when the configured time format can't be rendered
const FALLBACK_TIME_FORMAT: &str = "%H:%M";

/// One refresh worth of game data
#[derive(Debug, Clone)]
pub struct LiveSnapshot {
    pub boxscore: Boxscore,
    pub play_by_play: PlayByPlay,
    /// Local time of the fetch, already formatted
    pub updated_at: String,
}

impl LiveSnapshot {
    pub fn new(boxscore: Boxscore, play_by_play: PlayByPlay, updated_at: String) -> Self {
        Self {
            boxscore,
            play_by_play,
            updated_at,
        }
    }

    pub fn plays(&self) -> &[Play] {
        &self.play_by_play.play
    }

    /// Latest play that carries a score
    fn scoring_play(&self) -> Option<&Play> {
        self.plays()
            .iter()
            .rev()
            .find(|p| !p.home_score.is_empty() && !p.visitor_score.is_empty())
    }

    /// Play-by-play updates ahead of the box score, so prefer its score
    pub fn visitor_score(&self) -> u32 {
        self.scoring_play()
            .map(|p| p.visitor_score.as_u32())
            .unwrap_or_else(|| self.boxscore.game.visitor.score.as_u32())
    }

    pub fn home_score(&self) -> u32 {
        self.scoring_play()
            .map(|p| p.home_score.as_u32())
            .unwrap_or_else(|| self.boxscore.game.home.score.as_u32())
    }

    /// Fourth quarter or later, last play "End Period", and no tie
    pub fn is_final(&self) -> bool {
        self.play_by_play.is_final()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_final() {
            GameStatus::Final
        } else {
            self.boxscore.game.period_time.status()
        }
    }

    /// "Q3 5:21", "Halftime", "Final"
    pub fn clock_text(&self) -> String {
        let period_time = &self.boxscore.game.period_time;
        match self.status() {
            GameStatus::Final => "Final".to_string(),
            GameStatus::Halftime => "Halftime".to_string(),
            GameStatus::Scheduled => period_time.period_status.clone(),
            GameStatus::InProgress => {
                let period = period_label(period_time.period());
                if period_time.game_clock.is_empty() {
                    format!("{} {}", period, period_time.period_status).trim().to_string()
                } else {
                    format!("{} {}", period, period_time.game_clock)
                }
            }
        }
    }
}

/// Local time in the user's format
pub fn timestamp(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out = now.format(FALLBACK_TIME_FORMAT).to_string();
    }
    out
}

/// q, Esc and Ctrl-C leave the dashboard
pub fn is_quit_key(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Run the live dashboard for a game until it ends or the user quits
pub async fn run(
    client: &dyn NbaDataProvider,
    date: NaiveDate,
    game_id: &str,
    boxscore: Boxscore,
    config: &Config,
) -> Result<()> {
    let play_by_play = client
        .play_by_play(date, game_id)
        .await
        .with_context(|| format!("Failed to fetch play-by-play for game {}", game_id))?;
    let mut snapshot = LiveSnapshot::new(boxscore, play_by_play, timestamp(&config.time_format));

    info!("Starting live view for game {}", game_id);
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let result = poll_loop(&mut terminal, client, date, game_id, &mut snapshot, config).await;
    let restored = restore_terminal(&mut terminal);

    result?;
    restored.context("Failed to restore terminal")?;
    Ok(())
}

async fn poll_loop(
    terminal: &mut Tui,
    client: &dyn NbaDataProvider,
    date: NaiveDate,
    game_id: &str,
    snapshot: &mut LiveSnapshot,
    config: &Config,
) -> Result<()> {
    loop {
        terminal.draw(|f| dashboard::draw(f, snapshot, config))?;

        if snapshot.is_final() {
            info!(
                "Game {} ended {}-{}",
                game_id,
                snapshot.visitor_score(),
                snapshot.home_score()
            );
            wait_for_quit(terminal, snapshot, config, None)?;
            return Ok(());
        }

        let interval = config.live.interval_for(snapshot.status());
        debug!("LIVE: next refresh of {} in {:?}", game_id, interval);
        if wait_for_quit(terminal, snapshot, config, Some(interval))? {
            info!("Live view closed by user");
            return Ok(());
        }

        let boxscore = client
            .boxscore(date, game_id)
            .await
            .with_context(|| format!("Failed to refresh boxscore for game {}", game_id))?;
        let play_by_play = client
            .play_by_play(date, game_id)
            .await
            .with_context(|| format!("Failed to refresh play-by-play for game {}", game_id))?;
        *snapshot = LiveSnapshot::new(boxscore, play_by_play, timestamp(&config.time_format));
    }
}

/// Wait up to `timeout` (forever with `None`), redrawing on resize
///
/// Returns true when the user pressed a quit key.
fn wait_for_quit(
    terminal: &mut Tui,
    snapshot: &LiveSnapshot,
    config: &Config,
    timeout: Option<Duration>,
) -> io::Result<bool> {
    let deadline = timeout.map(|t| Instant::now() + t);
    loop {
        let wait = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Ok(false);
                }
                (deadline - now).min(EVENT_POLL_INTERVAL)
            }
            None => EVENT_POLL_INTERVAL,
        };

        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if is_quit_key(key) => return Ok(true),
                Event::Resize(_, _) => {
                    terminal.draw(|f| dashboard::draw(f, snapshot, config))?;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        create_mock_boxscore, create_mock_play_by_play, create_play, FINAL_GAME_ID, LIVE_GAME_ID,
    };

    fn snapshot(game_id: &str) -> LiveSnapshot {
        LiveSnapshot::new(
            create_mock_boxscore(game_id),
            create_mock_play_by_play(game_id),
            "20:45".to_string(),
        )
    }

    #[test]
    fn test_live_game_snapshot() {
        let snap = snapshot(LIVE_GAME_ID);
        assert!(!snap.is_final());
        assert_eq!(snap.status(), GameStatus::InProgress);
        assert_eq!(snap.clock_text(), "Q3 5:21");
        assert_eq!(snap.visitor_score(), 78);
        assert_eq!(snap.home_score(), 80);
    }

    #[test]
    fn test_final_game_snapshot() {
        let snap = snapshot(FINAL_GAME_ID);
        assert!(snap.is_final());
        assert_eq!(snap.status(), GameStatus::Final);
        assert_eq!(snap.clock_text(), "Final");
        assert_eq!(snap.visitor_score(), 96);
        assert_eq!(snap.home_score(), 107);
    }

    #[test]
    fn test_score_falls_back_to_boxscore() {
        let mut snap = snapshot(LIVE_GAME_ID);
        snap.play_by_play.play.clear();
        assert_eq!(snap.visitor_score(), 78);
        assert_eq!(snap.home_score(), 80);
    }

    #[test]
    fn test_newer_play_score_wins_over_boxscore() {
        let mut snap = snapshot(LIVE_GAME_ID);
        snap.play_by_play
            .play
            .push(create_play(6, 3, "4:58", "GSW", "Thompson 3pt Shot: Made (17 PTS)", 80, 81));
        assert_eq!(snap.visitor_score(), 81);
        assert_eq!(snap.home_score(), 80);
    }

    #[test]
    fn test_tie_after_fourth_is_not_final() {
        let mut snap = snapshot(LIVE_GAME_ID);
        snap.play_by_play.play.push(create_play(6, 4, "0:00", "", "End Period", 100, 100));
        assert!(!snap.is_final());
        assert_ne!(snap.status(), GameStatus::Final);
    }

    #[test]
    fn test_halftime_uses_slow_interval() {
        let mut snap = snapshot(LIVE_GAME_ID);
        snap.boxscore.game.period_time.game_status = "Halftime".into();
        let config = Config::default();

        assert_eq!(snap.status(), GameStatus::Halftime);
        assert_eq!(snap.clock_text(), "Halftime");
        assert_eq!(config.live.interval_for(snap.status()), Duration::from_secs(15));
        assert_eq!(
            config.live.interval_for(snapshot(LIVE_GAME_ID).status()),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_end_of_quarter_without_clock() {
        let mut snap = snapshot(LIVE_GAME_ID);
        snap.boxscore.game.period_time.game_clock.clear();
        snap.boxscore.game.period_time.period_status = "End of 3rd Qtr".to_string();
        assert_eq!(snap.clock_text(), "Q3 End of 3rd Qtr");
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_timestamp_falls_back_on_bad_format() {
        assert_eq!(timestamp("%H:%M").len(), 5);
        assert_eq!(timestamp("%Q").len(), 5);
    }
}
