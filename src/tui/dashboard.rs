/// Live dashboard layout
///
/// ```text
/// NBA | 2017-18 Regular Season | 2018/01/01 20:30 | Toyota Center | Houston, TX
///           Golden State Warriors  78 - 80  Houston Rockets
///                            Q3 5:21
/// ╭─────┬────┬─ ...   Play-by-Play
/// │ GSW │ 30 │  ...   ────────────
/// ...                 Q3   5:21 HOU   78-80  Harden ...
/// GSW - Golden State Warriors        HOU - Houston Rockets
/// ...
/// Updated 20:45 | refresh every 3s                 q: quit
/// ```
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::config::Config;
use crate::layout_constants::{
    DASHBOARD_HEADER_HEIGHT, DASHBOARD_SCORE_HEIGHT, PLAY_BY_PLAY_MIN_HEIGHT,
};
use crate::team_colors::team_style;
use crate::tui::live::LiveSnapshot;
use crate::tui::widgets::{PlayByPlayList, PlayerStatsTable, RenderableWidget, ScoreTable};
use crate::types::NBA_LEAGUE_ABBREV;

/// Gap between the score table and the play-by-play
const COLUMN_GAP: u16 = 2;

const FOOTER_HEIGHT: u16 = 1;

pub fn draw(frame: &mut Frame, snapshot: &LiveSnapshot, config: &Config) {
    let area = frame.area();
    render(area, frame.buffer_mut(), snapshot, config);
}

/// Render the whole dashboard into `buf`
pub fn render(area: Rect, buf: &mut Buffer, snapshot: &LiveSnapshot, config: &Config) {
    let game = &snapshot.boxscore.game;
    let visitor_table = PlayerStatsTable::new(&game.visitor);
    let home_table = PlayerStatsTable::new(&game.home);
    let players_height = visitor_table
        .preferred_height()
        .max(home_table.preferred_height())
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DASHBOARD_HEADER_HEIGHT),
            Constraint::Length(DASHBOARD_SCORE_HEIGHT),
            Constraint::Min(PLAY_BY_PLAY_MIN_HEIGHT),
            Constraint::Length(players_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(snapshot, chunks[0], buf);
    render_score(snapshot, chunks[1], buf, config);
    render_middle(snapshot, chunks[2], buf, config);

    let teams = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    visitor_table.render(teams[0], buf, &config.display);
    home_table.render(teams[1], buf, &config.display);

    render_footer(snapshot, chunks[4], buf, config);
}

fn render_header(snapshot: &LiveSnapshot, area: Rect, buf: &mut Buffer) {
    let game = &snapshot.boxscore.game;
    let date = game
        .game_date()
        .map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_else(|| game.date.clone());
    let text = format!(
        "{} | {} | {} {} | {}",
        NBA_LEAGUE_ABBREV,
        snapshot.boxscore.season_meta.display(),
        date,
        game.start_time(),
        game.location()
    );
    Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .render(area, buf);
}

fn render_score(snapshot: &LiveSnapshot, area: Rect, buf: &mut Buffer, config: &Config) {
    let game = &snapshot.boxscore.game;
    let visitor_style = team_style(&game.visitor.abbreviation);
    let home_style = team_style(&game.home.abbreviation);

    let score_line = Line::from(vec![
        Span::styled(game.visitor.full_name(), visitor_style),
        Span::raw("  "),
        Span::styled(snapshot.visitor_score().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" - "),
        Span::styled(snapshot.home_score().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(game.home.full_name(), home_style),
    ]);
    let clock_line = Line::from(Span::styled(
        snapshot.clock_text(),
        Style::default().fg(config.display.selection_fg),
    ));

    Paragraph::new(vec![score_line, clock_line])
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_middle(snapshot: &LiveSnapshot, area: Rect, buf: &mut Buffer, config: &Config) {
    let score_table = ScoreTable::from_game(
        &snapshot.boxscore.game,
        snapshot.visitor_score(),
        snapshot.home_score(),
    );
    let table_width = score_table.preferred_width().unwrap_or(0);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(table_width),
            Constraint::Length(COLUMN_GAP),
            Constraint::Min(0),
        ])
        .split(area);

    score_table.render(columns[0], buf, &config.display);
    PlayByPlayList::new(snapshot.plays()).render(columns[2], buf, &config.display);
}

fn render_footer(snapshot: &LiveSnapshot, area: Rect, buf: &mut Buffer, config: &Config) {
    let status = if snapshot.is_final() {
        format!("Final | updated {}", snapshot.updated_at)
    } else {
        format!(
            "Updated {} | refresh every {}s",
            snapshot.updated_at,
            config.live.interval_for(snapshot.status()).as_secs()
        )
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(area);
    Paragraph::new(status).render(columns[0], buf);
    Paragraph::new("q: quit")
        .alignment(Alignment::Right)
        .render(columns[1], buf);
}
