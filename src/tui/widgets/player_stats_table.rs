/// PlayerStatsTable widget - compact live box score for one team
///
/// Columns: on-court marker, Player, MIN, PTS, REB, AST, FG, 3PT, +/-.
/// Players on the floor are marked with `*` and drawn bold.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::api::TeamLine;
use crate::config::DisplayConfig;
use crate::formatting::{fit_width, format_made_attempted, format_plus_minus};
use crate::tui::widgets::section_header::render_section_header;
use crate::tui::widgets::RenderableWidget;

/// Column width constants
const MARKER_COL_WIDTH: usize = 2;
const NAME_COL_WIDTH: usize = 16;
const STAT_COL_WIDTH: usize = 3;
const SHOT_COL_WIDTH: usize = 5;
const PLUS_MINUS_COL_WIDTH: usize = 4;
const TABLE_WIDTH: usize =
    MARKER_COL_WIDTH + NAME_COL_WIDTH + 4 * (STAT_COL_WIDTH + 1) + 2 * (SHOT_COL_WIDTH + 1) + PLUS_MINUS_COL_WIDTH + 1;

#[derive(Debug)]
pub struct PlayerStatsTable<'a> {
    pub team: &'a TeamLine,
}

impl<'a> PlayerStatsTable<'a> {
    pub fn new(team: &'a TeamLine) -> Self {
        Self { team }
    }

    #[allow(clippy::too_many_arguments)]
    fn row(
        marker: &str,
        name: &str,
        min: &str,
        pts: &str,
        reb: &str,
        ast: &str,
        fg: &str,
        tp: &str,
        pm: &str,
    ) -> String {
        format!(
            "{:<marker_w$}{} {:>stat_w$} {:>stat_w$} {:>stat_w$} {:>stat_w$} {:>shot_w$} {:>shot_w$} {:>pm_w$}",
            marker,
            fit_width(name, NAME_COL_WIDTH),
            min,
            pts,
            reb,
            ast,
            fg,
            tp,
            pm,
            marker_w = MARKER_COL_WIDTH,
            stat_w = STAT_COL_WIDTH,
            shot_w = SHOT_COL_WIDTH,
            pm_w = PLUS_MINUS_COL_WIDTH
        )
    }

    fn header_row() -> String {
        Self::row("", "Player", "MIN", "PTS", "REB", "AST", "FG", "3PT", "+/-")
    }

    fn totals_row(&self) -> String {
        let stats = &self.team.stats;
        Self::row(
            "",
            "Totals",
            "",
            &stats.points.as_u32().to_string(),
            &stats.rebounds().to_string(),
            &stats.assists.as_u32().to_string(),
            &format_made_attempted(stats.field_goals_made.as_u32(), stats.field_goals_attempted.as_u32()),
            &format_made_attempted(
                stats.three_pointers_made.as_u32(),
                stats.three_pointers_attempted.as_u32(),
            ),
            "",
        )
    }

    /// Total height: header (2), column titles, players, totals
    fn calculate_height(&self) -> u16 {
        2 + 1 + self.team.players().len() as u16 + 1
    }
}

impl<'a> RenderableWidget for PlayerStatsTable<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = area.width as usize;
        let mut y = area.y;

        let title = format!("{} - {}", self.team.abbreviation, self.team.full_name());
        y += render_section_header(&title, false, 0, area, y, buf, config);

        if y < area.bottom() {
            buf.set_stringn(area.x, y, Self::header_row(), width, Style::default());
            y += 1;
        }

        for player in self.team.players() {
            // Keep the last line for totals
            if y + 1 >= area.bottom() {
                break;
            }
            let on_court = player.is_on_court();
            let row = Self::row(
                if on_court { "*" } else { "" },
                &player.short_name(),
                player.minutes.as_str(),
                &player.points.as_u32().to_string(),
                &player.rebounds().to_string(),
                &player.assists.as_u32().to_string(),
                &format_made_attempted(player.field_goals_made.as_u32(), player.field_goals_attempted.as_u32()),
                &format_made_attempted(
                    player.three_pointers_made.as_u32(),
                    player.three_pointers_attempted.as_u32(),
                ),
                &format_plus_minus(player.plus_minus.as_i32()),
            );
            let style = if on_court {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            buf.set_stringn(area.x, y, row, width, style);
            y += 1;
        }

        if y < area.bottom() {
            buf.set_stringn(area.x, y, self.totals_row(), width, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.calculate_height())
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(TABLE_WIDTH as u16)
    }
}
