/// ScoreTable widget - displays period-by-period score breakdown
///
/// Regulation quarters are always shown, overtimes are appended as they are
/// played. Periods not reached yet show a dash.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::api::BoxscoreGame;
use crate::commands::scoreboard::{line_score_lines, LineScoreRow};
use crate::config::DisplayConfig;
use crate::layout_constants::{PERIOD_COL_WIDTH, SCORE_TABLE_HEIGHT, TEAM_ABBREV_COL_WIDTH};
use crate::tui::widgets::RenderableWidget;

/// Widget for displaying period-by-period scores
#[derive(Debug, Clone)]
pub struct ScoreTable {
    pub visitor: LineScoreRow,
    pub home: LineScoreRow,
}

impl ScoreTable {
    /// Build from a box score, with totals taken from the freshest source
    pub fn from_game(game: &BoxscoreGame, visitor_score: u32, home_score: u32) -> Self {
        let periods = game.period_count();
        Self {
            visitor: LineScoreRow::from_team(&game.visitor, periods, visitor_score),
            home: LineScoreRow::from_team(&game.home, periods, home_score),
        }
    }

    fn lines(&self, config: &DisplayConfig) -> Vec<String> {
        line_score_lines(&[self.visitor.clone(), self.home.clone()], &config.box_chars)
    }
}

impl RenderableWidget for ScoreTable {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        for (i, line) in self.lines(config).iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_stringn(area.x, y, line, area.width as usize, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(SCORE_TABLE_HEIGHT)
    }

    fn preferred_width(&self) -> Option<u16> {
        // Borders, team column, then one column per period plus the total
        let periods = self.visitor.periods.len().max(self.home.periods.len());
        Some((2 + TEAM_ABBREV_COL_WIDTH + (periods + 1) * (PERIOD_COL_WIDTH + 1)) as u16)
    }
}
