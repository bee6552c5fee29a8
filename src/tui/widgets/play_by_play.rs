/// PlayByPlayList widget - most recent events of a game, newest first
///
/// Each line reads `Q3  5:21  HOU  78-80  Harden Driving Layup...` with the
/// score shown visitor first, like the rest of the dashboard.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::api::Play;
use crate::config::DisplayConfig;
use crate::team_colors::team_style;
use crate::tui::widgets::section_header::render_section_header;
use crate::tui::widgets::RenderableWidget;
use crate::types::period_label;

/// Width of the "Q3  5:21  " prefix
const PREFIX_WIDTH: usize = 10;

/// Width of the team column including its trailing gap
const TEAM_WIDTH: usize = 5;

#[derive(Debug)]
pub struct PlayByPlayList<'a> {
    pub plays: &'a [Play],
}

impl<'a> PlayByPlayList<'a> {
    pub fn new(plays: &'a [Play]) -> Self {
        Self { plays }
    }

    fn prefix(play: &Play) -> String {
        format!("{:<3} {:>5} ", period_label(play.period.as_u32()), play.clock)
    }

    fn score(play: &Play) -> String {
        format!(
            "{:>3}-{:<3} ",
            play.visitor_score.as_u32(),
            play.home_score.as_u32()
        )
    }
}

impl<'a> RenderableWidget for PlayByPlayList<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let mut y = area.y;
        y += render_section_header("Play-by-Play", false, 0, area, y, buf, config);

        if self.plays.is_empty() && y < area.bottom() {
            buf.set_stringn(area.x, y, "No plays yet", area.width as usize, Style::default());
            return;
        }

        for play in self.plays.iter().rev() {
            if y >= area.bottom() {
                break;
            }
            let mut x = area.x;
            let mut remaining = area.width as usize;
            let segments = [
                (Self::prefix(play), Style::default()),
                (format!("{:<3}  ", play.team_abr), team_style(&play.team_abr)),
                (Self::score(play), Style::default()),
                (play.description.clone(), Style::default()),
            ];
            for (text, style) in segments {
                if remaining == 0 {
                    break;
                }
                let (next_x, _) = buf.set_stringn(x, y, &text, remaining, style);
                remaining = remaining.saturating_sub((next_x - x) as usize);
                x = next_x;
            }
            y += 1;
        }
    }

    fn preferred_width(&self) -> Option<u16> {
        let longest = self
            .plays
            .iter()
            .map(|p| p.description.chars().count())
            .max()
            .unwrap_or(0);
        Some((PREFIX_WIDTH + TEAM_WIDTH + 8 + longest) as u16)
    }
}
