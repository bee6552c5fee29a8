/// GameList widget - selectable list of the day's games
///
/// The selected line gets the selector glyph and the selection color. When
/// there are more games than rows, the list scrolls to keep the selection
/// visible. The last row holds the key hints.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::layout_constants::PICKER_SELECTOR_WIDTH;
use crate::tui::widgets::section_header::render_section_header;
use crate::tui::widgets::RenderableWidget;

pub const KEY_HINTS: &str = "Up/Down: move  Enter: select  q: quit";

#[derive(Debug)]
pub struct GameList<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

impl<'a> GameList<'a> {
    pub fn new(title: &'a str, options: &'a [String], selected: usize) -> Self {
        Self {
            title,
            options,
            selected,
        }
    }

    /// First option to draw so that `selected` fits in `rows` lines
    fn scroll_offset(&self, rows: usize) -> usize {
        if rows == 0 {
            return self.selected;
        }
        self.selected.saturating_sub(rows - 1)
    }
}

impl<'a> RenderableWidget for GameList<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = area.width as usize;
        let mut y = area.y;
        y += render_section_header(self.title, true, 0, area, y, buf, config);

        if area.bottom() <= y {
            return;
        }
        let hints_y = area.bottom() - 1;
        let rows = hints_y.saturating_sub(y) as usize;
        let offset = self.scroll_offset(rows);

        for (index, option) in self.options.iter().enumerate().skip(offset).take(rows) {
            let (selector, style) = if index == self.selected {
                (
                    config.box_chars.selector.as_str(),
                    Style::default().fg(config.selection_fg),
                )
            } else {
                ("", Style::default())
            };
            let line = format!(
                "{:<sel_w$}{}",
                selector,
                option,
                sel_w = PICKER_SELECTOR_WIDTH as usize
            );
            buf.set_stringn(area.x, y, line, width, style);
            y += 1;
        }

        buf.set_stringn(area.x, hints_y, KEY_HINTS, width, Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        // Title, underline, one row per game, hints
        Some(self.options.len() as u16 + 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    fn options() -> Vec<String> {
        ["LAL   96 - 107  BOS  Final", "GSW   78 - 80   HOU  Q3 5:21", "MIA      @      NYK  19:30"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_selected_game_is_marked() {
        let options = options();
        let widget = GameList::new("Games on 2018/01/01", &options, 1);
        let buf = render_widget(&widget, 40, 6);

        assert!(buffer_line(&buf, 0).starts_with("Games on 2018/01/01"));
        assert!(buffer_line(&buf, 1).starts_with("═══"));
        assert!(buffer_line(&buf, 2).starts_with("  LAL   96 - 107  BOS  Final"));
        assert!(buffer_line(&buf, 3).starts_with("► GSW   78 - 80   HOU  Q3 5:21"));
        assert!(buffer_line(&buf, 4).starts_with("  MIA      @      NYK  19:30"));
        assert!(buffer_line(&buf, 5).starts_with(KEY_HINTS));
        assert_eq!(buf[(2, 3)].fg, test_config().selection_fg);
    }

    #[test]
    fn test_ascii_selector() {
        let options = options();
        let widget = GameList::new("Games", &options, 0);
        let buf = render_widget_with_config(&widget, 40, 6, &test_config_ascii());

        assert!(buffer_line(&buf, 2).starts_with("> LAL"));
    }

    #[test]
    fn test_list_scrolls_to_selection() {
        let options = options();
        let widget = GameList::new("Games", &options, 2);
        // Room for a single game row
        let buf = render_widget(&widget, 40, 4);

        assert!(buffer_line(&buf, 2).starts_with("► MIA"));
        assert!(buffer_line(&buf, 3).starts_with(KEY_HINTS));
    }

    #[test]
    fn test_preferred_height() {
        let options = options();
        let widget = GameList::new("Games", &options, 0);
        assert_eq!(widget.preferred_height(), Some(6));
    }
}
