/// SectionHeader widget - renders an underlined section title
///
/// Shared by the dashboard panels and the picker so every title looks the same.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::formatting::format_header;

/// Renders a section header with box-drawing underline
///
/// Returns the number of lines rendered (height consumed)
pub fn render_section_header(
    text: &str,
    double_line: bool,
    margin: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    config: &DisplayConfig,
) -> u16 {
    if y >= area.bottom() {
        return 0;
    }

    let header_line = format_header(text, double_line, config);
    let mut lines_rendered = 0;

    for line in header_line.lines() {
        if y + lines_rendered >= area.bottom() {
            break;
        }
        if !line.is_empty() {
            let formatted = format!("{}{}", " ".repeat(margin as usize), line);
            buf.set_stringn(
                area.x,
                y + lines_rendered,
                &formatted,
                area.width as usize,
                Style::default().fg(config.header_fg),
            );
        }
        lines_rendered += 1;
    }

    lines_rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_section_header_single_line() {
        let config = test_config();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        let area = Rect::new(0, 0, 20, 3);

        let lines = render_section_header("Play-by-Play", false, 0, area, 0, &mut buf, &config);

        assert_eq!(lines, 2);
        assert_buffer_line(&buf, 0, "Play-by-Play        ");
        assert_buffer_line(&buf, 1, "────────────        ");
        assert_eq!(buf[(0, 0)].fg, config.header_fg);
    }

    #[test]
    fn test_section_header_with_margin() {
        let config = test_config_ascii();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let area = Rect::new(0, 0, 10, 2);

        let lines = render_section_header("BOS", true, 2, area, 0, &mut buf, &config);

        assert_eq!(lines, 2);
        assert_buffer_line(&buf, 0, "  BOS     ");
        assert_buffer_line(&buf, 1, "  ===     ");
    }

    #[test]
    fn test_section_header_below_area() {
        let config = test_config();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 5));
        let area = Rect::new(0, 0, 80, 5);

        let lines = render_section_header("Game Leaders", false, 0, area, 5, &mut buf, &config);

        assert_eq!(lines, 0);
    }

    #[test]
    fn test_section_header_clipped_underline() {
        let config = test_config();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 5));
        let area = Rect::new(0, 0, 80, 5);

        let lines = render_section_header("Game Leaders", true, 0, area, 4, &mut buf, &config);

        assert_eq!(lines, 1);
    }
}
