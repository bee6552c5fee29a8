/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
};
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use super::RenderableWidget;

/// Create a test DisplayConfig with unicode box characters
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(255, 165, 0),
        header_fg: Color::Rgb(159, 226, 191),
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
///
/// Useful for tests that want predictable ASCII-only output.
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Convert a buffer to a string, one line per buffer row
pub fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area().height)
        .map(|y| buffer_line(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        output.push_str(buf[(x, line)].symbol());
    }

    output
}

/// Assert that a buffer line matches the expected string
pub fn assert_buffer_line(buf: &Buffer, line: u16, expected: &str) {
    let actual = buffer_line(buf, line);
    assert_eq!(
        actual, expected,
        "\nLine {} mismatch:\nExpected: {}\nActual:   {}",
        line, expected, actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_buffer_to_string() {
        let widget = TestWidget {
            text: "Hi".to_string(),
        };

        let buf = render_widget(&widget, 5, 2);

        assert_eq!(buffer_to_string(&buf), "Hi   \n     ");
    }

    #[test]
    fn test_buffer_line() {
        let widget = TestWidget {
            text: "Test".to_string(),
        };

        let buf = render_widget(&widget, 10, 1);
        assert_buffer_line(&buf, 0, "Test      ");
    }

    #[test]
    fn test_config_creates_ascii() {
        let config = test_config_ascii();
        assert_eq!(config.box_chars.horizontal, "-");
        assert_eq!(config.box_chars.vertical, "|");
        assert_eq!(config.box_chars.top_left, "+");
    }
}
