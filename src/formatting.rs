use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DisplayConfig;
use crate::types::NBA_LEAGUE_ABBREV;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub top_junction: String,
    pub bottom_junction: String,
    pub left_junction: String,
    pub right_junction: String,
    pub cross: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            top_junction: "┬".to_string(),
            bottom_junction: "┴".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
            cross: "┼".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            top_junction: "+".to_string(),
            bottom_junction: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
            cross: "+".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Pad or truncate `text` to exactly `width` terminal columns, left aligned
///
/// Player names carry accents and other wide characters, so `{:<20}` (which
/// counts chars) would misalign columns.
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Boxed date banner printed before anything else
pub fn format_date_banner(date: NaiveDate, display: &DisplayConfig) -> String {
    let chars = &display.box_chars;
    let text = format!(
        "{} Games - {}",
        NBA_LEAGUE_ABBREV,
        date.format("%A, %B %-d %Y")
    );
    let inner = text.width() + 2;
    format!(
        "{}{}{}\n{} {} {}\n{}{}{}\n",
        chars.top_left,
        chars.horizontal.repeat(inner),
        chars.top_right,
        chars.vertical,
        text,
        chars.vertical,
        chars.bottom_left,
        chars.horizontal.repeat(inner),
        chars.bottom_right,
    )
}

/// Format a shooting line as "made-attempted"
pub fn format_made_attempted(made: u32, attempted: u32) -> String {
    format!("{}-{}", made, attempted)
}

/// Format a plus/minus value with an explicit sign
pub fn format_plus_minus(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Format a 0..1 ratio the way box scores print it (".456")
pub fn format_pct(ratio: f64) -> String {
    let s = format!("{:.3}", ratio);
    match s.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unicode_display() -> DisplayConfig {
        DisplayConfig { use_unicode: true, ..Default::default() }
    }

    fn ascii_display() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_header_single_line_unicode() {
        let result = format_header("Test Header", false, &unicode_display());
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let result = format_header("Test Header", true, &ascii_display());
        assert_eq!(result, "Test Header\n===========\n");
    }

    #[test]
    fn test_empty_header() {
        let result = format_header("", false, &unicode_display());
        assert_eq!(result, "\n\n");
    }

    #[test]
    fn test_fit_width_pads_and_truncates() {
        assert_eq!(fit_width("L. James", 10), "L. James  ");
        assert_eq!(fit_width("G. Antetokounmpo", 8), "G. Antet");
        assert_eq!(fit_width("L. Dončić", 10), "L. Dončić ");
    }

    #[test]
    fn test_date_banner_ascii() {
        let date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let banner = format_date_banner(date, &ascii_display());
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "| NBA Games - Monday, January 1 2018 |");
        assert_eq!(lines[0].len(), lines[1].len());
        assert!(lines[2].starts_with("+-"));
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(format_made_attempted(9, 17), "9-17");
        assert_eq!(format_plus_minus(7), "+7");
        assert_eq!(format_plus_minus(-3), "-3");
        assert_eq!(format_plus_minus(0), "0");
        assert_eq!(format_pct(0.4567), ".457");
        assert_eq!(format_pct(1.0), "1.000");
    }
}
