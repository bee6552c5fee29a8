use phf::phf_map;
use ratatui::style::{Color, Modifier, Style};

/// Primary color per team abbreviation, lightened where the official color
/// would be unreadable on a dark terminal
static TEAM_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "ATL" => (225, 68, 52),
    "BOS" => (0, 150, 65),
    "BKN" => (200, 200, 200),
    "CHA" => (0, 120, 140),
    "CHI" => (206, 17, 65),
    "CLE" => (134, 0, 56),
    "DAL" => (0, 83, 188),
    "DEN" => (254, 197, 36),
    "DET" => (200, 16, 46),
    "GSW" => (255, 199, 44),
    "HOU" => (206, 17, 65),
    "IND" => (253, 187, 48),
    "LAC" => (200, 16, 46),
    "LAL" => (152, 83, 196),
    "MEM" => (93, 118, 169),
    "MIA" => (152, 0, 46),
    "MIL" => (0, 125, 60),
    "MIN" => (35, 97, 146),
    "NOP" => (180, 151, 90),
    "NYK" => (245, 132, 38),
    "OKC" => (0, 125, 195),
    "ORL" => (0, 125, 197),
    "PHI" => (0, 107, 182),
    "PHX" => (229, 95, 32),
    "POR" => (224, 58, 62),
    "SAC" => (117, 59, 189),
    "SAS" => (196, 206, 211),
    "TOR" => (206, 17, 65),
    "UTA" => (249, 160, 27),
    "WAS" => (227, 24, 55),
};

pub fn team_color(abbrev: &str) -> Option<Color> {
    TEAM_COLORS
        .get(abbrev.to_uppercase().as_str())
        .map(|&(r, g, b)| Color::Rgb(r, g, b))
}

/// Bold, in the team's color when known
pub fn team_style(abbrev: &str) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match team_color(abbrev) {
        Some(color) => style.fg(color),
        None => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_team() {
        assert_eq!(team_color("BOS"), Some(Color::Rgb(0, 150, 65)));
        assert_eq!(team_color("lal"), Some(Color::Rgb(152, 83, 196)));
    }

    #[test]
    fn test_every_team_has_a_color() {
        assert_eq!(TEAM_COLORS.len(), 30);
    }

    #[test]
    fn test_unknown_team_falls_back_to_bold() {
        assert_eq!(team_color("XYZ"), None);
        assert_eq!(team_style("XYZ"), Style::default().add_modifier(Modifier::BOLD));
    }
}
