use crate::api::{Boxscore, TeamDashboard};
use crate::config::DisplayConfig;
use crate::formatting::{format_header, format_pct};
use crate::layout_constants::{PREVIEW_LABEL_WIDTH, PREVIEW_VALUE_WIDTH};

type StatFormatter = fn(&TeamDashboard) -> String;

/// Rows of the season comparison table
const COMPARISON_ROWS: &[(&str, StatFormatter)] = &[
    ("Record", |d: &TeamDashboard| d.record()),
    ("Win %", |d: &TeamDashboard| format_pct(d.win_pct)),
    ("PTS", |d: &TeamDashboard| format!("{:.1}", d.points)),
    ("FG%", |d: &TeamDashboard| format_pct(d.fg_pct)),
    ("3P%", |d: &TeamDashboard| format_pct(d.fg3_pct)),
    ("FT%", |d: &TeamDashboard| format_pct(d.ft_pct)),
    ("REB", |d: &TeamDashboard| format!("{:.1}", d.rebounds)),
    ("AST", |d: &TeamDashboard| format!("{:.1}", d.assists)),
    ("STL", |d: &TeamDashboard| format!("{:.1}", d.steals)),
    ("BLK", |d: &TeamDashboard| format!("{:.1}", d.blocks)),
    ("TOV", |d: &TeamDashboard| format!("{:.1}", d.turnovers)),
    ("+/-", |d: &TeamDashboard| format!("{:+.1}", d.plus_minus)),
];

fn comparison_row(label: &str, visitor: &str, home: &str) -> String {
    format!(
        "{:<label_w$}{:>value_w$}{:>value_w$}",
        label,
        visitor,
        home,
        label_w = PREVIEW_LABEL_WIDTH,
        value_w = PREVIEW_VALUE_WIDTH
    )
}

/// Preview of a game that has not started: matchup and season averages side by side
pub fn format_preview(
    boxscore: &Boxscore,
    visitor: &TeamDashboard,
    home: &TeamDashboard,
    display: &DisplayConfig,
) -> String {
    let game = &boxscore.game;
    let mut output = String::new();

    let header = format!("{} @ {}", game.visitor.full_name(), game.home.full_name());
    output.push_str(&format!("\n{}", format_header(&header, true, display)));
    output.push_str(&format!("{}\n", boxscore.season_meta.display()));

    let date = game
        .game_date()
        .map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_else(|| game.date.clone());
    output.push_str(&format!("Date: {} {}\n", date, game.start_time()));
    output.push_str(&format!("Arena: {}\n", game.location()));

    output.push_str(&format!(
        "\n{}",
        format_header("Season Comparison", false, display)
    ));
    output.push_str(&comparison_row(
        "",
        &game.visitor.abbreviation,
        &game.home.abbreviation,
    ));
    output.push('\n');
    for (label, stat) in COMPARISON_ROWS {
        output.push_str(&comparison_row(label, &stat(visitor), &stat(home)));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_boxscore, SCHEDULED_GAME_ID};

    fn dashboard(wins: u32, losses: u32, plus_minus: f64) -> TeamDashboard {
        TeamDashboard {
            games_played: wins + losses,
            wins,
            losses,
            win_pct: wins as f64 / (wins + losses) as f64,
            points: 104.3,
            fg_pct: 0.457,
            fg3_pct: 0.361,
            ft_pct: 0.78,
            rebounds: 44.0,
            assists: 22.5,
            steals: 7.8,
            blocks: 5.1,
            turnovers: 13.9,
            plus_minus,
        }
    }

    #[test]
    fn test_comparison_row_alignment() {
        assert_eq!(
            comparison_row("Record", "25-11", "18-18"),
            "Record         25-11     18-18"
        );
    }

    #[test]
    fn test_format_preview() {
        let boxscore = create_mock_boxscore(SCHEDULED_GAME_ID);
        let output = format_preview(
            &boxscore,
            &dashboard(25, 11, 3.4),
            &dashboard(18, 18, -1.3),
            &DisplayConfig::default(),
        );
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "Miami Heat @ New York Knicks");
        assert_eq!(lines[3], "2017-18 Regular Season");
        assert_eq!(lines[4], "Date: 2018/01/01 19:30");
        assert_eq!(lines[5], "Arena: Madison Square Garden | New York, NY");
        assert!(output.contains("                 MIA       NYK"));
        assert!(output.contains("Record         25-11     18-18"));
        assert!(output.contains("Win %           .694      .500"));
        assert!(output.contains("PTS            104.3     104.3"));
        assert!(output.contains("FG%             .457      .457"));
        assert!(output.contains("+/-             +3.4      -1.3"));
    }

    #[test]
    fn test_every_comparison_row_is_present() {
        let boxscore = create_mock_boxscore(SCHEDULED_GAME_ID);
        let d = dashboard(1, 1, 0.0);
        let output = format_preview(&boxscore, &d, &d, &DisplayConfig::default());
        for (label, _) in COMPARISON_ROWS {
            assert!(
                output.lines().any(|l| l.starts_with(label)),
                "missing row {}",
                label
            );
        }
    }
}
