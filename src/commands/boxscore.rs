use crate::api::{Boxscore, PlayerLine, TeamLine, TeamStats};
use crate::config::DisplayConfig;
use crate::formatting::{fit_width, format_header, format_made_attempted, format_plus_minus};
use crate::layout_constants::{BOXSCORE_NAME_WIDTH, BOXSCORE_SHOT_WIDTH};

fn format_row(
    name: &str,
    pos: &str,
    min: &str,
    counts: [String; 6],
    shooting: [String; 3],
    plus_minus: &str,
) -> String {
    let [pts, reb, ast, stl, blk, tov] = counts;
    let [fg, tp, ft] = shooting;
    format!(
        "{} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>shot_w$} {:>shot_w$} {:>shot_w$} {:>4}",
        fit_width(name, BOXSCORE_NAME_WIDTH),
        pos,
        min,
        pts,
        reb,
        ast,
        stl,
        blk,
        tov,
        fg,
        tp,
        ft,
        plus_minus,
        shot_w = BOXSCORE_SHOT_WIDTH
    )
}

fn format_header_row() -> String {
    format_row(
        "Player",
        "POS",
        "MIN",
        ["PTS", "REB", "AST", "STL", "BLK", "TOV"].map(String::from),
        ["FG", "3PT", "FT"].map(String::from),
        "+/-",
    )
}

/// One box score line for a player
pub fn format_player_row(player: &PlayerLine) -> String {
    format_row(
        &player.short_name(),
        &player.position_short,
        player.minutes.as_str(),
        [
            player.points.as_u32(),
            player.rebounds(),
            player.assists.as_u32(),
            player.steals.as_u32(),
            player.blocks.as_u32(),
            player.turnovers.as_u32(),
        ]
        .map(|n| n.to_string()),
        [
            format_made_attempted(player.field_goals_made.as_u32(), player.field_goals_attempted.as_u32()),
            format_made_attempted(
                player.three_pointers_made.as_u32(),
                player.three_pointers_attempted.as_u32(),
            ),
            format_made_attempted(player.free_throws_made.as_u32(), player.free_throws_attempted.as_u32()),
        ],
        &format_plus_minus(player.plus_minus.as_i32()),
    )
}

/// Team totals line
pub fn format_totals_row(stats: &TeamStats) -> String {
    format_row(
        "Totals",
        "",
        "",
        [
            stats.points.as_u32(),
            stats.rebounds(),
            stats.assists.as_u32(),
            stats.steals.as_u32(),
            stats.blocks.as_u32(),
            stats.turnovers.as_u32(),
        ]
        .map(|n| n.to_string()),
        [
            format_made_attempted(stats.field_goals_made.as_u32(), stats.field_goals_attempted.as_u32()),
            format_made_attempted(
                stats.three_pointers_made.as_u32(),
                stats.three_pointers_attempted.as_u32(),
            ),
            format_made_attempted(stats.free_throws_made.as_u32(), stats.free_throws_attempted.as_u32()),
        ],
        "",
    )
}

/// Format all player stats for a team
pub fn format_team_stats(output: &mut String, team: &TeamLine, display: &DisplayConfig) {
    let header = format!("{} - {}", team.abbreviation, team.full_name());
    output.push_str(&format!("\n{}", format_header(&header, false, display)));
    output.push_str(&format_header_row());
    output.push('\n');
    for player in team.players() {
        output.push_str(&format_player_row(player));
        output.push('\n');
    }
    output.push_str(&format_totals_row(&team.stats));
    output.push('\n');
}

pub fn format_boxscore(boxscore: &Boxscore, display: &DisplayConfig) -> String {
    let mut output = String::new();
    format_team_stats(&mut output, &boxscore.game.visitor, display);
    format_team_stats(&mut output, &boxscore.game.home, display);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_boxscore, create_player, FINAL_GAME_ID};

    #[test]
    fn test_header_row() {
        assert_eq!(
            format_header_row(),
            "Player               POS MIN PTS REB AST STL BLK TOV     FG    3PT     FT  +/-"
        );
    }

    #[test]
    fn test_player_row() {
        let player = create_player(
            "Kyrie", "Irving", "G", true,
            [35, 27, 0, 4, 6, 1, 0, 3, 10, 20, 3, 7, 4, 4],
            12,
        );
        assert_eq!(
            format_player_row(&player),
            "K. Irving              G  35  27   4   6   1   0   3  10-20    3-7    4-4  +12"
        );
    }

    #[test]
    fn test_format_boxscore_has_both_teams_and_totals() {
        let boxscore = create_mock_boxscore(FINAL_GAME_ID);
        let output = format_boxscore(&boxscore, &DisplayConfig::default());

        let lakers = output.find("LAL - Los Angeles Lakers").unwrap();
        let celtics = output.find("BOS - Boston Celtics").unwrap();
        assert!(lakers < celtics);

        let totals: Vec<&str> = output.lines().filter(|l| l.starts_with("Totals")).collect();
        assert_eq!(totals.len(), 2);
        assert!(totals[0].contains(" 96 "));
        assert!(totals[1].contains("107 "));

        // Every player gets a line
        let player_lines = output.lines().filter(|l| l.contains(". ")).count();
        assert_eq!(player_lines, 9 + 8);
    }
}
