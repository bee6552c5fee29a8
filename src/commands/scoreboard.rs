use crate::api::{Boxscore, LeaderCategory, TeamLine};
use crate::config::DisplayConfig;
use crate::formatting::{format_header, BoxChars};
use crate::layout_constants::{PERIOD_COL_WIDTH, TEAM_ABBREV_COL_WIDTH};
use crate::types::period_column_label;

/// One team's row of a line score
#[derive(Debug, Clone, PartialEq)]
pub struct LineScoreRow {
    pub abbrev: String,
    /// Points per period; `None` for periods not played yet
    pub periods: Vec<Option<u32>>,
    pub total: u32,
}

impl LineScoreRow {
    pub fn from_team(team: &TeamLine, period_count: u32, total: u32) -> Self {
        LineScoreRow {
            abbrev: team.abbreviation.clone(),
            periods: (1..=period_count).map(|p| team.period_score(p)).collect(),
            total,
        }
    }
}

/// Render a bordered line score, one string per row
///
/// Columns are the team, one per period (1-4, then OT1, OT2...) and the total.
pub fn line_score_lines(rows: &[LineScoreRow], chars: &BoxChars) -> Vec<String> {
    let period_count = rows.iter().map(|r| r.periods.len()).max().unwrap_or(0);
    let data_cols = period_count + 1;

    let border = |left: &str, junction: &str, right: &str| {
        let mut line = String::new();
        line.push_str(left);
        line.push_str(&chars.horizontal.repeat(TEAM_ABBREV_COL_WIDTH));
        for _ in 0..data_cols {
            line.push_str(junction);
            line.push_str(&chars.horizontal.repeat(PERIOD_COL_WIDTH));
        }
        line.push_str(right);
        line
    };

    let row = |first: &str, cells: Vec<String>| {
        let mut line = String::new();
        line.push_str(&chars.vertical);
        line.push_str(&format!("{:^width$}", first, width = TEAM_ABBREV_COL_WIDTH));
        for cell in cells {
            line.push_str(&chars.vertical);
            line.push_str(&format!("{:^width$}", cell, width = PERIOD_COL_WIDTH));
        }
        line.push_str(&chars.vertical);
        line
    };

    let mut header_cells: Vec<String> = (1..=period_count as u32).map(period_column_label).collect();
    header_cells.push("T".to_string());

    let mut lines = vec![
        border(&chars.top_left, &chars.top_junction, &chars.top_right),
        row("", header_cells),
        border(&chars.left_junction, &chars.cross, &chars.right_junction),
    ];

    for team in rows {
        let mut cells: Vec<String> = (0..period_count)
            .map(|i| match team.periods.get(i).copied().flatten() {
                Some(points) => points.to_string(),
                None => "-".to_string(),
            })
            .collect();
        cells.push(team.total.to_string());
        lines.push(row(&team.abbrev, cells));
    }

    lines.push(border(&chars.bottom_left, &chars.bottom_junction, &chars.bottom_right));
    lines
}

/// "PTS 20 B. Ingram"; ties list every leader
fn format_leader(label: &str, category: Option<&LeaderCategory>) -> Option<String> {
    let category = category?;
    if category.leader.is_empty() {
        return None;
    }
    let names: Vec<String> = category.leader.iter().map(|l| l.short_name()).collect();
    Some(format!("{} {} {}", label, category.stat_value, names.join(", ")))
}

pub fn format_team_leaders(team: &TeamLine) -> String {
    let leaders = [
        format_leader("PTS", team.leaders.points.as_ref()),
        format_leader("REB", team.leaders.rebounds.as_ref()),
        format_leader("AST", team.leaders.assists.as_ref()),
    ];
    let parts: Vec<String> = leaders.into_iter().flatten().collect();
    if parts.is_empty() {
        format!("{:<3}  -", team.abbreviation)
    } else {
        format!("{:<3}  {}", team.abbreviation, parts.join("  "))
    }
}

/// Scoreboard of a finished game: matchup, season, venue, line score and leaders
pub fn format_scoreboard(boxscore: &Boxscore, display: &DisplayConfig) -> String {
    let game = &boxscore.game;
    let mut output = String::new();

    let header = format!("{} @ {}", game.visitor.full_name(), game.home.full_name());
    output.push_str(&format!("\n{}", format_header(&header, true, display)));
    output.push_str(&format!("{}\n", boxscore.season_meta.display()));

    let date = game
        .game_date()
        .map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_else(|| game.date.clone());
    output.push_str(&format!(
        "Date: {} {} | {}\n",
        date,
        game.start_time(),
        game.location()
    ));
    if !game.period_time.period_status.is_empty() {
        output.push_str(&format!("Status: {}\n", game.period_time.period_status));
    }

    let periods = game.period_count();
    let rows = [
        LineScoreRow::from_team(&game.visitor, periods, game.visitor.score.as_u32()),
        LineScoreRow::from_team(&game.home, periods, game.home.score.as_u32()),
    ];
    output.push('\n');
    for line in line_score_lines(&rows, &display.box_chars) {
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str(&format!("\n{}", format_header("Game Leaders", false, display)));
    output.push_str(&format_team_leaders(&game.visitor));
    output.push('\n');
    output.push_str(&format_team_leaders(&game.home));
    output.push('\n');

    output
}
