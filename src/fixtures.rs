/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data for screenshots and debugging
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The fixtures describe one night with a finished game, a game in progress
/// and a game that has not tipped off yet.
use crate::api::models::{
    Linescores, PeriodScore, PeriodTime, PlayerList, SeasonMeta,
};
use crate::api::{
    Boxscore, BoxscoreGame, Leader, LeaderCategory, Leaders, Play, PlayByPlay, PlayerLine,
    ScheduledGame, StatValue, TeamDashboard, TeamLine, TeamStats,
};

pub const FINAL_GAME_ID: &str = "0021700580";
pub const LIVE_GAME_ID: &str = "0021700581";
pub const SCHEDULED_GAME_ID: &str = "0021700582";

struct TeamInfo {
    id: &'static str,
    abbrev: &'static str,
    city: &'static str,
    nickname: &'static str,
}

const LAKERS: TeamInfo = TeamInfo { id: "1610612747", abbrev: "LAL", city: "Los Angeles", nickname: "Lakers" };
const CELTICS: TeamInfo = TeamInfo { id: "1610612738", abbrev: "BOS", city: "Boston", nickname: "Celtics" };
const WARRIORS: TeamInfo = TeamInfo { id: "1610612744", abbrev: "GSW", city: "Golden State", nickname: "Warriors" };
const ROCKETS: TeamInfo = TeamInfo { id: "1610612745", abbrev: "HOU", city: "Houston", nickname: "Rockets" };
const HEAT: TeamInfo = TeamInfo { id: "1610612748", abbrev: "MIA", city: "Miami", nickname: "Heat" };
const KNICKS: TeamInfo = TeamInfo { id: "1610612752", abbrev: "NYK", city: "New York", nickname: "Knicks" };

/// Season metadata sent alongside every box score
pub fn create_mock_season_meta() -> SeasonMeta {
    SeasonMeta {
        calendar_date: "20180101".to_string(),
        season_year: "2017".to_string(),
        stats_season_year: "2017-18".to_string(),
        stats_season_id: "22017".to_string(),
        display_year: "2017-18".to_string(),
        display_season: "Regular Season".to_string(),
        season_stage: "2".to_string(),
    }
}

/// Games for the mock night: one final, one live, one scheduled
pub fn create_mock_games() -> Vec<ScheduledGame> {
    vec![
        create_mock_scheduled_game(FINAL_GAME_ID),
        create_mock_scheduled_game(LIVE_GAME_ID),
        create_mock_scheduled_game(SCHEDULED_GAME_ID),
    ]
}

pub fn create_mock_scheduled_game(game_id: &str) -> ScheduledGame {
    let game = create_mock_boxscore(game_id).game;
    ScheduledGame {
        id: game.id,
        date: game.date,
        time: game.time,
        arena: game.arena,
        city: game.city,
        state: game.state,
        period_time: game.period_time,
        visitor: TeamLine {
            players: PlayerList::default(),
            stats: TeamStats::default(),
            leaders: Leaders::default(),
            ..game.visitor
        },
        home: TeamLine {
            players: PlayerList::default(),
            stats: TeamStats::default(),
            leaders: Leaders::default(),
            ..game.home
        },
    }
}

/// Box score for one of the fixture games; unknown ids get the final game
pub fn create_mock_boxscore(game_id: &str) -> Boxscore {
    let game = match game_id {
        LIVE_GAME_ID => BoxscoreGame {
            id: LIVE_GAME_ID.to_string(),
            date: "20180101".to_string(),
            time: "2030".to_string(),
            arena: "Toyota Center".to_string(),
            city: "Houston".to_string(),
            state: "TX".to_string(),
            attendance: StatValue::default(),
            period_time: period_time("3", "2", "5:21", "In Progress"),
            visitor: create_team_line(&WARRIORS, &[30, 26, 22], warriors_players()),
            home: create_team_line(&ROCKETS, &[28, 29, 23], rockets_players()),
        },
        SCHEDULED_GAME_ID => BoxscoreGame {
            id: SCHEDULED_GAME_ID.to_string(),
            date: "20180101".to_string(),
            time: "1930".to_string(),
            arena: "Madison Square Garden".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            attendance: StatValue::default(),
            period_time: period_time("0", "1", "", "7:30 pm ET"),
            visitor: create_team_line(&HEAT, &[], Vec::new()),
            home: create_team_line(&KNICKS, &[], Vec::new()),
        },
        _ => BoxscoreGame {
            id: game_id.to_string(),
            date: "20180101".to_string(),
            time: "1900".to_string(),
            arena: "TD Garden".to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            attendance: "18624".into(),
            period_time: period_time("4", "3", "", "Final"),
            visitor: create_team_line(&LAKERS, &[24, 22, 27, 23], lakers_players()),
            home: create_team_line(&CELTICS, &[28, 25, 26, 28], celtics_players()),
        },
    };

    Boxscore {
        season_meta: create_mock_season_meta(),
        game,
    }
}

/// Play-by-play for a fixture game; the final game ends with "End Period"
pub fn create_mock_play_by_play(game_id: &str) -> PlayByPlay {
    let plays = match game_id {
        SCHEDULED_GAME_ID => Vec::new(),
        LIVE_GAME_ID => vec![
            create_play(1, 3, "7:02", "HOU", "Harden 3pt Shot: Made (23 PTS)", 76, 74),
            create_play(2, 3, "6:40", "GSW", "Curry Layup Shot: Made (22 PTS)", 76, 76),
            create_play(3, 3, "6:18", "GSW", "Durant Jump Shot: Made (19 PTS)", 76, 78),
            create_play(4, 3, "5:55", "HOU", "Capela Dunk Shot: Made (12 PTS)", 78, 78),
            create_play(5, 3, "5:21", "HOU", "Harden Driving Layup Shot: Made (25 PTS)", 80, 78),
        ],
        _ => vec![
            create_play(1, 4, "1:12", "LAL", "Ball 3pt Shot: Made (12 PTS)", 105, 94),
            create_play(2, 4, "0:47", "BOS", "Irving Driving Layup: Made (27 PTS)", 107, 94),
            create_play(3, 4, "0:21", "LAL", "Kuzma Jump Shot: Made (18 PTS)", 107, 96),
            create_play(4, 4, "0:00", "", "End Period", 107, 96),
        ],
    };

    PlayByPlay {
        id: game_id.to_string(),
        play: plays,
    }
}

/// Season averages, varied per team so comparisons are not all ties
pub fn create_mock_team_dashboard(team_id: &str) -> TeamDashboard {
    let seed = team_id
        .bytes()
        .map(|b| (b % 10) as u32)
        .sum::<u32>()
        % 10;
    let wins = 20 + seed;
    let losses = 16 - seed.min(15);
    let games = wins + losses;
    TeamDashboard {
        games_played: games,
        wins,
        losses,
        win_pct: wins as f64 / games as f64,
        points: 100.0 + seed as f64,
        fg_pct: 0.44 + seed as f64 / 200.0,
        fg3_pct: 0.35 + seed as f64 / 300.0,
        ft_pct: 0.76 + seed as f64 / 250.0,
        rebounds: 43.0 + seed as f64 / 2.0,
        assists: 21.0 + seed as f64 / 3.0,
        steals: 7.5,
        blocks: 4.8,
        turnovers: 14.2 - seed as f64 / 5.0,
        plus_minus: seed as f64 - 4.5,
    }
}

pub fn create_play(
    event: u32,
    period: u32,
    clock: &str,
    team: &str,
    description: &str,
    home_score: u32,
    visitor_score: u32,
) -> Play {
    Play {
        event: event.into(),
        period: period.into(),
        clock: clock.to_string(),
        description: description.to_string(),
        home_score: home_score.into(),
        visitor_score: visitor_score.into(),
        team_abr: team.to_string(),
        person_id: StatValue::default(),
    }
}

fn period_time(period: &str, status: &str, clock: &str, period_status: &str) -> PeriodTime {
    PeriodTime {
        period_value: period.into(),
        period_status: period_status.to_string(),
        game_status: status.into(),
        game_clock: clock.to_string(),
        total_periods: "4".into(),
        period_name: "Qtr".to_string(),
    }
}

fn create_team_line(team: &TeamInfo, quarters: &[u32], players: Vec<PlayerLine>) -> TeamLine {
    let stats = team_totals(&players);
    let leaders = game_leaders(&players);
    TeamLine {
        id: team.id.into(),
        team_key: team.abbrev.to_string(),
        city: team.city.to_string(),
        abbreviation: team.abbrev.to_string(),
        nickname: team.nickname.to_string(),
        score: quarters.iter().sum::<u32>().into(),
        linescores: Linescores {
            period: quarters
                .iter()
                .enumerate()
                .map(|(i, &score)| PeriodScore {
                    period_value: (i as u32 + 1).into(),
                    period_name: format!("Q{}", i + 1),
                    score: score.into(),
                })
                .collect(),
        },
        leaders,
        stats,
        players: PlayerList { player: players },
    }
}

/// Box score line; `line` is
/// [min, pts, oreb, dreb, ast, stl, blk, tov, fgm, fga, 3pm, 3pa, ftm, fta]
pub fn create_player(
    first: &str,
    last: &str,
    position: &str,
    starter: bool,
    line: [u32; 14],
    plus_minus: i32,
) -> PlayerLine {
    let [min, pts, oreb, dreb, ast, stl, blk, tov, fgm, fga, tpm, tpa, ftm, fta] = line;
    PlayerLine {
        first_name: first.to_string(),
        last_name: last.to_string(),
        jersey_number: String::new(),
        person_id: StatValue::default(),
        position_short: position.to_string(),
        minutes: min.into(),
        seconds: 0u32.into(),
        points: pts.into(),
        field_goals_made: fgm.into(),
        field_goals_attempted: fga.into(),
        three_pointers_made: tpm.into(),
        three_pointers_attempted: tpa.into(),
        free_throws_made: ftm.into(),
        free_throws_attempted: fta.into(),
        rebounds_offensive: oreb.into(),
        rebounds_defensive: dreb.into(),
        assists: ast.into(),
        fouls: 2u32.into(),
        steals: stl.into(),
        turnovers: tov.into(),
        blocks: blk.into(),
        plus_minus: plus_minus.into(),
        on_court: (if starter { 1u32 } else { 0 }).into(),
        starting_position: if starter { position.to_string() } else { String::new() },
    }
}

fn team_totals(players: &[PlayerLine]) -> TeamStats {
    let sum = |f: fn(&PlayerLine) -> &StatValue| -> StatValue {
        players.iter().map(|p| f(p).as_u32()).sum::<u32>().into()
    };
    let pct = |made: &StatValue, attempted: &StatValue| -> StatValue {
        match attempted.as_u32() {
            0 => StatValue::default(),
            a => format!("{:.1}", made.as_u32() as f64 * 100.0 / a as f64)
                .as_str()
                .into(),
        }
    };

    let fgm = sum(|p| &p.field_goals_made);
    let fga = sum(|p| &p.field_goals_attempted);
    let tpm = sum(|p| &p.three_pointers_made);
    let tpa = sum(|p| &p.three_pointers_attempted);
    let ftm = sum(|p| &p.free_throws_made);
    let fta = sum(|p| &p.free_throws_attempted);

    TeamStats {
        points: sum(|p| &p.points),
        field_goals_percentage: pct(&fgm, &fga),
        three_pointers_percentage: pct(&tpm, &tpa),
        free_throws_percentage: pct(&ftm, &fta),
        field_goals_made: fgm,
        field_goals_attempted: fga,
        three_pointers_made: tpm,
        three_pointers_attempted: tpa,
        free_throws_made: ftm,
        free_throws_attempted: fta,
        rebounds_offensive: sum(|p| &p.rebounds_offensive),
        rebounds_defensive: sum(|p| &p.rebounds_defensive),
        assists: sum(|p| &p.assists),
        fouls: sum(|p| &p.fouls),
        steals: sum(|p| &p.steals),
        turnovers: sum(|p| &p.turnovers),
        blocks: sum(|p| &p.blocks),
        ..Default::default()
    }
}

fn game_leaders(players: &[PlayerLine]) -> Leaders {
    let leader_by = |value: fn(&PlayerLine) -> u32| -> Option<LeaderCategory> {
        let best = players.iter().max_by_key(|p| value(p))?;
        Some(LeaderCategory {
            stat_value: value(best).into(),
            leader: vec![Leader {
                person_id: best.person_id.clone(),
                first_name: best.first_name.clone(),
                last_name: best.last_name.clone(),
            }],
        })
    };

    Leaders {
        points: leader_by(|p| p.points.as_u32()),
        rebounds: leader_by(|p| p.rebounds()),
        assists: leader_by(|p| p.assists.as_u32()),
    }
}

fn lakers_players() -> Vec<PlayerLine> {
    vec![
        create_player("Lonzo", "Ball", "G", true, [34, 12, 1, 6, 9, 2, 1, 3, 4, 11, 4, 8, 0, 0], -6),
        create_player("Kentavious", "Caldwell-Pope", "G", true, [33, 14, 0, 3, 2, 1, 0, 1, 5, 12, 2, 6, 2, 2], -10),
        create_player("Brandon", "Ingram", "F", true, [36, 20, 1, 5, 4, 1, 1, 4, 8, 16, 1, 3, 3, 4], -12),
        create_player("Kyle", "Kuzma", "F", true, [35, 18, 2, 7, 1, 0, 0, 2, 7, 17, 2, 7, 2, 2], -9),
        create_player("Brook", "Lopez", "C", true, [25, 10, 1, 4, 1, 0, 2, 1, 4, 9, 2, 5, 0, 0], -4),
        create_player("Julius", "Randle", "F", false, [22, 14, 3, 6, 2, 1, 0, 2, 6, 10, 0, 0, 2, 4], -5),
        create_player("Jordan", "Clarkson", "G", false, [21, 8, 0, 2, 3, 0, 0, 1, 3, 9, 1, 4, 1, 1], -3),
        create_player("Josh", "Hart", "G", false, [18, 0, 1, 3, 0, 1, 0, 0, 0, 3, 0, 2, 0, 0], -2),
        create_player("Larry", "Nance Jr.", "F", false, [16, 0, 2, 2, 1, 1, 1, 1, 0, 2, 0, 0, 0, 0], -4),
    ]
}

fn celtics_players() -> Vec<PlayerLine> {
    vec![
        create_player("Kyrie", "Irving", "G", true, [35, 27, 0, 4, 6, 1, 0, 3, 10, 20, 3, 7, 4, 4], 12),
        create_player("Jaylen", "Brown", "G", true, [32, 16, 1, 5, 2, 1, 1, 2, 6, 13, 2, 5, 2, 3], 9),
        create_player("Jayson", "Tatum", "F", true, [33, 19, 2, 6, 3, 2, 1, 1, 7, 14, 2, 4, 3, 3], 14),
        create_player("Al", "Horford", "C", true, [31, 15, 2, 8, 7, 0, 2, 2, 6, 11, 1, 3, 2, 2], 10),
        create_player("Aron", "Baynes", "C", true, [20, 6, 3, 5, 0, 0, 1, 1, 3, 6, 0, 0, 0, 0], 6),
        create_player("Marcus", "Smart", "G", false, [26, 11, 1, 3, 5, 2, 0, 2, 3, 10, 2, 6, 3, 4], 4),
        create_player("Terry", "Rozier", "G", false, [22, 9, 0, 4, 2, 1, 0, 1, 3, 8, 2, 5, 1, 2], 2),
        create_player("Marcus", "Morris", "F", false, [21, 4, 1, 3, 1, 0, 0, 1, 2, 7, 0, 3, 0, 0], 1),
    ]
}

fn warriors_players() -> Vec<PlayerLine> {
    vec![
        create_player("Stephen", "Curry", "G", true, [27, 22, 0, 4, 5, 2, 0, 3, 7, 15, 4, 9, 4, 4], 1),
        create_player("Klay", "Thompson", "G", true, [26, 14, 0, 2, 1, 0, 0, 1, 6, 13, 2, 6, 0, 0], -2),
        create_player("Kevin", "Durant", "F", true, [28, 19, 1, 6, 3, 1, 2, 2, 8, 15, 1, 3, 2, 2], 0),
        create_player("Draymond", "Green", "F", true, [25, 6, 2, 7, 8, 2, 1, 3, 3, 6, 0, 2, 0, 0], 3),
        create_player("Zaza", "Pachulia", "C", true, [14, 6, 2, 3, 1, 0, 0, 1, 3, 4, 0, 0, 0, 0], -4),
        create_player("Andre", "Iguodala", "F", false, [17, 5, 0, 3, 2, 1, 0, 0, 2, 4, 1, 2, 0, 0], 2),
        create_player("Nick", "Young", "G", false, [12, 6, 0, 1, 0, 0, 0, 1, 2, 6, 2, 5, 0, 0], -6),
    ]
}

fn rockets_players() -> Vec<PlayerLine> {
    vec![
        create_player("James", "Harden", "G", true, [29, 25, 1, 5, 7, 2, 1, 4, 7, 17, 4, 10, 7, 8], 4),
        create_player("Chris", "Paul", "G", true, [27, 15, 0, 4, 8, 2, 0, 1, 5, 11, 3, 6, 2, 2], 6),
        create_player("Trevor", "Ariza", "F", true, [26, 9, 0, 3, 1, 1, 0, 0, 3, 8, 3, 7, 0, 0], 2),
        create_player("Ryan", "Anderson", "F", true, [20, 8, 1, 3, 0, 0, 0, 1, 3, 6, 2, 4, 0, 0], -1),
        create_player("Clint", "Capela", "C", true, [24, 12, 4, 6, 1, 0, 3, 1, 6, 8, 0, 0, 0, 2], 5),
        create_player("Eric", "Gordon", "G", false, [22, 11, 0, 2, 2, 0, 0, 1, 4, 11, 3, 8, 0, 0], -3),
    ]
}
