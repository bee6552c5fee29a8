/// Shared types used across the application
///
/// This module contains type definitions that are shared between
/// the library (commands, tui) and the binary (main.rs).

/// Global constants
pub const NBA_LEAGUE_ABBREV: &str = "NBA";

/// Status code the feed sends for a game at the half
pub const HALFTIME_CODE: &str = "Halftime";

/// Where a game stands, from the feed's `game_status` code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// "1"
    Scheduled,
    /// "2"
    InProgress,
    /// "Halftime"
    Halftime,
    /// "3", and any code we don't recognize
    Final,
}

impl GameStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => GameStatus::Scheduled,
            "2" => GameStatus::InProgress,
            HALFTIME_CODE => GameStatus::Halftime,
            _ => GameStatus::Final,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameStatus::InProgress | GameStatus::Halftime)
    }
}

/// Q1..Q4 for regulation, OT1, OT2... after that
pub fn period_label(period: u32) -> String {
    match period {
        0 => String::new(),
        1..=4 => format!("Q{}", period),
        n => format!("OT{}", n - 4),
    }
}

/// Column header for a period in a line score: 1..4, then OT1, OT2...
pub fn period_column_label(period: u32) -> String {
    if period <= 4 {
        period.to_string()
    } else {
        period_label(period)
    }
}
