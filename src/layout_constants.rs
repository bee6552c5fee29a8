//! Shared layout constants used across CLI and TUI components.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Width of the team abbreviation column in line scores
pub const TEAM_ABBREV_COL_WIDTH: usize = 5;

/// Width of each period column in line scores ("1", "OT1", "T")
pub const PERIOD_COL_WIDTH: usize = 4;

/// Height of the line score widget (top, header, middle, visitor, home, bottom)
pub const SCORE_TABLE_HEIGHT: u16 = 6;

// CLI-specific formatting constants

/// Width of the player name column in box scores
pub const BOXSCORE_NAME_WIDTH: usize = 20;

/// Width of shooting columns ("10-21")
pub const BOXSCORE_SHOT_WIDTH: usize = 6;

/// Width of the label column in the preview comparison
pub const PREVIEW_LABEL_WIDTH: usize = 10;

/// Width of each team column in the preview comparison
pub const PREVIEW_VALUE_WIDTH: usize = 10;

// TUI-specific layout constants

/// Rows used by the dashboard header (season, date, arena)
pub const DASHBOARD_HEADER_HEIGHT: u16 = 1;

/// Rows used by the team name / score / clock row
pub const DASHBOARD_SCORE_HEIGHT: u16 = 3;

/// Minimum rows for the play-by-play panel
pub const PLAY_BY_PLAY_MIN_HEIGHT: u16 = 6;

/// Width of the selection prefix in the game picker ("► ")
pub const PICKER_SELECTOR_WIDTH: u16 = 2;
