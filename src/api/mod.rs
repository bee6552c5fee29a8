//! Typed access to the basketball data feed and stats API

pub mod client;
pub mod error;
pub mod models;

pub use client::Client;
pub use error::NbaApiError;
pub use models::{
    Boxscore, BoxscoreGame, Leader, LeaderCategory, Leaders, PeriodTime, Play, PlayByPlay,
    PlayerLine, ScheduledGame, SeasonMeta, StatValue, TeamDashboard, TeamLine, TeamStats,
};
