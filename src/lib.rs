pub mod api;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod season;
pub mod team_colors;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod dev;
