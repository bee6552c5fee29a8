/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused components that render straight into a ratatui
/// buffer. The live dashboard and the game picker are composed from them.

#[cfg(test)]
pub mod testing;

pub mod game_list;
pub use game_list::GameList;

pub mod play_by_play;
pub use play_by_play::PlayByPlayList;

pub mod player_stats_table;
pub use player_stats_table::PlayerStatsTable;

pub mod score_table;
pub use score_table::ScoreTable;

pub mod section_header;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, so they can be
/// composed and rendered to test buffers.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
