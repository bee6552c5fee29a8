/// Full-screen game picker
///
/// Selection state and key mapping are plain functions so they can be tested
/// without a terminal; `pick` wires them to crossterm.
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::config::DisplayConfig;
use crate::tui::widgets::{GameList, RenderableWidget};
use crate::tui::{restore_terminal, setup_terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Up,
    Down,
    Select,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(usize),
    Cancelled,
}

/// Cursor over a fixed number of options, clamped at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    selected: usize,
    len: usize,
}

impl PickerState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply an action; returns the outcome once the user is done
    pub fn apply(&mut self, action: PickerAction) -> Option<PickerOutcome> {
        match action {
            PickerAction::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            PickerAction::Down => {
                if self.selected + 1 < self.len {
                    self.selected += 1;
                }
                None
            }
            PickerAction::Select if self.len > 0 => Some(PickerOutcome::Selected(self.selected)),
            PickerAction::Select => None,
            PickerAction::Cancel => Some(PickerOutcome::Cancelled),
        }
    }
}

pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Enter => Some(PickerAction::Select),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(PickerAction::Cancel),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PickerAction::Cancel)
        }
        _ => None,
    }
}

/// Show `options` full screen and let the user choose one
///
/// Returns the chosen index, or `None` if the user cancelled. The terminal is
/// restored before returning, even on error.
pub fn pick(title: &str, options: &[String], display: &DisplayConfig) -> io::Result<Option<usize>> {
    let mut terminal = setup_terminal()?;
    let mut state = PickerState::new(options.len());

    let result = (|| -> io::Result<PickerOutcome> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                GameList::new(title, options, state.selected()).render(area, f.buffer_mut(), display);
            })?;

            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(key) {
                    debug!("PICKER: {:?}", action);
                    if let Some(outcome) = state.apply(action) {
                        return Ok(outcome);
                    }
                }
            }
        }
    })();

    restore_terminal(&mut terminal)?;

    match result? {
        PickerOutcome::Selected(index) => Ok(Some(index)),
        PickerOutcome::Cancelled => Ok(None),
    }
}
