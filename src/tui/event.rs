//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomodoroError;

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start, pause or resume the timer.
    PlayPause,
    /// Stop and reset the timer.
    Stop,
    /// Lengthen the focus interval.
    FocusIncrease,
    /// Shorten the focus interval.
    FocusDecrease,
    /// Lengthen the break interval.
    BreakIncrease,
    /// Shorten the break interval.
    BreakDecrease,
    /// Show key help.
    Help,
}

/// Map a key press to an action.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 'p') | KeyCode::Enter => Some(Action::PlayPause),
        KeyCode::Char('s') => Some(Action::Stop),
        KeyCode::Char('F' | '+') | KeyCode::Up => Some(Action::FocusIncrease),
        KeyCode::Char('f' | '-') | KeyCode::Down => Some(Action::FocusDecrease),
        KeyCode::Char('B') | KeyCode::Right => Some(Action::BreakIncrease),
        KeyCode::Char('b') | KeyCode::Left => Some(Action::BreakDecrease),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(timeout: Duration) -> Result<Option<Action>, PomodoroError> {
    if !event::poll(timeout).map_err(|e| PomodoroError::terminal("Event poll failed", e))? {
        return Ok(None);
    }

    match event::read().map_err(|e| PomodoroError::terminal("Event read failed", e))? {
        Event::Key(key) => Ok(action_for_key(key)),
        _ => Ok(None),
    }
}
