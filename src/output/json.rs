//! JSON output formatting for pomodoro.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::PomodoroError;
use crate::features::focus::{Snapshot, Transition};

/// Serialize any value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `PomodoroError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomodoroError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a snapshot as one compact JSON line, for streaming one per tick.
///
/// # Errors
///
/// Returns `PomodoroError::Json` if serialization fails.
pub fn format_snapshot_json(snapshot: &Snapshot) -> Result<String, PomodoroError> {
    Ok(serde_json::to_string(snapshot)?)
}

#[derive(Serialize)]
struct TransitionEvent<'a> {
    at: DateTime<Local>,
    transition: &'a Transition,
}

/// Format a transition as one compact JSON line with its timestamp.
///
/// # Errors
///
/// Returns `PomodoroError::Json` if serialization fails.
pub fn format_transition_json(
    transition: &Transition,
    at: DateTime<Local>,
) -> Result<String, PomodoroError> {
    Ok(serde_json::to_string(&TransitionEvent { at, transition })?)
}
