//! Output formatting for pomodoro.
//!
//! This module provides formatters for displaying timer state and
//! configuration in pretty or JSON form.

mod json;
mod pretty;

use chrono::{DateTime, Local};

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::features::focus::{Snapshot, Transition};

pub use json::*;
pub use pretty::*;

/// Format a timer snapshot as a single status line.
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_status_line(snapshot)),
        OutputFormat::Json => format_snapshot_json(snapshot),
    }
}

/// Format an interval switch that happened at `at`.
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_transition(
    transition: &Transition,
    at: DateTime<Local>,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_transition_line(transition, at)),
        OutputFormat::Json => format_transition_json(transition, at),
    }
}

/// Format the effective configuration.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => format_config_pretty(config),
        OutputFormat::Json => to_json(config),
    }
}
