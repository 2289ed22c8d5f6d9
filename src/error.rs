//! Error types for pomodoro.

use thiserror::Error;

/// Errors that can occur outside the timer state machine.
///
/// The state machine itself has no failure modes; these cover the
/// configuration, terminal, and output layers around it.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Configuration could not be resolved, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic parse failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A duration argument was malformed or out of bounds.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// The terminal could not be set up, drawn, or polled.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PomodoroError {
    /// Wrap a terminal-layer error with a short description of what failed.
    pub fn terminal(action: &str, err: impl std::fmt::Display) -> Self {
        Self::Terminal(format!("{action}: {err}"))
    }
}
